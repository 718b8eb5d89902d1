use serde::{Deserialize, Serialize};

/// Skilled-worker pathway the reported experience is being measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgramTarget {
    /// Canadian Experience Class.
    Cec,
    /// Federal Skilled Worker.
    Fsw,
    /// Federal Skilled Trades.
    Fst,
}

impl ProgramTarget {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cec => "CEC",
            Self::Fsw => "FSW",
            Self::Fst => "FST",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cec => "Canadian Experience Class",
            Self::Fsw => "Federal Skilled Worker",
            Self::Fst => "Federal Skilled Trades",
        }
    }
}

/// Work history as reported by the applicant, before any policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkPattern {
    pub hours_per_week: f64,
    pub weeks_worked: f64,
    pub is_seasonal: bool,
    pub is_student: bool,
    pub is_self_employed: bool,
    pub is_coop: bool,
    pub program_target: ProgramTarget,
}

/// Experience credited toward a program once caps and exclusions are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResult {
    pub program_target: ProgramTarget,
    pub effective_hours_per_week: f64,
    pub eligible_hours: f64,
    /// Always `0.0` when `is_valid_for_program` is false.
    pub eligible_years: f64,
    /// Derived from the seasonal flag only; actual employment gaps are not analysed.
    pub is_continuous: bool,
    pub is_valid_for_program: bool,
    pub warnings: Vec<String>,
    pub breakdown: String,
}

impl ExperienceResult {
    pub fn summary(&self) -> String {
        if self.is_valid_for_program {
            format!(
                "{:.2} year(s) of {} experience",
                self.eligible_years,
                self.program_target.code()
            )
        } else {
            format!(
                "experience does not qualify for {}",
                self.program_target.code()
            )
        }
    }
}
