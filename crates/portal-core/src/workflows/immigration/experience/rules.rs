use super::domain::{ProgramTarget, WorkPattern};

pub const MAX_COUNTED_HOURS_PER_WEEK: f64 = 30.0;
/// 30 hours a week over 52 weeks.
pub const HOURS_PER_YEAR: f64 = 1560.0;

/// Outcome of the program-specific checks, kept apart from the hour arithmetic.
pub(crate) struct ProgramAssessment {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

pub(crate) fn assess_program(pattern: &WorkPattern) -> ProgramAssessment {
    let mut warnings = Vec::new();
    let mut is_valid = true;

    match pattern.program_target {
        ProgramTarget::Cec => {
            if pattern.is_student {
                is_valid = false;
                warnings.push(
                    "CEC: work performed while enrolled as a full-time student does not count"
                        .to_string(),
                );
            }
            if pattern.is_coop {
                is_valid = false;
                warnings.push(
                    "CEC: co-op work terms that were part of a study program do not count"
                        .to_string(),
                );
            }
            if pattern.is_self_employed {
                is_valid = false;
                warnings.push("CEC: self-employment does not count toward CEC".to_string());
            }
        }
        ProgramTarget::Fsw => {
            if pattern.is_seasonal {
                warnings.push(
                    "FSW: seasonal gaps may break the continuous employment requirement"
                        .to_string(),
                );
            }
            if pattern.is_student {
                warnings.push(
                    "FSW: student work only counts if it was continuous and paid".to_string(),
                );
            }
        }
        ProgramTarget::Fst => {}
    }

    ProgramAssessment { is_valid, warnings }
}

pub(crate) fn overtime_warning(hours_per_week: f64) -> Option<String> {
    (hours_per_week > MAX_COUNTED_HOURS_PER_WEEK).then(|| {
        format!(
            "Hours above {cap} per week are disregarded: reported {hours_per_week} hrs/week, counted {cap} hrs/week",
            cap = MAX_COUNTED_HOURS_PER_WEEK
        )
    })
}

pub(crate) fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
