use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the permit holder is when the status is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentLocation {
    InsideCanada,
    OutsideCanada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInput {
    pub expiry_date: NaiveDate,
    pub has_submitted_extension: bool,
    pub current_location: CurrentLocation,
}

/// Legal status classification derived from the permit expiry.
///
/// `Valid` and `Maintained` are ongoing, `RestorationPeriod` decays over a fixed
/// window and `OutOfStatus` has no in-country remedy left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Valid,
    Maintained,
    RestorationPeriod,
    OutOfStatus,
}

impl StatusState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Maintained => "Maintained Status",
            Self::RestorationPeriod => "Restoration Period",
            Self::OutOfStatus => "Out of Status",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::OutOfStatus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub status_state: StatusState,
    pub days_remaining: i64,
    pub action_plan: Vec<String>,
    pub legal_nuances: Vec<String>,
    pub urgent_action_required: bool,
}

impl StatusResult {
    pub fn summary(&self) -> String {
        let urgency = if self.urgent_action_required {
            " (urgent)"
        } else {
            ""
        };
        format!(
            "{}: {} day(s) remaining{}",
            self.status_state.label(),
            self.days_remaining,
            urgency
        )
    }
}
