use chrono::{Duration, NaiveDate};

use crate::workflows::immigration::experience::{ProgramTarget, WorkPattern};
use crate::workflows::immigration::status::{CurrentLocation, StatusInput};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn full_time_pattern(program_target: ProgramTarget) -> WorkPattern {
    WorkPattern {
        hours_per_week: 30.0,
        weeks_worked: 52.0,
        is_seasonal: false,
        is_student: false,
        is_self_employed: false,
        is_coop: false,
        program_target,
    }
}

/// Permit expiring `days` after [`today`]; negative values expire in the past.
pub(super) fn permit_expiring_in(days: i64, has_submitted_extension: bool) -> StatusInput {
    StatusInput {
        expiry_date: today() + Duration::days(days),
        has_submitted_extension,
        current_location: CurrentLocation::InsideCanada,
    }
}
