mod domain;
mod policy;

pub use domain::{CurrentLocation, StatusInput, StatusResult, StatusState};
pub use policy::{PREPARATION_WINDOW_DAYS, RESTORATION_WINDOW_DAYS, URGENT_WINDOW_DAYS};

use chrono::NaiveDate;
use policy::decide_status;

/// Stateless engine classifying a permit holder's status against a reference date.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusStrategyEngine;

impl StatusStrategyEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, input: &StatusInput, today: NaiveDate) -> StatusResult {
        analyze_status_strategy(input, today)
    }
}

/// Whole days from `today` until `expiry`; negative once the expiry has passed.
pub fn days_between(today: NaiveDate, expiry: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Classify the status for `input` as of `today`.
///
/// The engine keeps no memory between calls: a holder moves from `Valid` to
/// `RestorationPeriod` to `OutOfStatus` only because callers re-evaluate with a later date.
pub fn analyze_status_strategy(input: &StatusInput, today: NaiveDate) -> StatusResult {
    let days_until_expiry = days_between(today, input.expiry_date);
    decide_status(
        days_until_expiry,
        input.has_submitted_extension,
        input.current_location,
    )
}
