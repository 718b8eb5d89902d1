//! Immigration eligibility tools: work-experience crediting and permit status strategy.
//!
//! Both engines are pure functions of their inputs. The reference date for status
//! checks is always passed in, either directly or through a [`Clock`] held by the
//! [`ImmigrationAdvisor`] facade.

pub mod advisor;
pub mod clock;
pub mod experience;
pub mod status;

#[cfg(test)]
mod tests;

pub use advisor::{AssessmentError, AssessmentReport, AssessmentRequest, ImmigrationAdvisor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use experience::{
    validate_work_experience, ExperienceResult, ProgramTarget, WorkExperienceValidator,
    WorkPattern, HOURS_PER_YEAR, MAX_COUNTED_HOURS_PER_WEEK,
};
pub use status::{
    analyze_status_strategy, days_between, CurrentLocation, StatusInput, StatusResult,
    StatusState, StatusStrategyEngine, PREPARATION_WINDOW_DAYS, RESTORATION_WINDOW_DAYS,
    URGENT_WINDOW_DAYS,
};
