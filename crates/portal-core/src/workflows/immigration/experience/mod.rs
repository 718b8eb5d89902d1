mod domain;
mod rules;

pub use domain::{ExperienceResult, ProgramTarget, WorkPattern};

use rules::{assess_program, overtime_warning, round_two_places};
pub use rules::{HOURS_PER_YEAR, MAX_COUNTED_HOURS_PER_WEEK};

/// Stateless validator converting reported hours into program-eligible experience.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkExperienceValidator;

impl WorkExperienceValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, pattern: &WorkPattern) -> ExperienceResult {
        validate_work_experience(pattern)
    }
}

/// Apply the weekly hour cap and the program's exclusion rules to a work pattern.
///
/// Inputs are not sanitised here: negative hours or weeks flow straight through the
/// arithmetic, so callers are expected to reject them at the form boundary.
///
/// # Notes
///
/// A NaN `hours_per_week` is treated as the weekly cap: `f64::min` returns the
/// non-NaN operand, so 30 hours are counted and no overtime warning is raised.
pub fn validate_work_experience(pattern: &WorkPattern) -> ExperienceResult {
    let effective_hours_per_week = pattern.hours_per_week.min(MAX_COUNTED_HOURS_PER_WEEK);
    let eligible_hours = effective_hours_per_week * pattern.weeks_worked;
    let years = round_two_places(eligible_hours / HOURS_PER_YEAR);

    let assessment = assess_program(pattern);
    let mut warnings = assessment.warnings;
    warnings.extend(overtime_warning(pattern.hours_per_week));

    let eligible_years = if assessment.is_valid { years } else { 0.0 };

    ExperienceResult {
        program_target: pattern.program_target,
        effective_hours_per_week,
        eligible_hours,
        eligible_years,
        is_continuous: !pattern.is_seasonal,
        is_valid_for_program: assessment.is_valid,
        warnings,
        breakdown: format!(
            "{} hrs/week x {} weeks = {} eligible hours",
            effective_hours_per_week, pattern.weeks_worked, eligible_hours
        ),
    }
}
