use super::common::*;
use crate::workflows::immigration::experience::{
    validate_work_experience, ProgramTarget, WorkExperienceValidator, HOURS_PER_YEAR,
    MAX_COUNTED_HOURS_PER_WEEK,
};

#[test]
fn overtime_is_capped_for_full_year_of_cec_work() {
    let mut pattern = full_time_pattern(ProgramTarget::Cec);
    pattern.hours_per_week = 40.0;

    let result = validate_work_experience(&pattern);

    assert_eq!(result.effective_hours_per_week, 30.0);
    assert_eq!(result.eligible_hours, 1560.0);
    assert_eq!(result.eligible_years, 1.0);
    assert!(result.is_valid_for_program);
    assert!(result.is_continuous);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("reported 40 hrs/week"));
    assert!(result.warnings[0].contains("counted 30 hrs/week"));
}

#[test]
fn hours_at_or_below_cap_are_counted_in_full() {
    for hours in [0.0, 12.5, 29.9, MAX_COUNTED_HOURS_PER_WEEK] {
        let mut pattern = full_time_pattern(ProgramTarget::Fst);
        pattern.hours_per_week = hours;

        let result = validate_work_experience(&pattern);

        assert_eq!(result.effective_hours_per_week, hours);
        assert!(
            result.warnings.is_empty(),
            "no overtime warning expected for {hours} hrs/week"
        );
    }
}

#[test]
fn eligible_years_round_to_two_decimals() {
    let mut pattern = full_time_pattern(ProgramTarget::Fsw);
    pattern.hours_per_week = 20.0;
    pattern.weeks_worked = 26.0;

    let result = validate_work_experience(&pattern);

    assert_eq!(result.eligible_hours, 520.0);
    assert_eq!(result.eligible_years, 0.33);
    assert_eq!(
        result.eligible_years,
        ((520.0 / HOURS_PER_YEAR) * 100.0_f64).round() / 100.0
    );
}

#[test]
fn cec_rejects_each_disqualifying_condition_with_its_own_warning() {
    let mut pattern = full_time_pattern(ProgramTarget::Cec);
    pattern.is_student = true;
    pattern.is_coop = true;
    pattern.is_self_employed = true;
    pattern.hours_per_week = 45.0;

    let result = validate_work_experience(&pattern);

    assert!(!result.is_valid_for_program);
    assert_eq!(result.eligible_years, 0.0);
    assert_eq!(result.eligible_hours, 1560.0);
    assert_eq!(result.warnings.len(), 4);
    assert!(result.warnings[0].contains("student"));
    assert!(result.warnings[1].contains("co-op"));
    assert!(result.warnings[2].contains("self-employment"));
    assert!(result.warnings[3].contains("disregarded"));
}

#[test]
fn cec_single_exclusion_still_zeroes_years() {
    let mut pattern = full_time_pattern(ProgramTarget::Cec);
    pattern.is_self_employed = true;

    let result = validate_work_experience(&pattern);

    assert!(!result.is_valid_for_program);
    assert_eq!(result.eligible_years, 0.0);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("self-employment"));
}

#[test]
fn fsw_stays_valid_but_flags_seasonal_and_student_work() {
    let mut pattern = full_time_pattern(ProgramTarget::Fsw);
    pattern.is_seasonal = true;
    pattern.is_student = true;
    pattern.hours_per_week = 35.0;

    let result = validate_work_experience(&pattern);

    assert!(result.is_valid_for_program);
    assert!(!result.is_continuous);
    assert_eq!(result.eligible_years, 1.0);
    assert_eq!(result.warnings.len(), 3);
    assert!(result.warnings[0].contains("seasonal"));
    assert!(result.warnings[1].contains("continuous and paid"));
    assert!(result.warnings[2].contains("reported 35 hrs/week"));
}

#[test]
fn fst_ignores_status_flags() {
    let mut pattern = full_time_pattern(ProgramTarget::Fst);
    pattern.is_student = true;
    pattern.is_coop = true;
    pattern.is_self_employed = true;
    pattern.is_seasonal = true;

    let result = validate_work_experience(&pattern);

    assert!(result.is_valid_for_program);
    assert!(result.warnings.is_empty());
    assert_eq!(result.eligible_years, 1.0);
    assert!(!result.is_continuous);
}

#[test]
fn negative_weeks_propagate_without_error() {
    let mut pattern = full_time_pattern(ProgramTarget::Fsw);
    pattern.weeks_worked = -10.0;

    let result = validate_work_experience(&pattern);

    assert_eq!(result.eligible_hours, -300.0);
    assert!(result.eligible_years < 0.0);
}

#[test]
fn breakdown_reports_effective_hours_weeks_and_total() {
    let mut pattern = full_time_pattern(ProgramTarget::Cec);
    pattern.hours_per_week = 50.0;
    pattern.weeks_worked = 10.0;

    let result = WorkExperienceValidator::new().validate(&pattern);

    assert_eq!(
        result.breakdown,
        "30 hrs/week x 10 weeks = 300 eligible hours"
    );
}

#[test]
fn validation_is_idempotent() {
    let mut pattern = full_time_pattern(ProgramTarget::Fsw);
    pattern.is_seasonal = true;
    pattern.hours_per_week = 42.0;

    let first = validate_work_experience(&pattern);
    let second = validate_work_experience(&pattern);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn nan_hours_are_counted_at_the_cap() {
    let mut pattern = full_time_pattern(ProgramTarget::Fst);
    pattern.hours_per_week = f64::NAN;

    let result = validate_work_experience(&pattern);

    assert_eq!(result.effective_hours_per_week, MAX_COUNTED_HOURS_PER_WEEK);
    assert_eq!(result.eligible_hours, 1560.0);
    assert!(result.warnings.is_empty());
}
