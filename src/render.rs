use chrono::NaiveDate;
use portal_core::config::OutputFormat;
use portal_core::error::AppError;
use portal_core::workflows::immigration::{
    AssessmentReport, ExperienceResult, StatusResult, MAX_COUNTED_HOURS_PER_WEEK,
};
use serde::Serialize;

/// Result of a single CLI command, ready to be printed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Rendered {
    Experience(ExperienceResult),
    Status(StatusView),
    Assessment(AssessmentReport),
}

/// Status result stamped with the date it was evaluated against.
#[derive(Debug, Serialize)]
pub(crate) struct StatusView {
    pub(crate) evaluated_on: NaiveDate,
    #[serde(flatten)]
    pub(crate) result: StatusResult,
}

pub(crate) fn render(rendered: &Rendered, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rendered)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(rendered)),
    }
}

fn render_text(rendered: &Rendered) -> String {
    let mut out = String::new();
    match rendered {
        Rendered::Experience(result) => write_experience(&mut out, result),
        Rendered::Status(view) => write_status(&mut out, view.evaluated_on, &view.result),
        Rendered::Assessment(report) => {
            let mut first = true;
            if let Some(result) = &report.work_experience {
                write_experience(&mut out, result);
                first = false;
            }
            if let Some(result) = &report.status {
                if !first {
                    out.push('\n');
                }
                write_status(&mut out, report.evaluated_on, result);
            }
        }
    }
    out
}

fn write_experience(out: &mut String, result: &ExperienceResult) {
    out.push_str(&format!(
        "Work experience ({})\n",
        result.program_target.label()
    ));
    out.push_str(&format!("- {}\n", result.breakdown));
    out.push_str(&format!(
        "- Eligible years: {:.2} (cap {} hrs/week)\n",
        result.eligible_years, MAX_COUNTED_HOURS_PER_WEEK
    ));
    out.push_str(&format!(
        "- Valid for program: {} | continuous: {}\n",
        yes_no(result.is_valid_for_program),
        yes_no(result.is_continuous)
    ));
    write_list(out, "Warnings", &result.warnings);
}

fn write_status(out: &mut String, evaluated_on: NaiveDate, result: &StatusResult) {
    out.push_str(&format!("Permit status (evaluated {evaluated_on})\n"));
    out.push_str(&format!("- {}\n", result.summary()));
    write_list(out, "Action plan", &result.action_plan);
    write_list(out, "Legal nuances", &result.legal_nuances);
}

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("{heading}: none\n"));
        return;
    }
    out.push_str(&format!("{heading}\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::workflows::immigration::{
        validate_work_experience, ProgramTarget, StatusState, WorkPattern,
    };

    fn experience() -> ExperienceResult {
        validate_work_experience(&WorkPattern {
            hours_per_week: 40.0,
            weeks_worked: 52.0,
            is_seasonal: false,
            is_student: false,
            is_self_employed: false,
            is_coop: false,
            program_target: ProgramTarget::Cec,
        })
    }

    fn valid_view() -> StatusView {
        StatusView {
            evaluated_on: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            result: StatusResult {
                status_state: StatusState::Valid,
                days_remaining: 120,
                action_plan: Vec::new(),
                legal_nuances: Vec::new(),
                urgent_action_required: false,
            },
        }
    }

    #[test]
    fn text_output_lists_breakdown_and_warnings() {
        let text = render(&Rendered::Experience(experience()), OutputFormat::Text)
            .expect("renders");

        assert!(text.starts_with("Work experience (Canadian Experience Class)"));
        assert!(text.contains("30 hrs/week x 52 weeks = 1560 eligible hours"));
        assert!(text.contains("Eligible years: 1.00"));
        assert!(text.contains("Warnings\n  - Hours above 30 per week"));
    }

    #[test]
    fn status_json_flattens_result_next_to_date() {
        let rendered = Rendered::Status(valid_view());

        let json = render(&rendered, OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["evaluated_on"], "2025-01-01");
        assert_eq!(value["status_state"], "valid");
        assert_eq!(value["days_remaining"], 120);
    }

    #[test]
    fn empty_sections_render_as_none() {
        let rendered = Rendered::Status(valid_view());

        let text = render(&rendered, OutputFormat::Text).expect("renders");

        assert!(text.starts_with("Permit status (evaluated 2025-01-01)\n"));
        assert!(text.contains("Action plan: none\n"));
        assert!(text.ends_with("Legal nuances: none\n"));
        assert!(text.contains("Valid: 120 day(s) remaining"));
    }
}
