use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::Clock;
use super::experience::{ExperienceResult, WorkExperienceValidator, WorkPattern};
use super::status::{StatusInput, StatusResult, StatusStrategyEngine};

/// Combined request accepted by the immigration tools.
///
/// Either section may be omitted, but not both. `today` overrides the advisor's clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub work_experience: Option<WorkPattern>,
    #[serde(default)]
    pub status: Option<StatusInput>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub evaluated_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<ExperienceResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusResult>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("assessment request must include work_experience or status")]
    EmptyRequest,
}

/// Facade pairing both engines with the clock that supplies "today".
pub struct ImmigrationAdvisor<C> {
    clock: C,
    validator: WorkExperienceValidator,
    engine: StatusStrategyEngine,
}

impl<C: Clock> ImmigrationAdvisor<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            validator: WorkExperienceValidator::new(),
            engine: StatusStrategyEngine::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn work_experience(&self, pattern: &WorkPattern) -> ExperienceResult {
        let result = self.validator.validate(pattern);
        debug!(
            program = result.program_target.code(),
            eligible_hours = result.eligible_hours,
            eligible_years = result.eligible_years,
            valid = result.is_valid_for_program,
            warnings = result.warnings.len(),
            "work experience validated"
        );
        result
    }

    pub fn status(&self, input: &StatusInput) -> StatusResult {
        self.status_on(input, self.clock.today())
    }

    pub fn status_on(&self, input: &StatusInput, today: NaiveDate) -> StatusResult {
        let result = self.engine.analyze(input, today);
        debug!(
            %today,
            expiry = %input.expiry_date,
            state = result.status_state.label(),
            days_remaining = result.days_remaining,
            urgent = result.urgent_action_required,
            "status strategy analyzed"
        );
        result
    }

    /// Run every section present in `request` against a single reference date.
    pub fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
        if request.work_experience.is_none() && request.status.is_none() {
            return Err(AssessmentError::EmptyRequest);
        }

        let evaluated_on = request.today.unwrap_or_else(|| self.clock.today());

        Ok(AssessmentReport {
            evaluated_on,
            work_experience: request
                .work_experience
                .as_ref()
                .map(|pattern| self.work_experience(pattern)),
            status: request
                .status
                .as_ref()
                .map(|input| self.status_on(input, evaluated_on)),
        })
    }
}
