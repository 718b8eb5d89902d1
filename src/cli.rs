use crate::render::{render, Rendered, StatusView};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use portal_core::config::{AppConfig, OutputFormat};
use portal_core::error::AppError;
use portal_core::telemetry;
use portal_core::workflows::immigration::{
    AssessmentRequest, Clock, CurrentLocation, FixedClock, ImmigrationAdvisor, ProgramTarget,
    StatusInput, SystemClock, WorkPattern,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "portal",
    about = "Check work-experience eligibility and permit status from the command line",
    version
)]
struct Cli {
    /// Output format, overriding APP_OUTPUT_FORMAT
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Credit reported work hours toward a skilled-worker program
    Experience(ExperienceArgs),
    /// Classify permit status and build an action plan
    Status(StatusArgs),
    /// Evaluate a JSON assessment request containing either or both checks
    Assess(AssessArgs),
}

#[derive(Args, Debug)]
struct ExperienceArgs {
    /// Average hours worked per week
    #[arg(long, value_parser = parse_non_negative)]
    hours_per_week: f64,
    /// Number of weeks worked
    #[arg(long, value_parser = parse_non_negative)]
    weeks_worked: f64,
    /// Program the experience is measured against
    #[arg(long, value_enum)]
    program: ProgramArg,
    /// Work was seasonal
    #[arg(long)]
    seasonal: bool,
    /// Work was performed while enrolled as a student
    #[arg(long)]
    student: bool,
    /// Work was self-employment
    #[arg(long)]
    self_employed: bool,
    /// Work was a co-op term
    #[arg(long)]
    coop: bool,
}

#[derive(Args, Debug)]
struct StatusArgs {
    /// Permit expiry date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    expiry_date: NaiveDate,
    /// An extension application was submitted before expiry
    #[arg(long)]
    extension_filed: bool,
    /// Current location of the permit holder
    #[arg(long, value_enum, default_value_t = LocationArg::InsideCanada)]
    location: LocationArg,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Path to a JSON assessment request
    #[arg(long)]
    input: PathBuf,
    /// Evaluation date used when the request does not carry one (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProgramArg {
    Cec,
    Fsw,
    Fst,
}

impl From<ProgramArg> for ProgramTarget {
    fn from(value: ProgramArg) -> Self {
        match value {
            ProgramArg::Cec => ProgramTarget::Cec,
            ProgramArg::Fsw => ProgramTarget::Fsw,
            ProgramArg::Fst => ProgramTarget::Fst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocationArg {
    InsideCanada,
    OutsideCanada,
}

impl From<LocationArg> for CurrentLocation {
    fn from(value: LocationArg) -> Self {
        match value {
            LocationArg::InsideCanada => CurrentLocation::InsideCanada,
            LocationArg::OutsideCanada => CurrentLocation::OutsideCanada,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, format = ?config.output.format, "portal tools ready");

    let rendered = execute(cli.command)?;
    print!("{}", render(&rendered, config.output.format)?);
    Ok(())
}

fn execute(command: Command) -> Result<Rendered, AppError> {
    match command {
        Command::Experience(args) => {
            let advisor = advisor_for(None);
            Ok(Rendered::Experience(
                advisor.work_experience(&work_pattern(&args)),
            ))
        }
        Command::Status(args) => {
            let advisor = advisor_for(args.today);
            let input = status_input(&args);
            Ok(Rendered::Status(StatusView {
                evaluated_on: advisor.today(),
                result: advisor.status(&input),
            }))
        }
        Command::Assess(args) => {
            let raw = fs::read_to_string(&args.input)?;
            assess_request(&raw, args.today)
        }
    }
}

fn assess_request(raw: &str, today: Option<NaiveDate>) -> Result<Rendered, AppError> {
    let request: AssessmentRequest = serde_json::from_str(raw)?;
    if let Some(pattern) = &request.work_experience {
        check_work_pattern(pattern)?;
    }
    let advisor = advisor_for(today);
    Ok(Rendered::Assessment(advisor.assess(&request)?))
}

/// Request files bypass the clap value parsers, so their hours are checked here.
fn check_work_pattern(pattern: &WorkPattern) -> Result<(), AppError> {
    for (field, value) in [
        ("hours_per_week", pattern.hours_per_week),
        ("weeks_worked", pattern.weeks_worked),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "work_experience.{field} must be a finite number of zero or more (found {value})"
            )));
        }
    }
    Ok(())
}

/// Uses the host clock unless a reference date was supplied on the command line.
fn advisor_for(today: Option<NaiveDate>) -> ImmigrationAdvisor<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    ImmigrationAdvisor::new(clock)
}

fn work_pattern(args: &ExperienceArgs) -> WorkPattern {
    WorkPattern {
        hours_per_week: args.hours_per_week,
        weeks_worked: args.weeks_worked,
        is_seasonal: args.seasonal,
        is_student: args.student,
        is_self_employed: args.self_employed,
        is_coop: args.coop,
        program_target: args.program.into(),
    }
}

fn status_input(args: &StatusArgs) -> StatusInput {
    StatusInput {
        expiry_date: args.expiry_date,
        has_submitted_extension: args.extension_filed,
        current_location: args.location.into(),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_non_negative(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{raw}' must be a finite number of zero or more"))
    }
}
