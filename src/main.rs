use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use growth_cert::certification::report::{self, SummaryRow};
use growth_cert::certification::{
    CertificationResult, CertificationService, EmployeeProfile, RequirementCatalog,
};
use growth_cert::config::AppConfig;
use growth_cert::error::AppError;
use growth_cert::telemetry;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "growth-cert",
    about = "Check growth-level certification eligibility from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one or more employee profiles against their target level
    Evaluate(EvaluateArgs),
    /// List the levels and job overrides in the requirement catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON file holding a request object or an array of requests
    #[arg(long)]
    request: PathBuf,
    /// Evaluation date used for estimates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Requirement catalog JSON, overriding APP_CATALOG_PATH
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Requirement catalog JSON, overriding APP_CATALOG_PATH
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
struct EvaluationRequest {
    #[serde(default)]
    employee_id: Option<String>,
    profile: EmployeeProfile,
    /// Defaults to the level after `profile.level`.
    #[serde(default)]
    target_level: Option<String>,
    #[serde(default)]
    job: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Batch(Vec<EvaluationRequest>),
    Single(EvaluationRequest),
}

impl RequestFile {
    fn into_requests(self) -> Vec<EvaluationRequest> {
        match self {
            RequestFile::Batch(requests) => requests,
            RequestFile::Single(request) => vec![request],
        }
    }
}

#[derive(Debug, Serialize)]
struct EvaluationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_id: Option<String>,
    evaluated_on: NaiveDate,
    #[serde(flatten)]
    result: CertificationResult,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "growth certification tooling ready");

    match cli.command {
        Command::Evaluate(args) => {
            let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.path.as_deref()))?;
            run_evaluate(args, catalog)
        }
        Command::Catalog(args) => {
            let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.path.as_deref()))?;
            render_catalog(&catalog);
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_catalog(path: Option<&Path>) -> Result<RequirementCatalog, AppError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading requirement catalog");
            Ok(RequirementCatalog::from_path(path)?)
        }
        None => Ok(RequirementCatalog::standard()),
    }
}

fn run_evaluate(args: EvaluateArgs, catalog: RequirementCatalog) -> Result<(), AppError> {
    let EvaluateArgs {
        request,
        today,
        format,
        ..
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let file = File::open(&request)?;
    let requests = serde_json::from_reader::<_, RequestFile>(BufReader::new(file))?.into_requests();
    info!(count = requests.len(), %today, "evaluating certification requests");

    let service = CertificationService::new(catalog);
    let mut responses = Vec::with_capacity(requests.len());
    for request in requests {
        let job = request.job.as_deref();
        let result = match request.target_level.as_deref() {
            Some(target) => service.assess(&request.profile, target, job, today)?,
            None => service.assess_next_level(&request.profile, job, today)?,
        };
        responses.push(EvaluationResponse {
            employee_id: request.employee_id,
            evaluated_on: today,
            result,
        });
    }

    let stdout = io::stdout();
    match format {
        OutputFormat::Json => {
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &responses)?;
            writeln!(handle)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<SummaryRow> = responses
                .iter()
                .map(|response| {
                    SummaryRow::new(
                        response.employee_id.clone().unwrap_or_default(),
                        &response.result,
                    )
                })
                .collect();
            report::write_csv(stdout.lock(), &rows)?;
        }
        OutputFormat::Text => {
            println!("Growth certification report (evaluated {today})");
            for response in &responses {
                println!();
                print!(
                    "{}",
                    report::render_text(response.employee_id.as_deref(), &response.result)
                );
            }
        }
    }

    Ok(())
}

fn render_catalog(catalog: &RequirementCatalog) {
    println!("Grade scale: {}", catalog.grades().ranked().join(" > "));
    for requirement in catalog.levels() {
        println!();
        println!("{} {}", requirement.level, requirement.level_name);
        println!(
            "  evaluation: {} or higher, {} consecutive",
            requirement.min_evaluation_grade, requirement.consecutive_evaluations
        );
        println!(
            "  training:   {} course(s), {} hours",
            requirement.required_courses.len(),
            requirement.min_training_hours
        );
        for (category, count) in &requirement.required_course_categories {
            println!("              {count} x {category}");
        }
        println!(
            "  skills:     {} ({})",
            join_or_dash(requirement.required_skills.iter().map(String::as_str)),
            requirement.skill_proficiency_level.label()
        );
        println!(
            "  experience: {} year(s) in level, {} year(s) total",
            requirement.min_years_in_level, requirement.min_total_years
        );

        let jobs = catalog.jobs_for(&requirement.level);
        if !jobs.is_empty() {
            println!("  job overrides: {}", jobs.join(", "));
        }
    }
}

fn join_or_dash<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
