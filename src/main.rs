use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use survey_workflow::responses::{map_response, response_table, summarize_open_text};
use survey_workflow::settings::{load_settings, SurveySettings};
use survey_workflow::styling::{apply_styling_migration, normalize_styling_with};
use survey_workflow::survey::{parse_responses_json, parse_survey_json, validate_survey};
use survey_workflow::util::files::{read_string, write_string};
use survey_workflow::{LegacyProduct, SurveyError, SurveyResult};

#[derive(Parser)]
#[command(name = "survey-workflow")]
#[command(about = "Survey question, response and styling tools")]
struct Cli {
    /// Settings file (created with defaults when missing)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON output to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair each response's answers with the survey questions
    MapResponses {
        survey: PathBuf,
        responses: PathBuf,
        /// Emit one table with a row per response
        #[arg(long)]
        table: bool,
    },
    /// Summarize the answers to one open text question
    Summarize {
        survey: PathBuf,
        responses: PathBuf,
        question_id: String,
        /// Maximum number of samples (defaults to the settings value)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check a survey document for invalid questions and styling
    Validate { survey: PathBuf },
    /// Resolve legacy product colours into per-mode styling
    MigrateStyling { products: PathBuf },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MappedResponse {
    response_id: String,
    answers: Vec<survey_workflow::QuestionAnswer>,
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> SurveyResult<()> {
    let payload = serde_json::to_string_pretty(value).map_err(|source| SurveyError::Json {
        what: "output",
        source,
    })?;
    match out {
        Some(path) => write_string(path, &payload),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn run(cli: Cli) -> SurveyResult<()> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SurveySettings::default(),
    };
    let out = cli.out.as_deref();

    match cli.command {
        Commands::MapResponses {
            survey,
            responses,
            table,
        } => {
            let survey = parse_survey_json(&read_string(&survey)?)?;
            let responses = parse_responses_json(&read_string(&responses)?)?;
            tracing::info!(
                survey_id = %survey.id,
                responses = responses.len(),
                "mapping responses"
            );
            if table {
                emit(&response_table(&survey, &responses), out)
            } else {
                let mapped = responses
                    .iter()
                    .map(|r| MappedResponse {
                        response_id: r.id.clone(),
                        answers: map_response(&survey, r),
                    })
                    .collect::<Vec<MappedResponse>>();
                emit(&mapped, out)
            }
        }
        Commands::Summarize {
            survey,
            responses,
            question_id,
            limit,
        } => {
            let survey = parse_survey_json(&read_string(&survey)?)?;
            let responses = parse_responses_json(&read_string(&responses)?)?;
            let limit = limit.unwrap_or(settings.summary_sample_limit);
            let summary = summarize_open_text(&survey, &question_id, &responses, limit);
            if summary.is_none() {
                tracing::warn!(survey_id = %survey.id, %question_id, "question not found");
            }
            emit(&summary, out)
        }
        Commands::Validate { survey } => {
            let survey = parse_survey_json(&read_string(&survey)?)?;
            let issues = validate_survey(&survey);
            tracing::info!(survey_id = %survey.id, issues = issues.len(), "survey validated");
            emit(&issues, out)
        }
        Commands::MigrateStyling { products } => {
            let raw = read_string(&products)?;
            let products: Vec<LegacyProduct> =
                serde_json::from_str(&raw).map_err(|source| SurveyError::Json {
                    what: "products",
                    source,
                })?;
            let migrated = products
                .iter()
                .map(|p| apply_styling_migration(p, &normalize_styling_with(p, &settings.styling)))
                .collect::<Vec<LegacyProduct>>();
            let changed = products
                .iter()
                .zip(&migrated)
                .filter(|(before, after)| before != after)
                .count();
            tracing::info!(products = products.len(), changed, "styling migration resolved");
            emit(&migrated, out)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())?;
    Ok(())
}
