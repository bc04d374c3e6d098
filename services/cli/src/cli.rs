use crate::commands::{run_catalog, run_score, run_search, run_suggest, ScoreArgs, SearchArgs};
use crate::infra::load_directory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutor_match::config::AppConfig;
use tutor_match::error::AppError;
use tutor_match::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "tutor-match",
    about = "Rank, filter, and explain tutor matches from a campus profile directory",
    version
)]
pub(crate) struct Cli {
    /// Profile dataset (.json directory or .csv tutor roster); overrides APP_DATASET
    #[arg(long, global = true)]
    pub(crate) dataset: Option<PathBuf>,
    /// Emit JSON instead of the text report
    #[arg(long, global = true)]
    pub(crate) json: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Show the Recommended, Top Rated and Recently Active views for a student
    Suggest {
        /// E-mail address or profile id of the requesting student
        #[arg(long)]
        student: String,
    },
    /// Filter and sort the tutor pool
    Search(SearchArgs),
    /// Explain the compatibility score of one tutor for one student
    Score(ScoreArgs),
    /// List the subjects, faculties and languages criteria can select from
    Catalog,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let (directory, source) = load_directory(cli.dataset.or(config.dataset.path.clone()))?;
    tracing::debug!(
        environment = ?config.environment,
        source = %source.describe(),
        "directory ready"
    );

    match cli.command {
        Command::Suggest { student } => run_suggest(&directory, &student, cli.json),
        Command::Search(args) => run_search(&directory, args, &config.search, cli.json),
        Command::Score(args) => run_score(&directory, args, cli.json),
        Command::Catalog => run_catalog(&directory, cli.json),
    }
}
