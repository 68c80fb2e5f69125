use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autoscore",
    version,
    about = "Business automation scoring and recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the automation score and render the full report
    Score(ScoreCommand),
    /// Print the improvement recommendations only
    Recommend(RecommendCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Path to the metrics snapshot JSON file
    pub snapshot: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Weight-tuning config file (defaults to autoscore.toml next to the snapshot)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the final score is below this percentage
    #[arg(long)]
    pub fail_under: Option<u8>,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Path to the metrics snapshot JSON file
    pub snapshot: PathBuf,
}
