mod cli;

use autoscore::config;
use autoscore::error::ScoreError;
use autoscore::recommend::generate_recommendations;
use autoscore::report;
use autoscore::score::compute_score_with;
use autoscore::score::weights::ScoringWeights;
use autoscore::snapshot;
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_weights(
    snapshot_path: &Path,
    config_path: Option<&PathBuf>,
) -> Result<ScoringWeights, ScoreError> {
    let path = match config_path {
        Some(path) => path.clone(),
        None => snapshot_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(config::DEFAULT_CONFIG_FILE),
    };
    let loaded = config::load_config(&path)?;
    Ok(loaded
        .map(|cfg| cfg.scoring_weights())
        .unwrap_or_default())
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let snapshot = snapshot::load_snapshot(&cmd.snapshot)?;
            let weights = resolve_weights(&cmd.snapshot, cmd.config.as_ref())?;

            let metrics = snapshot.metrics();
            let names = snapshot.category_names();
            let result = compute_score_with(&metrics, &weights);
            let recommendations = generate_recommendations(&metrics, Some(&names));

            let score = result.score;
            let score_report = report::build_report(result, recommendations);
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");

            match cmd.fail_under {
                Some(threshold) if score < threshold => {
                    eprintln!("score {score} is below threshold {threshold}");
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Recommend(cmd) => {
            let snapshot = snapshot::load_snapshot(&cmd.snapshot)?;
            let metrics = snapshot.metrics();
            let names = snapshot.category_names();
            let recommendations = generate_recommendations(&metrics, Some(&names));

            if recommendations.is_empty() {
                println!("recommend: no recommendations");
                return Ok(exit_code::SUCCESS);
            }

            println!("recommendations:");
            for recommendation in &recommendations {
                println!(
                    "- {} [{} priority, {} impact, {} effort]",
                    recommendation.title,
                    recommendation.priority,
                    recommendation.impact,
                    recommendation.effort
                );
                println!("  {}", recommendation.description);
            }

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
