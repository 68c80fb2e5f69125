pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::score::describe_score;
use crate::types::report::{Recommendation, ScoreReport};
use crate::types::scoring::ScoreResult;
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Wraps the engine outputs with the display verdict and a timestamp.
pub fn build_report(result: ScoreResult, recommendations: Vec<Recommendation>) -> ScoreReport {
    ScoreReport {
        generated_at: Utc::now().to_rfc3339(),
        verdict: describe_score(result.score).to_string(),
        result,
        recommendations,
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
