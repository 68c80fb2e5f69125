pub mod coverage;
pub mod describe;
pub mod documentation;
pub mod integration;
pub mod sophistication;
pub mod weights;

use crate::types::metrics::RawMetrics;
use crate::types::scoring::{ComponentScore, ScoreResult};
use weights::ScoringWeights;

pub use describe::describe_score;

/// Computes the automation score with the built-in weight set.
pub fn compute_score(metrics: &RawMetrics) -> ScoreResult {
    compute_score_with(metrics, &ScoringWeights::default())
}

/// Computes the automation score with an explicit weight set. Pure and
/// deterministic: no I/O, no shared state, identical inputs always
/// produce identical output.
pub fn compute_score_with(metrics: &RawMetrics, weights: &ScoringWeights) -> ScoreResult {
    let coverage = coverage::coverage_score(metrics);
    let integration = integration::integration_score(metrics);
    let sophistication = sophistication::sophistication_score(metrics, weights);
    let documentation = documentation::documentation_score(metrics);

    let weighted = weights.coverage * coverage
        + weights.integration * integration
        + weights.sophistication * sophistication
        + weights.documentation * documentation;

    ScoreResult {
        score: (weighted * 100.0).round().clamp(0.0, 100.0) as u8,
        coverage: ComponentScore::new(coverage, describe::coverage_explanation(coverage)),
        integration: ComponentScore::new(integration, describe::integration_explanation(integration)),
        sophistication: ComponentScore::new(
            sophistication,
            describe::sophistication_explanation(sophistication),
        ),
        documentation: ComponentScore::new(
            documentation,
            describe::documentation_explanation(documentation),
        ),
    }
}
