use crate::types::metrics::RawMetrics;

/// Share of possible tool-to-tool pairings that actually exchange data.
/// With one tool or none there is nothing to integrate, so the score
/// is zero rather than undefined.
pub fn integration_score(metrics: &RawMetrics) -> f32 {
    if metrics.total_tools <= 1 {
        return 0.0;
    }
    metrics.integration_ratio()
}
