use crate::score::weights::ScoringWeights;
use crate::types::metrics::RawMetrics;

/// Average tier weight across the tool inventory, using pricing tier as
/// a proxy for capability. Tools missing from the tier distribution
/// contribute nothing, which pulls the average down.
pub fn sophistication_score(metrics: &RawMetrics, weights: &ScoringWeights) -> f32 {
    if metrics.total_tools == 0 {
        return 0.0;
    }
    let weighted: f32 = metrics
        .tiers
        .iter()
        .map(|(label, count)| weights.tier_weight(label) * *count as f32)
        .sum();
    (weighted / metrics.total_tools as f32).clamp(0.0, 1.0)
}
