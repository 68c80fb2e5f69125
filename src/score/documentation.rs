use crate::score::weights::{
    SOPS_PER_CATEGORY_TARGET, SOP_COVERAGE_BLEND, SOP_QUALITY_BLEND, SOP_STEPS_TARGET,
};
use crate::types::metrics::RawMetrics;

/// Process documentation maturity: SOP coverage against a target of
/// three per category (70%), blended with SOP depth against a target of
/// five steps (30%).
pub fn documentation_score(metrics: &RawMetrics) -> f32 {
    if metrics.total_categories == 0 {
        return 0.0;
    }
    let target = metrics.total_categories as f32 * SOPS_PER_CATEGORY_TARGET;
    let coverage = (metrics.sop_count as f32 / target).min(1.0);
    let quality = (metrics.avg_sop_steps / SOP_STEPS_TARGET).min(1.0).max(0.0);
    (SOP_COVERAGE_BLEND * coverage + SOP_QUALITY_BLEND * quality).clamp(0.0, 1.0)
}

/// SOP count relative to the per-category target, used by the
/// recommendation rules as well as the score above.
pub fn sop_coverage_ratio(metrics: &RawMetrics) -> f32 {
    if metrics.total_categories == 0 {
        return 0.0;
    }
    let target = metrics.total_categories as f32 * SOPS_PER_CATEGORY_TARGET;
    (metrics.sop_count as f32 / target).min(1.0)
}
