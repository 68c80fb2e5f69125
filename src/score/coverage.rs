use crate::score::weights::DENSITY_PLATEAU;
use crate::types::metrics::RawMetrics;

/// Breadth of automation across business areas: the share of categories
/// with at least one tool, blended 50/50 with a per-category density
/// term that plateaus at five tools.
pub fn coverage_score(metrics: &RawMetrics) -> f32 {
    if metrics.total_categories == 0 {
        return 0.0;
    }
    let total = metrics.total_categories as f32;
    let breadth = metrics.categories_with_tools() as f32 / total;

    let density = if metrics.category_tools.is_empty() {
        0.0
    } else {
        let summed: f32 = metrics
            .category_tools
            .values()
            .map(|count| (*count as f32).min(DENSITY_PLATEAU) / DENSITY_PLATEAU)
            .sum();
        summed / metrics.category_tools.len() as f32 / total
    };

    (0.5 * breadth + 0.5 * density).clamp(0.0, 1.0)
}
