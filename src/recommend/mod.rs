pub mod rules;

use crate::types::metrics::{CategoryNames, RawMetrics};
use crate::types::report::Recommendation;

type RuleFn = fn(&RawMetrics, Option<&CategoryNames>) -> Option<Recommendation>;

/// Evaluation order is fixed and the output is returned in this order,
/// not re-sorted by priority; callers re-sort for display if they want.
const RULES: [RuleFn; 6] = [
    rules::expand_coverage,
    rules::improve_integration,
    rules::document_processes,
    rules::upgrade_free_tier,
    rules::review_enterprise_spend,
    rules::break_down_silos,
];

/// Builds the improvement backlog from the raw counts. All rules are
/// evaluated independently; any subset may fire. The optional name map
/// is only used to prettify recommendation text.
pub fn generate_recommendations(
    metrics: &RawMetrics,
    names: Option<&CategoryNames>,
) -> Vec<Recommendation> {
    RULES.iter().filter_map(|rule| rule(metrics, names)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::RecCategory;

    fn healthy_metrics() -> RawMetrics {
        let mut metrics = RawMetrics {
            integrated_pairs: 4, // 4/6 possible
            sop_count: 5,        // target 6, ratio > 0.5
            avg_sop_steps: 6.0,
            total_categories: 2,
            total_tools: 4,
            ..RawMetrics::default()
        };
        metrics.category_tools.insert("ops".to_string(), 2);
        metrics.category_tools.insert("sales".to_string(), 2);
        metrics.tiers.insert("low-cost".to_string(), 4);
        metrics
    }

    #[test]
    fn healthy_metrics_produce_no_recommendations() {
        assert!(generate_recommendations(&healthy_metrics(), None).is_empty());
    }

    #[test]
    fn zero_tools_fires_at_most_the_coverage_rule() {
        let metrics = RawMetrics {
            total_categories: 3,
            total_tools: 0,
            sop_count: 5,
            avg_sop_steps: 5.0,
            ..RawMetrics::default()
        };
        let recommendations = generate_recommendations(&metrics, None);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].category, RecCategory::Coverage);
    }

    #[test]
    fn degraded_metrics_fire_multiple_rules_in_rule_order() {
        let mut metrics = RawMetrics {
            integrated_pairs: 0,
            sop_count: 0,
            avg_sop_steps: 0.0,
            total_categories: 6,
            total_tools: 8,
            ..RawMetrics::default()
        };
        metrics.category_tools.insert("ops".to_string(), 8);
        metrics.tiers.insert("free".to_string(), 8);

        let recommendations = generate_recommendations(&metrics, None);
        let categories: Vec<RecCategory> =
            recommendations.iter().map(|rec| rec.category).collect();
        assert_eq!(
            categories,
            vec![
                RecCategory::Coverage,
                RecCategory::Integration,
                RecCategory::Documentation,
                RecCategory::Sophistication,
                RecCategory::Data,
            ]
        );
    }

    #[test]
    fn every_recommendation_carries_action_items() {
        let mut metrics = healthy_metrics();
        metrics.integrated_pairs = 0;
        metrics.sop_count = 0;
        metrics.total_tools = 10;
        metrics.tiers.clear();
        metrics.tiers.insert("enterprise".to_string(), 10);

        for recommendation in generate_recommendations(&metrics, None) {
            assert!(
                (3..=5).contains(&recommendation.action_items.len()),
                "{} has {} action items",
                recommendation.title,
                recommendation.action_items.len()
            );
        }
    }

    #[test]
    fn generator_is_deterministic() {
        let metrics = healthy_metrics();
        assert_eq!(
            generate_recommendations(&metrics, None),
            generate_recommendations(&metrics, None)
        );
    }
}
