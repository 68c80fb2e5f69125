use std::collections::BTreeMap;

/// Tool counts keyed by business-category identifier.
pub type CategoryToolCounts = BTreeMap<String, u32>;

/// Optional display names keyed by business-category identifier.
pub type CategoryNames = BTreeMap<String, String>;

/// Tool counts keyed by pricing/sophistication tier label.
pub type TierDistribution = BTreeMap<String, u32>;

/// Aggregated operational counts for one business snapshot.
///
/// The caller is responsible for aggregation; this crate never fetches
/// anything. `total_categories` may exceed the number of map entries
/// because categories without tools are usually absent from the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetrics {
    pub category_tools: CategoryToolCounts,
    pub integrated_pairs: u32,
    pub tiers: TierDistribution,
    pub sop_count: u32,
    pub avg_sop_steps: f32,
    pub total_categories: u32,
    pub total_tools: u32,
}

impl RawMetrics {
    /// Number of categories that have at least one tool assigned.
    pub fn categories_with_tools(&self) -> u32 {
        self.category_tools.values().filter(|count| **count > 0).count() as u32
    }

    /// Unordered tool pairings possible among `total_tools` tools.
    /// Widened to u64: the square of a large u32 inventory would
    /// otherwise overflow the multiplication.
    pub fn max_possible_pairs(&self) -> u64 {
        if self.total_tools < 2 {
            return 0;
        }
        let tools = self.total_tools as u64;
        tools * (tools - 1) / 2
    }

    /// Share of possible pairings that are integrated, clamped to 1.0.
    /// Zero when fewer than two tools exist.
    pub fn integration_ratio(&self) -> f32 {
        let max_pairs = self.max_possible_pairs();
        if max_pairs == 0 {
            return 0.0;
        }
        (self.integrated_pairs as f32 / max_pairs as f32).clamp(0.0, 1.0)
    }

    /// Share of tools in the given tier. Zero when no tools exist.
    pub fn tier_share(&self, label: &str) -> f32 {
        if self.total_tools == 0 {
            return 0.0;
        }
        let count = self.tiers.get(label).copied().unwrap_or(0);
        count as f32 / self.total_tools as f32
    }
}
