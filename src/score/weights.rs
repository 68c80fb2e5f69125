//! Central tuning table for the score engine. Every magic number the
//! arithmetic depends on lives here so it can be tested and overridden
//! independently of the formulas.

use std::collections::BTreeMap;

pub const COVERAGE_WEIGHT: f32 = 0.40;
pub const INTEGRATION_WEIGHT: f32 = 0.25;
pub const SOPHISTICATION_WEIGHT: f32 = 0.20;
pub const DOCUMENTATION_WEIGHT: f32 = 0.15;

/// Tool density per category stops earning credit past this count.
pub const DENSITY_PLATEAU: f32 = 5.0;

/// Documentation targets: three SOPs per category, five steps per SOP.
pub const SOPS_PER_CATEGORY_TARGET: f32 = 3.0;
pub const SOP_STEPS_TARGET: f32 = 5.0;
pub const SOP_COVERAGE_BLEND: f32 = 0.7;
pub const SOP_QUALITY_BLEND: f32 = 0.3;

pub const TIER_WEIGHT_FREE: f32 = 0.3;
pub const TIER_WEIGHT_LOW_COST: f32 = 0.7;
pub const TIER_WEIGHT_ENTERPRISE: f32 = 1.0;
/// Applied to any tier label the table does not recognize.
pub const TIER_WEIGHT_DEFAULT: f32 = 0.5;

/// Effective weight set for one scoring run. Defaults reproduce the
/// constants above; `config::load_config` may override them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub coverage: f32,
    pub integration: f32,
    pub sophistication: f32,
    pub documentation: f32,
    pub tiers: BTreeMap<String, f32>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        let mut tiers = BTreeMap::new();
        tiers.insert("free".to_string(), TIER_WEIGHT_FREE);
        tiers.insert("low-cost".to_string(), TIER_WEIGHT_LOW_COST);
        tiers.insert("enterprise".to_string(), TIER_WEIGHT_ENTERPRISE);
        Self {
            coverage: COVERAGE_WEIGHT,
            integration: INTEGRATION_WEIGHT,
            sophistication: SOPHISTICATION_WEIGHT,
            documentation: DOCUMENTATION_WEIGHT,
            tiers,
        }
    }
}

impl ScoringWeights {
    pub fn tier_weight(&self, label: &str) -> f32 {
        self.tiers.get(label).copied().unwrap_or(TIER_WEIGHT_DEFAULT)
    }

    pub fn component_sum(&self) -> f32 {
        self.coverage + self.integration + self.sophistication + self.documentation
    }
}
