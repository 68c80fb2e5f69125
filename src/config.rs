use crate::error::{Result, ScoreError};
use crate::score::weights::ScoringWeights;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "autoscore.toml";

/// Optional tuning file. Anything absent falls back to the built-in
/// weight table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub weights: Option<BTreeMap<String, f32>>,
    pub tiers: Option<BTreeMap<String, f32>>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 4] =
    ["coverage", "integration", "sophistication", "documentation"];

impl ScoreConfig {
    /// Resolves the effective weight set, applying any overrides on top
    /// of the defaults.
    pub fn scoring_weights(&self) -> ScoringWeights {
        let mut weights = ScoringWeights::default();
        if let Some(overrides) = &self.weights {
            weights.coverage = *overrides.get("coverage").unwrap_or(&weights.coverage);
            weights.integration = *overrides.get("integration").unwrap_or(&weights.integration);
            weights.sophistication = *overrides
                .get("sophistication")
                .unwrap_or(&weights.sophistication);
            weights.documentation = *overrides
                .get("documentation")
                .unwrap_or(&weights.documentation);
        }
        if let Some(tiers) = &self.tiers {
            for (label, weight) in tiers {
                weights.tiers.insert(label.clone(), *weight);
            }
        }
        weights
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(overrides) = &self.weights {
            let unknown = overrides
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(ScoreError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.scoring_weights();
        let components = [
            weights.coverage,
            weights.integration,
            weights.sophistication,
            weights.documentation,
        ];
        if components.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ScoreError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f32 = components.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::ConfigParse(format!(
                "weights must sum to 1.0 (found {weight_sum:.3})"
            )));
        }

        if let Some(tiers) = &self.tiers {
            for (label, weight) in tiers {
                if !(0.0..=1.0).contains(weight) {
                    return Err(ScoreError::ConfigParse(format!(
                        "tiers.{label} must be between 0.0 and 1.0"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Loads and validates a config file if one exists at `path`. A missing
/// file means built-in defaults, not an error.
pub fn load_config(path: &Path) -> Result<Option<ScoreConfig>> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let config: ScoreConfig = toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(Some(config))
}
