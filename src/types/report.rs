use crate::types::scoring::ScoreResult;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Quick,
    Medium,
    Extended,
}

// Display mirrors the serde names so text output and serialized
// reports use the same spelling.
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        })
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Effort::Quick => "quick",
            Effort::Medium => "medium",
            Effort::Extended => "extended",
        })
    }
}

/// Which aspect of the automation posture a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecCategory {
    Coverage,
    Integration,
    Documentation,
    Sophistication,
    Optimization,
    Data,
}

/// One actionable improvement suggestion, produced fresh on each call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: RecCategory,
    pub priority: Priority,
    pub impact: Impact,
    pub effort: Effort,
    pub action_items: Vec<String>,
}

impl Recommendation {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: RecCategory,
        priority: Priority,
        impact: Impact,
        effort: Effort,
        action_items: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority,
            impact,
            effort,
            action_items,
        }
    }
}

/// Rendered report payload assembled by the CLI layer. The timestamp
/// lives here rather than in `ScoreResult` so the engine stays pure.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: String,
    pub verdict: String,
    pub result: ScoreResult,
    pub recommendations: Vec<Recommendation>,
}
