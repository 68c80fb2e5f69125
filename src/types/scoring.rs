use serde::Serialize;

pub type Score = f32;

/// One normalized component of the automation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub normalized: Score,
    pub percent: u8,
    pub explanation: String,
}

impl ComponentScore {
    pub fn new(normalized: Score, explanation: String) -> Self {
        let normalized = normalized.clamp(0.0, 1.0);
        Self {
            normalized,
            percent: (normalized * 100.0).round() as u8,
            explanation,
        }
    }
}

/// Final automation score plus its auditable breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub coverage: ComponentScore,
    pub integration: ComponentScore,
    pub sophistication: ComponentScore,
    pub documentation: ComponentScore,
}
