//! Qualitative banding for normalized component scores and the final
//! percentage. Thresholds are named here so display wording can be
//! tuned without touching the arithmetic.

/// Five-band classifier over a normalized [0,1] component score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityBand {
    Excellent,
    Good,
    Moderate,
    Limited,
    VeryLimited,
}

pub const BAND_EXCELLENT: f32 = 0.8;
pub const BAND_GOOD: f32 = 0.6;
pub const BAND_MODERATE: f32 = 0.4;
pub const BAND_LIMITED: f32 = 0.2;

pub fn quality_band(normalized: f32) -> QualityBand {
    if normalized > BAND_EXCELLENT {
        QualityBand::Excellent
    } else if normalized > BAND_GOOD {
        QualityBand::Good
    } else if normalized > BAND_MODERATE {
        QualityBand::Moderate
    } else if normalized > BAND_LIMITED {
        QualityBand::Limited
    } else {
        QualityBand::VeryLimited
    }
}

pub fn coverage_explanation(normalized: f32) -> String {
    match quality_band(normalized) {
        QualityBand::Excellent => "Excellent coverage: automation reaches nearly every business area.",
        QualityBand::Good => "Good coverage: most business areas have automation in place.",
        QualityBand::Moderate => "Moderate coverage: several business areas still run manually.",
        QualityBand::Limited => "Limited coverage: automation touches only a few business areas.",
        QualityBand::VeryLimited => "Very limited coverage: most business areas have no automation.",
    }
    .to_string()
}

pub fn integration_explanation(normalized: f32) -> String {
    match quality_band(normalized) {
        QualityBand::Excellent => "Excellent integration: tools are highly connected and share data freely.",
        QualityBand::Good => "Good integration: most tools exchange data with at least one other.",
        QualityBand::Moderate => "Moderate integration: some tools are connected but many work in isolation.",
        QualityBand::Limited => "Limited integration: only a handful of tool pairs exchange data.",
        QualityBand::VeryLimited => "Very limited integration: tools operate as disconnected silos.",
    }
    .to_string()
}

pub fn sophistication_explanation(normalized: f32) -> String {
    match quality_band(normalized) {
        QualityBand::Excellent => "Excellent sophistication: the stack leans on capable, higher-tier tooling.",
        QualityBand::Good => "Good sophistication: a healthy mix of paid and capable tools.",
        QualityBand::Moderate => "Moderate sophistication: the stack mixes basic and capable tools.",
        QualityBand::Limited => "Limited sophistication: the stack relies mostly on entry-level tools.",
        QualityBand::VeryLimited => "Very limited sophistication: the stack is almost entirely basic tooling.",
    }
    .to_string()
}

pub fn documentation_explanation(normalized: f32) -> String {
    match quality_band(normalized) {
        QualityBand::Excellent => "Excellent documentation: processes are thoroughly captured as detailed SOPs.",
        QualityBand::Good => "Good documentation: most core processes have usable SOPs.",
        QualityBand::Moderate => "Moderate documentation: some processes are documented but gaps remain.",
        QualityBand::Limited => "Limited documentation: few processes are captured as SOPs.",
        QualityBand::VeryLimited => "Very limited documentation: processes live in people's heads.",
    }
    .to_string()
}

pub const VERDICT_EXCELLENT: u8 = 90;
pub const VERDICT_ADVANCED: u8 = 75;
pub const VERDICT_GOOD: u8 = 60;
pub const VERDICT_MODERATE: u8 = 40;
pub const VERDICT_DEVELOPING: u8 = 20;

/// Maps a final percentage into one of six display bands.
pub fn describe_score(score: u8) -> &'static str {
    if score >= VERDICT_EXCELLENT {
        "Excellent automation maturity"
    } else if score >= VERDICT_ADVANCED {
        "Advanced automation maturity"
    } else if score >= VERDICT_GOOD {
        "Good automation maturity"
    } else if score >= VERDICT_MODERATE {
        "Moderate automation maturity"
    } else if score >= VERDICT_DEVELOPING {
        "Developing automation maturity"
    } else {
        "Limited automation maturity"
    }
}
