//! Engine configuration: scoring and recommendation thresholds.
//!
//! All fields are optional with hand-tuned defaults, so an empty TOML table
//! is a valid configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the compatibility scorer and comparison engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// A dimension counts as a strength at or above this raw score.
    /// Default: 4.0.
    pub strength_threshold: Option<f64>,
    /// A dimension counts as a concern at or below this raw score.
    /// Default: 2.0.
    pub concern_threshold: Option<f64>,
    /// Minimum weight for a dimension to drive reasoning text.
    /// Default: 0.2.
    pub significant_weight: Option<f64>,
    /// Minimum lead over the runner-up for a matrix highlight.
    /// Default: 0.5.
    pub highlight_lead: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_strength_threshold(&self) -> f64 {
        self.strength_threshold.unwrap_or(4.0)
    }

    pub fn effective_concern_threshold(&self) -> f64 {
        self.concern_threshold.unwrap_or(2.0)
    }

    pub fn effective_significant_weight(&self) -> f64 {
        self.significant_weight.unwrap_or(0.2)
    }

    pub fn effective_highlight_lead(&self) -> f64 {
        self.highlight_lead.unwrap_or(0.5)
    }
}

/// Configuration for the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendConfig {
    /// Score gap below which the top two choices are flagged as very close.
    /// Default: 0.05.
    pub very_close_gap: Option<f64>,
    /// Score gap below which competition is noted as a decision factor.
    /// Default: 0.1.
    pub close_competition_gap: Option<f64>,
    /// Best score below which a moderate-compatibility caveat is added.
    /// Default: 0.6.
    pub moderate_compatibility_floor: Option<f64>,
}

impl RecommendConfig {
    pub fn effective_very_close_gap(&self) -> f64 {
        self.very_close_gap.unwrap_or(0.05)
    }

    pub fn effective_close_competition_gap(&self) -> f64 {
        self.close_competition_gap.unwrap_or(0.1)
    }

    pub fn effective_moderate_compatibility_floor(&self) -> f64 {
        self.moderate_compatibility_floor.unwrap_or(0.6)
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub recommend: RecommendConfig,
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
