//! Weighted criteria derived from project requirements, and per-technology
//! compatibility scores.

use serde::{Deserialize, Serialize};

use crate::constants::STANDARD_DIMENSIONS;

use super::collections::DimensionMap;

/// Weighted criteria derived entirely from `ProjectRequirements`.
///
/// Invariants (enforced by the weight calculator, not here): weights sum to
/// 1.0 within ±0.05, every weight in [0.05, 0.6]. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedCriteria {
    /// Dimension name → weight in [0, 1].
    pub dimension_weights: DimensionMap<f64>,
    /// Human-readable priority descriptions, most important first.
    pub priority_factors: Vec<String>,
}

impl WeightedCriteria {
    /// Dimensions sorted by weight, heaviest first. Ties resolve in
    /// canonical dimension order (customs after, alphabetically) so output
    /// is reproducible.
    pub fn dimensions_by_weight(&self) -> Vec<(&str, f64)> {
        let rank = |name: &str| {
            STANDARD_DIMENSIONS
                .iter()
                .position(|d| *d == name)
                .unwrap_or(STANDARD_DIMENSIONS.len())
        };
        let mut entries: Vec<(&str, f64)> = self
            .dimension_weights
            .iter()
            .map(|(name, w)| (name.as_str(), *w))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| rank(a.0).cmp(&rank(b.0)))
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    /// The top priority factor, if any were derived.
    pub fn top_priority(&self) -> Option<&str> {
        self.priority_factors.first().map(String::as_str)
    }
}

/// Compatibility between one technology and one weighted requirement
/// profile. Ephemeral: one per technology per comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub technology: String,
    /// Normalized fit in [0, 1].
    pub score: f64,
    pub reasoning: String,
}
