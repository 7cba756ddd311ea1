//! Top-level weight calculator: boosts → rebalance pipeline → validation.

use tracing::debug;

use arbiter_core::constants::{
    MAX_DIMENSION_WEIGHT, MIN_DIMENSION_WEIGHT, STANDARD_DIMENSIONS, WEIGHT_SUM_TOLERANCE,
};
use arbiter_core::errors::WeightError;
use arbiter_core::types::collections::DimensionMap;
use arbiter_core::types::{
    Budget, Expertise, ProjectRequirements, Scale, Timeline, WeightedCriteria,
};

use super::boosts::{self, BoostValues};
use super::conflicts;
use super::priorities;
use super::rebalance;

/// Number of boost-highlighted dimensions the guarantee pass protects.
const MAX_GUARANTEED_PRIORITIES: usize = 3;

/// Competing constraints needed before the scale-priority override arms.
const SCALE_OVERRIDE_COMPETING_MIN: usize = 2;

/// Derives normalized weighted criteria from project requirements.
///
/// The calculation is deterministic and pure: the same requirements always
/// produce the same criteria.
#[derive(Debug, Default)]
pub struct WeightCalculator;

impl WeightCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Derive criteria, failing with `ConflictingRequirements` when the
    /// requirement combination is incoherent.
    pub fn criteria(
        &self,
        requirements: &ProjectRequirements,
    ) -> Result<WeightedCriteria, WeightError> {
        let conflicts = conflicts::detect_conflicts(requirements);
        if !conflicts.is_empty() {
            return Err(WeightError::ConflictingRequirements { conflicts });
        }
        self.criteria_unchecked(requirements)
    }

    /// Derive criteria without conflict detection, for callers that chose
    /// to proceed past detected conflicts.
    pub fn criteria_unchecked(
        &self,
        requirements: &ProjectRequirements,
    ) -> Result<WeightedCriteria, WeightError> {
        let weights = self.dimension_weights(requirements)?;
        let priority_factors = priorities::priority_factors(requirements);

        Ok(WeightedCriteria {
            dimension_weights: weights,
            priority_factors,
        })
    }

    /// Run the weight pipeline and validate the result.
    fn dimension_weights(
        &self,
        requirements: &ProjectRequirements,
    ) -> Result<DimensionMap<f64>, WeightError> {
        let boost_values = boosts::compute_boosts(requirements);
        debug!(?boost_values, "computed dimension boosts");

        let seeded = rebalance::apply_boosts(&boost_values);
        let floored = rebalance::floor_weights(&seeded);
        let normalized = rebalance::normalize(&floored);

        let prioritized = top_prioritized(&boost_values);
        let guaranteed = rebalance::guarantee_priorities(&normalized, &prioritized);

        let weights = if scale_override_armed(requirements) {
            rebalance::enforce_scale_priority(&guaranteed)
        } else {
            guaranteed
        };

        validate_weights(&weights)?;
        Ok(weights)
    }
}

/// The up-to-three boost-highlighted dimensions the guarantee pass protects.
fn top_prioritized(boost_values: &BoostValues) -> Vec<&'static str> {
    boost_values
        .highlighted()
        .into_iter()
        .take(MAX_GUARANTEED_PRIORITIES)
        .map(|(dim, _)| dim)
        .collect()
}

/// Large scale under at least two competing constraints arms the override.
fn scale_override_armed(requirements: &ProjectRequirements) -> bool {
    if requirements.scalability_needs != Scale::Large {
        return false;
    }
    let competing = [
        requirements.budget == Budget::Low,
        requirements.timeline == Timeline::Tight,
        requirements.expertise_level == Expertise::Beginner,
    ]
    .iter()
    .filter(|held| **held)
    .count();
    competing >= SCALE_OVERRIDE_COMPETING_MIN
}

/// Output contract: five dimensions, each weight in [0, 1], sum 1.0 ± 0.05,
/// max <= 0.6, min >= 0.05. Violations are processing failures, never
/// silent clamps.
pub fn validate_weights(weights: &DimensionMap<f64>) -> Result<(), WeightError> {
    for dimension in STANDARD_DIMENSIONS {
        if !weights.contains_key(dimension) {
            return Err(WeightError::MissingDimension {
                dimension: dimension.to_string(),
            });
        }
    }

    for (dimension, weight) in weights {
        if !(0.0..=1.0).contains(weight) {
            return Err(WeightError::WeightOutOfRange {
                dimension: dimension.clone(),
                weight: *weight,
            });
        }
    }

    let sum: f64 = weights.values().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(WeightError::BadWeightSum { sum });
    }

    if let Some((dimension, weight)) = weights
        .iter()
        .find(|(_, weight)| **weight > MAX_DIMENSION_WEIGHT)
    {
        return Err(WeightError::DominantDimension {
            dimension: dimension.clone(),
            weight: weight * 100.0,
        });
    }

    if let Some((dimension, weight)) = weights
        .iter()
        .find(|(_, weight)| **weight < MIN_DIMENSION_WEIGHT)
    {
        return Err(WeightError::StarvedDimension {
            dimension: dimension.clone(),
            weight: weight * 100.0,
        });
    }

    Ok(())
}
