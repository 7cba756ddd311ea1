//! Weight rebalancing stages.
//!
//! Every stage is a pure function over an immutable weight snapshot and
//! returns a new map, so each stage is unit-testable in isolation and the
//! calculator composes them as a fixed sequence: floor → normalize →
//! priority guarantee → scale-priority override.

use arbiter_core::constants::{
    BASE_DIMENSION_WEIGHT, MIN_DIMENSION_WEIGHT, STANDARD_DIMENSIONS,
};
use arbiter_core::types::collections::DimensionMap;

use super::boosts::BoostValues;

/// Weight a prioritized dimension is forced up to when it lands at or below
/// the 0.2 baseline after normalization.
const GUARANTEE_TARGET: f64 = 0.21;

/// Baseline a requirement-highlighted dimension should sit above.
const BASELINE_THRESHOLD: f64 = 0.2;

/// Seed the weight map: base weight plus boost per dimension.
pub fn apply_boosts(boosts: &BoostValues) -> DimensionMap<f64> {
    boosts
        .entries()
        .into_iter()
        .map(|(dim, boost)| (dim.to_string(), BASE_DIMENSION_WEIGHT + boost))
        .collect()
}

/// Clamp every weight to the minimum viable floor.
pub fn floor_weights(weights: &DimensionMap<f64>) -> DimensionMap<f64> {
    weights
        .iter()
        .map(|(dim, w)| (dim.clone(), w.max(MIN_DIMENSION_WEIGHT)))
        .collect()
}

/// Scale the map so weights sum to exactly 1.0.
pub fn normalize(weights: &DimensionMap<f64>) -> DimensionMap<f64> {
    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        // Degenerate input; fall back to an even split.
        let even = 1.0 / weights.len().max(1) as f64;
        return weights.keys().map(|dim| (dim.clone(), even)).collect();
    }
    weights
        .iter()
        .map(|(dim, w)| (dim.clone(), w / total))
        .collect()
}

/// Priority-guarantee pass.
///
/// `prioritized` is the up-to-three boost-ranked dimensions that the
/// requirements highlighted. Any of them still at or below the 0.2 baseline
/// is forced to 0.21, funded proportionally from the non-prioritized
/// dimensions (never pushing one below the floor), then the map is
/// renormalized.
pub fn guarantee_priorities(
    weights: &DimensionMap<f64>,
    prioritized: &[&str],
) -> DimensionMap<f64> {
    let mut weights = weights.clone();

    for dim in prioritized {
        let Some(&current) = weights.get(*dim) else {
            continue;
        };
        if current > BASELINE_THRESHOLD {
            continue;
        }

        let needed = GUARANTEE_TARGET - current;
        let others: Vec<String> = weights
            .keys()
            .filter(|name| !prioritized.contains(&name.as_str()))
            .cloned()
            .collect();
        let others_total: f64 = others.iter().map(|name| weights[name]).sum();
        if others.is_empty() || others_total <= needed {
            // Nothing left to withdraw from; leave the snapshot as-is.
            continue;
        }

        for name in &others {
            let share = weights[name] / others_total;
            let reduced = (weights[name] - needed * share).max(MIN_DIMENSION_WEIGHT);
            weights.insert(name.clone(), reduced);
        }
        weights.insert((*dim).to_string(), GUARANTEE_TARGET);
        weights = normalize(&weights);
    }

    weights
}

/// Scale-priority override.
///
/// The caller has already established that the project needs large scale
/// under competing constraints. If neither scalability nor performance made
/// the weight top-3, the heavier of the two is boosted to just above the
/// third-place weight, funded from the lightest dimensions first (floor
/// respected), then renormalized.
pub fn enforce_scale_priority(weights: &DimensionMap<f64>) -> DimensionMap<f64> {
    let ranked = sorted_by_weight_desc(weights);
    let rank_of = |dim: &str| ranked.iter().position(|(name, _)| name == dim);

    let (Some(scalability_rank), Some(performance_rank)) =
        (rank_of("scalability"), rank_of("performance"))
    else {
        return weights.clone();
    };
    if scalability_rank.min(performance_rank) <= 2 || ranked.len() < 3 {
        return weights.clone();
    }

    let target_dim = if weights["scalability"] >= weights["performance"] {
        "scalability"
    } else {
        "performance"
    };
    let target_weight = ranked[2].1 + 0.01;

    let mut weights = weights.clone();
    let mut remaining = target_weight - weights[target_dim];

    let mut lightest_first = ranked;
    lightest_first.reverse();
    for (name, _) in &lightest_first {
        if name == target_dim || remaining <= 0.0 {
            continue;
        }
        let available = (weights[name] - MIN_DIMENSION_WEIGHT).max(0.0);
        let reduction = remaining.min(available);
        weights.insert(name.clone(), weights[name] - reduction);
        remaining -= reduction;
    }

    weights.insert(target_dim.to_string(), target_weight);
    normalize(&weights)
}

/// Weights sorted heaviest first; ties resolve in canonical dimension order
/// so results are reproducible across runs.
pub fn sorted_by_weight_desc(weights: &DimensionMap<f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> =
        weights.iter().map(|(dim, w)| (dim.clone(), *w)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| canonical_rank(&a.0).cmp(&canonical_rank(&b.0)))
    });
    entries
}

fn canonical_rank(dim: &str) -> usize {
    STANDARD_DIMENSIONS
        .iter()
        .position(|name| *name == dim)
        .unwrap_or(STANDARD_DIMENSIONS.len())
}
