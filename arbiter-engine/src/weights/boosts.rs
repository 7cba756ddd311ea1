//! Per-dimension boost model.
//!
//! Each requirement field contributes an independent additive boost; fields
//! touching the same dimension sum. Values are hand-tuned.

use arbiter_core::types::{Budget, Expertise, ProjectRequirements, Scale, Timeline};

/// Boost a dimension must exceed to count as requirement-highlighted.
pub const HIGHLIGHT_BOOST_THRESHOLD: f64 = 0.02;

/// Per-member weight of team size on the ecosystem dimension. Linear and
/// deliberately uncapped; the output validation bounds the damage.
const TEAM_SIZE_ECOSYSTEM_RATE: f64 = 0.015;

/// Computed boosts for the five standard dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostValues {
    pub cost: f64,
    pub scalability: f64,
    pub complexity: f64,
    pub ecosystem: f64,
    pub performance: f64,
}

impl BoostValues {
    /// Boosts as (dimension, value) pairs in canonical dimension order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("cost", self.cost),
            ("scalability", self.scalability),
            ("complexity", self.complexity),
            ("ecosystem", self.ecosystem),
            ("performance", self.performance),
        ]
    }

    /// Dimensions with boost above `HIGHLIGHT_BOOST_THRESHOLD`, strongest
    /// first. Ties keep canonical dimension order.
    pub fn highlighted(&self) -> Vec<(&'static str, f64)> {
        let mut entries: Vec<(&'static str, f64)> = self
            .entries()
            .into_iter()
            .filter(|(_, boost)| *boost > HIGHLIGHT_BOOST_THRESHOLD)
            .collect();
        // Stable sort preserves canonical order among equal boosts.
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

/// Compute all dimension boosts from the requirements.
pub fn compute_boosts(requirements: &ProjectRequirements) -> BoostValues {
    BoostValues {
        cost: cost_boost(requirements.budget),
        scalability: scalability_boost(requirements.scalability_needs),
        complexity: complexity_boost(requirements.timeline, requirements.expertise_level),
        ecosystem: ecosystem_boost(requirements.team_size, requirements.expertise_level),
        performance: performance_boost(requirements.scalability_needs),
    }
}

/// Budget pressure drives cost sensitivity.
fn cost_boost(budget: Budget) -> f64 {
    match budget {
        Budget::Low => 0.15,
        Budget::Medium => 0.05,
        Budget::High => -0.03,
    }
}

/// Timeline pressure drives the simplicity preference; team expertise
/// shifts it further.
fn complexity_boost(timeline: Timeline, expertise: Expertise) -> f64 {
    let timeline_term = match timeline {
        Timeline::Tight => 0.15,
        Timeline::Moderate => 0.06,
        Timeline::Flexible => -0.06,
    };
    let expertise_term = match expertise {
        Expertise::Beginner => 0.10,
        Expertise::Intermediate => 0.0,
        Expertise::Expert => -0.05,
    };
    timeline_term + expertise_term
}

fn scalability_boost(scale: Scale) -> f64 {
    match scale {
        Scale::Large => 0.18,
        Scale::Medium => 0.06,
        Scale::Small => -0.04,
    }
}

fn performance_boost(scale: Scale) -> f64 {
    match scale {
        Scale::Large => 0.18,
        Scale::Medium => 0.05,
        Scale::Small => -0.03,
    }
}

/// Larger teams lean harder on mature ecosystems; less experienced teams
/// need more ecosystem support.
fn ecosystem_boost(team_size: u32, expertise: Expertise) -> f64 {
    let size_term = team_size as f64 * TEAM_SIZE_ECOSYSTEM_RATE;
    let expertise_term = match expertise {
        Expertise::Beginner => 0.12,
        Expertise::Intermediate => 0.04,
        Expertise::Expert => -0.04,
    };
    size_term + expertise_term
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_requirements(
        team_size: u32,
        budget: Budget,
        timeline: Timeline,
        scale: Scale,
        expertise: Expertise,
    ) -> ProjectRequirements {
        ProjectRequirements {
            team_size,
            budget,
            timeline,
            scalability_needs: scale,
            expertise_level: expertise,
        }
    }

    #[test]
    fn test_constrained_project_boosts() {
        let boosts = compute_boosts(&make_requirements(
            3,
            Budget::Low,
            Timeline::Tight,
            Scale::Large,
            Expertise::Intermediate,
        ));
        assert_eq!(boosts.cost, 0.15);
        assert_eq!(boosts.complexity, 0.15);
        assert_eq!(boosts.scalability, 0.18);
        assert_eq!(boosts.performance, 0.18);
        assert!((boosts.ecosystem - 0.085).abs() < 1e-10);
    }

    #[test]
    fn test_expertise_shifts_complexity_both_ways() {
        let beginner = complexity_boost(Timeline::Tight, Expertise::Beginner);
        let expert = complexity_boost(Timeline::Tight, Expertise::Expert);
        assert!((beginner - 0.25).abs() < 1e-10);
        assert!((expert - 0.10).abs() < 1e-10);
    }

    #[test]
    fn test_team_size_is_linear_and_uncapped() {
        let small = ecosystem_boost(2, Expertise::Intermediate);
        let large = ecosystem_boost(20, Expertise::Intermediate);
        assert!((large - small - 18.0 * 0.015).abs() < 1e-10);
    }

    #[test]
    fn test_highlighted_sorting_is_deterministic() {
        // scalability and performance tie at 0.18; canonical order puts
        // scalability first.
        let boosts = compute_boosts(&make_requirements(
            1,
            Budget::High,
            Timeline::Flexible,
            Scale::Large,
            Expertise::Expert,
        ));
        let highlighted = boosts.highlighted();
        assert_eq!(highlighted[0].0, "scalability");
        assert_eq!(highlighted[1].0, "performance");
        // cost (-0.03), complexity (-0.11), ecosystem (-0.025) all excluded.
        assert_eq!(highlighted.len(), 2);
    }

    #[test]
    fn test_relaxed_project_de_emphasizes_everything() {
        let boosts = compute_boosts(&make_requirements(
            1,
            Budget::High,
            Timeline::Flexible,
            Scale::Small,
            Expertise::Expert,
        ));
        assert!(boosts.cost < 0.0);
        assert!(boosts.complexity < 0.0);
        assert!(boosts.scalability < 0.0);
        assert!(boosts.performance < 0.0);
        assert!(boosts.ecosystem < 0.0);
    }
}
