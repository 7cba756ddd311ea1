//! Priority-factor derivation.
//!
//! Ordered, de-duplicated list of human-readable priorities. Trigger order
//! is fixed (budget, timeline, scale, team size, expertise) so the most
//! constrained concerns read first.

use arbiter_core::types::{Budget, Expertise, ProjectRequirements, Scale, Timeline};

/// Derive priority factors from the requirements, most important first.
pub fn priority_factors(requirements: &ProjectRequirements) -> Vec<String> {
    let mut factors: Vec<&str> = Vec::new();

    match requirements.budget {
        Budget::Low => {
            factors.push("Cost optimization and budget constraints");
            factors.push("Open-source solutions preferred");
        }
        Budget::Medium => factors.push("Balanced cost considerations"),
        Budget::High => {}
    }

    match requirements.timeline {
        Timeline::Tight => {
            factors.push("Rapid development and deployment");
            factors.push("Minimal learning curve required");
            factors.push("Simple implementation approach");
        }
        Timeline::Moderate => factors.push("Reasonable learning curve acceptable"),
        Timeline::Flexible => {}
    }

    match requirements.scalability_needs {
        Scale::Large => {
            factors.push("Horizontal scalability requirements");
            factors.push("High performance optimization");
            factors.push("Enterprise-grade reliability");
        }
        Scale::Medium => {
            factors.push("Moderate scalability needs");
            factors.push("Performance considerations");
        }
        Scale::Small => {}
    }

    if requirements.team_size >= 5 {
        factors.push("Team collaboration features");
        factors.push("Mature tooling ecosystem");
    }

    match requirements.expertise_level {
        Expertise::Beginner => {
            factors.push("Strong ecosystem and community support");
            factors.push("Comprehensive documentation needed");
            factors.push("Gentle learning curve essential");
        }
        Expertise::Intermediate => factors.push("Good community support helpful"),
        Expertise::Expert => {
            factors.push("Advanced customization capabilities");
            factors.push("Cutting-edge features available");
        }
    }

    // De-duplicate while preserving trigger order.
    let mut unique = Vec::new();
    for factor in factors {
        if !unique.iter().any(|existing: &String| existing == factor) {
            unique.push(factor.to_string());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_requirements_factors() {
        let factors = priority_factors(&ProjectRequirements::default());
        assert_eq!(
            factors,
            vec![
                "Balanced cost considerations",
                "Reasonable learning curve acceptable",
                "Moderate scalability needs",
                "Performance considerations",
                "Good community support helpful",
            ]
        );
    }

    #[test]
    fn test_constrained_project_leads_with_cost() {
        let requirements = ProjectRequirements {
            team_size: 6,
            budget: Budget::Low,
            timeline: Timeline::Tight,
            scalability_needs: Scale::Large,
            expertise_level: Expertise::Beginner,
        };
        let factors = priority_factors(&requirements);
        assert_eq!(factors[0], "Cost optimization and budget constraints");
        assert!(factors.contains(&"Team collaboration features".to_string()));
        assert!(factors.contains(&"Gentle learning curve essential".to_string()));
    }

    #[test]
    fn test_factors_are_unique() {
        let requirements = ProjectRequirements {
            team_size: 10,
            budget: Budget::Low,
            timeline: Timeline::Tight,
            scalability_needs: Scale::Large,
            expertise_level: Expertise::Expert,
        };
        let factors = priority_factors(&requirements);
        let mut sorted = factors.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), factors.len());
    }

    #[test]
    fn test_relaxed_expert_project_still_has_factors() {
        let requirements = ProjectRequirements {
            team_size: 2,
            budget: Budget::High,
            timeline: Timeline::Flexible,
            scalability_needs: Scale::Small,
            expertise_level: Expertise::Expert,
        };
        let factors = priority_factors(&requirements);
        assert_eq!(
            factors,
            vec![
                "Advanced customization capabilities",
                "Cutting-edge features available",
            ]
        );
    }
}
