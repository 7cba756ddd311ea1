//! Alternative what-if scenarios.
//!
//! Each scenario re-reads the raw profile dimensions under a single-focus
//! lens (cost, scalability, simplicity). The scalability and simplicity
//! scenarios are suppressed when they would just repeat the top pick; the
//! cost scenario is always offered when selectable.

use arbiter_core::constants::MAX_DIMENSION_SCORE;
use arbiter_core::types::{AlternativeScenario, CompatibilityScore, TechProfile};

/// Generate alternative scenarios. `top_pick` is the ranked winner;
/// `scores` is in input order and drives tie-breaks (first wins).
pub fn alternative_scenarios(
    profiles: &[TechProfile],
    scores: &[CompatibilityScore],
    top_pick: &str,
) -> Option<Vec<AlternativeScenario>> {
    let profile_of = |name: &str| profiles.iter().find(|p| p.name == name);
    let mut scenarios = Vec::new();

    // Cost lens: maximize inverted cost score.
    let mut best_cost_effectiveness = 0.0;
    let mut budget_focused: Option<&str> = None;
    for score in scores {
        let Some(profile) = profile_of(&score.technology) else {
            continue;
        };
        if let Some(cost) = profile.dimensions.get("cost") {
            let cost_effectiveness = MAX_DIMENSION_SCORE - cost.score;
            if cost_effectiveness > best_cost_effectiveness {
                best_cost_effectiveness = cost_effectiveness;
                budget_focused = Some(&profile.name);
            }
        }
    }
    if let Some(tech) = budget_focused {
        scenarios.push(AlternativeScenario {
            scenario: "If budget becomes the primary constraint".to_string(),
            recommended_tech: tech.to_string(),
            explanation: "This option offers the best cost-effectiveness for the project requirements"
                .to_string(),
        });
    }

    // Scalability lens: maximize scalability score.
    let mut best_scalability = 0.0;
    let mut scalability_focused: Option<&str> = None;
    for score in scores {
        let Some(profile) = profile_of(&score.technology) else {
            continue;
        };
        if let Some(scalability) = profile.dimensions.get("scalability") {
            if scalability.score > best_scalability {
                best_scalability = scalability.score;
                scalability_focused = Some(&profile.name);
            }
        }
    }
    if let Some(tech) = scalability_focused {
        if tech != top_pick {
            scenarios.push(AlternativeScenario {
                scenario: "If scalability becomes the top priority".to_string(),
                recommended_tech: tech.to_string(),
                explanation: "This option provides the strongest scalability capabilities"
                    .to_string(),
            });
        }
    }

    // Simplicity lens: minimize the complexity score.
    let mut best_simplicity = MAX_DIMENSION_SCORE + 1.0;
    let mut simplicity_focused: Option<&str> = None;
    for score in scores {
        let Some(profile) = profile_of(&score.technology) else {
            continue;
        };
        if let Some(complexity) = profile.dimensions.get("complexity") {
            if complexity.score < best_simplicity {
                best_simplicity = complexity.score;
                simplicity_focused = Some(&profile.name);
            }
        }
    }
    if let Some(tech) = simplicity_focused {
        if tech != top_pick {
            scenarios.push(AlternativeScenario {
                scenario: "If team expertise is limited or learning curve is a concern".to_string(),
                recommended_tech: tech.to_string(),
                explanation: "This option offers the lowest complexity and easiest learning curve"
                    .to_string(),
            });
        }
    }

    if scenarios.is_empty() {
        None
    } else {
        Some(scenarios)
    }
}
