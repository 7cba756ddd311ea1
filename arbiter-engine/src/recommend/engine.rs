//! Recommendation assembly: ranking, per-choice reasoning, decision
//! factors, and caveats.

use tracing::{debug, instrument};

use arbiter_core::config::{RecommendConfig, ScoringConfig};
use arbiter_core::errors::ComparisonError;
use arbiter_core::types::collections::SmallVec8;
use arbiter_core::types::{
    CompatibilityScore, Maturity, RankedChoice, Recommendation, TechProfile, WeightedCriteria,
};

use super::confidence;
use super::scenarios;

/// Weight a dimension needs to count as a decision factor.
const DECISION_FACTOR_WEIGHT: f64 = 0.15;

/// Weight above which a dimension counts as a competing priority.
const COMPETING_PRIORITY_WEIGHT: f64 = 0.3;

/// Experimental technologies scoring at or above this get a maturity caveat.
const EXPERIMENTAL_CAVEAT_SCORE: f64 = 0.7;

/// Generates recommendations from compatibility analysis.
pub struct RecommendationEngine {
    config: RecommendConfig,
    scoring: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendConfig, scoring: ScoringConfig) -> Self {
        Self { config, scoring }
    }

    pub fn with_defaults() -> Self {
        Self::new(RecommendConfig::default(), ScoringConfig::default())
    }

    /// Generate a recommendation from profiles and their compatibility
    /// scores (one score per profile, same set of technologies).
    #[instrument(skip_all, fields(technologies = profiles.len()))]
    pub fn generate_recommendation(
        &self,
        profiles: &[TechProfile],
        compatibility_scores: &[CompatibilityScore],
        criteria: &WeightedCriteria,
    ) -> Result<Recommendation, ComparisonError> {
        if profiles.is_empty() {
            return Err(ComparisonError::BadTechnologyCount { count: 0 });
        }
        if compatibility_scores.len() != profiles.len() {
            return Err(ComparisonError::ScoreCountMismatch {
                scores: compatibility_scores.len(),
                technologies: profiles.len(),
            });
        }

        // Stable descending sort: equal scores keep input order.
        let mut sorted: Vec<&CompatibilityScore> = compatibility_scores.iter().collect();
        sorted.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let sorted_values: Vec<f64> = sorted.iter().map(|s| s.score).collect();

        let ranked_choices: SmallVec8<RankedChoice> = sorted
            .iter()
            .enumerate()
            .map(|(rank, comp_score)| {
                let profile = profiles
                    .iter()
                    .find(|p| p.name == comp_score.technology);
                RankedChoice {
                    technology: comp_score.technology.clone(),
                    score: comp_score.score,
                    confidence: confidence::confidence_for(
                        rank,
                        comp_score.score,
                        &sorted_values,
                    ),
                    reasoning: self.detailed_reasoning(profile, comp_score, criteria, rank + 1),
                }
            })
            .collect();

        let key_decision_factors = self.decision_factors(&sorted_values, criteria);
        let caveats = self.caveats(profiles, &sorted, criteria);

        let top_pick = sorted[0].technology.as_str();
        let alternative_scenarios =
            scenarios::alternative_scenarios(profiles, compatibility_scores, top_pick);

        debug!(
            top_pick,
            caveats = caveats.len(),
            "recommendation assembled"
        );

        Ok(Recommendation {
            ranked_choices,
            key_decision_factors,
            caveats,
            alternative_scenarios,
        })
    }

    /// Rank-contextual reasoning for one choice.
    fn detailed_reasoning(
        &self,
        profile: Option<&TechProfile>,
        comp_score: &CompatibilityScore,
        criteria: &WeightedCriteria,
        rank: usize,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        match rank {
            1 => parts.push("Top choice based on compatibility analysis.".to_string()),
            2 => parts.push("Strong second option with good alignment.".to_string()),
            n => parts.push(format!("Ranked #{n} among the compared options.")),
        }

        parts.push(format!(
            "Overall compatibility score: {}%.",
            (comp_score.score * 100.0) as i64
        ));

        if let Some(profile) = profile {
            let significant = self.scoring.effective_significant_weight();
            let mut strengths = Vec::new();
            let mut weaknesses = Vec::new();

            for (dimension, weight) in criteria.dimensions_by_weight() {
                if weight <= significant {
                    continue;
                }
                let Some(cell) = profile.dimensions.get(dimension) else {
                    continue;
                };
                if cell.score >= self.scoring.effective_strength_threshold() {
                    strengths.push(format!("excellent {dimension}"));
                } else if cell.score <= self.scoring.effective_concern_threshold() {
                    weaknesses.push(format!("limited {dimension}"));
                }
            }

            if !strengths.is_empty() {
                parts.push(format!("Key strengths include {}.", strengths.join(", ")));
            }
            if !weaknesses.is_empty() {
                parts.push(format!("Areas of concern: {}.", weaknesses.join(", ")));
            }

            if let Some(top_priority) = criteria.top_priority() {
                parts.push(format!(
                    "Alignment with top priority ({top_priority}) considered in ranking."
                ));
            }

            if let Some(use_case) = profile.best_for.first() {
                parts.push(format!("Best suited for: {use_case}."));
            }
        }

        parts.join(" ")
    }

    /// Key decision factors: top weighted dimensions, top priorities, and a
    /// competition note. Never empty.
    fn decision_factors(&self, sorted_scores: &[f64], criteria: &WeightedCriteria) -> Vec<String> {
        let mut factors = Vec::new();

        for (dimension, weight) in criteria.dimensions_by_weight().into_iter().take(3) {
            if weight > DECISION_FACTOR_WEIGHT {
                factors.push(format!(
                    "{} requirements (weight: {:.1}%)",
                    capitalize(dimension),
                    weight * 100.0
                ));
            }
        }

        for priority in criteria.priority_factors.iter().take(2) {
            factors.push(format!("Project priority: {priority}"));
        }

        if sorted_scores.len() >= 2 {
            let gap = sorted_scores[0] - sorted_scores[1];
            if gap < self.config.effective_close_competition_gap() {
                factors.push("Close competition between top options".to_string());
            }
        }

        if factors.is_empty() {
            factors.push("Overall compatibility with project requirements".to_string());
        }

        factors
    }

    /// Independent caveat triggers plus the standing requirements-may-change
    /// note.
    fn caveats(
        &self,
        profiles: &[TechProfile],
        sorted: &[&CompatibilityScore],
        criteria: &WeightedCriteria,
    ) -> Vec<String> {
        let mut caveats = Vec::new();

        let max_score = sorted.first().map(|s| s.score).unwrap_or(0.0);
        if max_score < self.config.effective_moderate_compatibility_floor() {
            caveats.push(
                "All options show moderate compatibility - consider additional requirements analysis"
                    .to_string(),
            );
        }

        for comp_score in sorted {
            let experimental = profiles.iter().any(|p| {
                p.name == comp_score.technology && p.metadata.maturity == Maturity::Experimental
            });
            if experimental && comp_score.score >= EXPERIMENTAL_CAVEAT_SCORE {
                caveats.push(format!(
                    "{} is experimental technology - evaluate production readiness carefully",
                    comp_score.technology
                ));
            }
        }

        let high_weight_count = criteria
            .dimension_weights
            .values()
            .filter(|weight| **weight > COMPETING_PRIORITY_WEIGHT)
            .count();
        if high_weight_count >= 3 {
            caveats.push(
                "Multiple high-priority requirements may require trade-off decisions".to_string(),
            );
        }

        if sorted.len() >= 2 {
            let gap = sorted[0].score - sorted[1].score;
            if gap < self.config.effective_very_close_gap() {
                caveats.push(
                    "Top choices are very close - consider team preferences and existing expertise"
                        .to_string(),
                );
            }
        }

        caveats.push(
            "Recommendations may change if project requirements or constraints are updated"
                .to_string(),
        );

        caveats
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
