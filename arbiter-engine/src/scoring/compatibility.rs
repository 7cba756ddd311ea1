//! Weighted compatibility scoring.
//!
//! Combines a profile's 0-5 dimension scores with the derived weights into a
//! single [0, 1] fit plus generated reasoning. Missing dimensions contribute
//! a half-weighted neutral substitute so incomplete profiles degrade instead
//! of failing.

use tracing::warn;

use arbiter_core::config::ScoringConfig;
use arbiter_core::constants::MAX_DIMENSION_SCORE;
use arbiter_core::types::{CompatibilityScore, TechProfile, WeightedCriteria};

/// Neutral value, in [0, 1] terms, substituted for missing dimensions.
const NEUTRAL_NORMALIZED: f64 = 0.5;

/// Weight multiplier for the reduced-confidence neutral substitute.
const MISSING_DIMENSION_DISCOUNT: f64 = 0.5;

/// How many top contributions drive the reasoning text.
const TOP_CONTRIBUTIONS: usize = 3;

/// One dimension's part in a compatibility score.
#[derive(Debug, Clone)]
struct Contribution {
    dimension: String,
    /// Raw 0-5 score (2.5 neutral when the dimension is missing).
    raw_score: f64,
    weight: f64,
    contribution: f64,
}

/// Scores technology profiles against weighted criteria.
///
/// Pure: the same (profile, criteria) pair always yields the same score.
#[derive(Debug, Default)]
pub struct CompatibilityScorer {
    config: ScoringConfig,
}

impl CompatibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Score a profile against the criteria.
    ///
    /// Never fails: a whole-technology computation problem degrades to a
    /// neutral 0.5 score with explanatory reasoning so one bad profile
    /// cannot abort a comparison.
    pub fn score(&self, profile: &TechProfile, criteria: &WeightedCriteria) -> CompatibilityScore {
        match self.try_score(profile, criteria) {
            Ok(score) => score,
            Err(detail) => {
                warn!(
                    technology = %profile.name,
                    detail = %detail,
                    "compatibility calculation degraded to neutral"
                );
                CompatibilityScore {
                    technology: profile.name.clone(),
                    score: NEUTRAL_NORMALIZED,
                    reasoning: format!(
                        "Compatibility calculation failed ({detail}). \
                         Using neutral score for comparison."
                    ),
                }
            }
        }
    }

    fn try_score(
        &self,
        profile: &TechProfile,
        criteria: &WeightedCriteria,
    ) -> Result<CompatibilityScore, String> {
        if criteria.dimension_weights.is_empty() {
            return Err("criteria contain no dimension weights".to_string());
        }

        let mut total_contribution = 0.0;
        let mut total_weight = 0.0;
        let mut contributions = Vec::new();

        // Deterministic iteration: heaviest dimension first.
        for (dimension, weight) in criteria.dimensions_by_weight() {
            if weight <= 0.0 {
                continue;
            }

            match profile.dimensions.get(dimension) {
                Some(dim_score) => {
                    if !dim_score.score.is_finite() {
                        // Corrupt cell; skip it rather than poisoning the sum.
                        continue;
                    }
                    let normalized = (dim_score.score / MAX_DIMENSION_SCORE).clamp(0.0, 1.0);
                    let contribution = normalized * weight;
                    total_contribution += contribution;
                    total_weight += weight;
                    contributions.push(Contribution {
                        dimension: dimension.to_string(),
                        raw_score: dim_score.score,
                        weight,
                        contribution,
                    });
                }
                None => {
                    // Reduced-confidence neutral substitute: both the
                    // discounted weight and its contribution enter the sums.
                    let contribution = NEUTRAL_NORMALIZED * weight * MISSING_DIMENSION_DISCOUNT;
                    total_contribution += contribution;
                    total_weight += weight * MISSING_DIMENSION_DISCOUNT;
                    contributions.push(Contribution {
                        dimension: dimension.to_string(),
                        raw_score: MAX_DIMENSION_SCORE * NEUTRAL_NORMALIZED,
                        weight,
                        contribution,
                    });
                }
            }
        }

        let final_score = if total_weight > 0.0 {
            total_contribution / total_weight
        } else {
            NEUTRAL_NORMALIZED
        };
        if !final_score.is_finite() {
            return Err("score computation produced a non-finite value".to_string());
        }

        let reasoning = self.reasoning(&contributions, criteria, final_score);

        Ok(CompatibilityScore {
            technology: profile.name.clone(),
            score: final_score.clamp(0.0, 1.0),
            reasoning,
        })
    }

    /// Reasoning from the top weighted-by-contribution dimensions plus the
    /// stated top priority.
    fn reasoning(
        &self,
        contributions: &[Contribution],
        criteria: &WeightedCriteria,
        final_score: f64,
    ) -> String {
        let mut parts = Vec::new();
        parts.push(format!(
            "Overall compatibility: {}%",
            (final_score * 100.0) as i64
        ));

        let mut ranked: Vec<&Contribution> = contributions.iter().collect();
        ranked.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.dimension.cmp(&b.dimension))
        });

        let significant = self.config.effective_significant_weight();
        let mut strengths = Vec::new();
        let mut concerns = Vec::new();
        for entry in ranked.iter().take(TOP_CONTRIBUTIONS) {
            if entry.weight <= significant {
                continue;
            }
            if entry.raw_score >= self.config.effective_strength_threshold() {
                strengths.push(format!("excellent {}", entry.dimension));
            } else if entry.raw_score <= self.config.effective_concern_threshold() {
                concerns.push(format!("limited {}", entry.dimension));
            }
        }

        if !strengths.is_empty() {
            parts.push(format!("Key strengths: {}", strengths.join(", ")));
        }
        if !concerns.is_empty() {
            parts.push(format!("Areas of concern: {}", concerns.join(", ")));
        }
        if let Some(top_priority) = criteria.top_priority() {
            parts.push(format!("Evaluated against priority: {top_priority}"));
        }

        parts.join(". ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::types::collections::DimensionMap;
    use arbiter_core::types::{DimensionScore, Maturity, TechMetadata};

    fn make_profile(name: &str, dimensions: &[(&str, f64)]) -> TechProfile {
        TechProfile {
            name: name.to_string(),
            category: "Technology".to_string(),
            dimensions: dimensions
                .iter()
                .map(|(dim, score)| {
                    (
                        dim.to_string(),
                        DimensionScore::new(*score, format!("{dim} rationale")),
                    )
                })
                .collect(),
            pros: vec!["pro".to_string()],
            cons: vec!["con".to_string()],
            best_for: vec!["use case".to_string()],
            metadata: TechMetadata {
                maturity: Maturity::Stable,
                license: "MIT".to_string(),
                maintainer: "Someone".to_string(),
            },
        }
    }

    fn make_criteria(weights: &[(&str, f64)]) -> WeightedCriteria {
        let dimension_weights: DimensionMap<f64> = weights
            .iter()
            .map(|(dim, w)| (dim.to_string(), *w))
            .collect();
        WeightedCriteria {
            dimension_weights,
            priority_factors: vec!["Balanced cost considerations".to_string()],
        }
    }

    fn even_criteria() -> WeightedCriteria {
        make_criteria(&[
            ("cost", 0.2),
            ("scalability", 0.2),
            ("complexity", 0.2),
            ("ecosystem", 0.2),
            ("performance", 0.2),
        ])
    }

    #[test]
    fn test_perfect_profile_scores_one() {
        let profile = make_profile(
            "Ideal",
            &[
                ("cost", 5.0),
                ("scalability", 5.0),
                ("complexity", 5.0),
                ("ecosystem", 5.0),
                ("performance", 5.0),
            ],
        );
        let score = CompatibilityScorer::with_defaults().score(&profile, &even_criteria());
        assert!((score.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_profile_lands_on_neutral() {
        let profile = make_profile("Mystery", &[]);
        let score = CompatibilityScorer::with_defaults().score(&profile, &even_criteria());
        assert!(
            (score.score - 0.5).abs() < 1e-9,
            "all-missing profile should be exactly neutral, got {}",
            score.score
        );
    }

    #[test]
    fn test_missing_dimension_pulls_toward_neutral() {
        let strong_full = make_profile(
            "Full",
            &[
                ("cost", 5.0),
                ("scalability", 5.0),
                ("complexity", 5.0),
                ("ecosystem", 5.0),
                ("performance", 5.0),
            ],
        );
        let strong_partial = make_profile(
            "Partial",
            &[
                ("cost", 5.0),
                ("scalability", 5.0),
                ("complexity", 5.0),
                ("ecosystem", 5.0),
            ],
        );
        let scorer = CompatibilityScorer::with_defaults();
        let criteria = even_criteria();
        let full = scorer.score(&strong_full, &criteria);
        let partial = scorer.score(&strong_partial, &criteria);
        assert!(
            full.score > partial.score,
            "missing dimension should cost a strong profile: {} vs {}",
            full.score,
            partial.score
        );
        assert!(partial.score > 0.5);
    }

    #[test]
    fn test_score_is_clamped() {
        // Scores above the 0-5 range normalize past 1.0 per-dimension and
        // must still clamp at the end.
        let profile = make_profile("Overdrive", &[("cost", 9.0)]);
        let criteria = make_criteria(&[("cost", 1.0)]);
        let score = CompatibilityScorer::with_defaults().score(&profile, &criteria);
        assert!(score.score <= 1.0);
    }

    #[test]
    fn test_zero_weights_are_skipped() {
        let profile = make_profile("Sample", &[("cost", 5.0), ("ecosystem", 1.0)]);
        let criteria = make_criteria(&[("cost", 0.5), ("ecosystem", 0.0)]);
        let score = CompatibilityScorer::with_defaults().score(&profile, &criteria);
        assert!((score.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reasoning_mentions_strengths_and_priority() {
        let profile = make_profile(
            "Strong",
            &[
                ("cost", 4.5),
                ("scalability", 3.0),
                ("complexity", 3.0),
                ("ecosystem", 3.0),
                ("performance", 3.0),
            ],
        );
        let criteria = make_criteria(&[
            ("cost", 0.4),
            ("scalability", 0.15),
            ("complexity", 0.15),
            ("ecosystem", 0.15),
            ("performance", 0.15),
        ]);
        let score = CompatibilityScorer::with_defaults().score(&profile, &criteria);
        assert!(score.reasoning.contains("excellent cost"));
        assert!(score
            .reasoning
            .contains("Evaluated against priority: Balanced cost considerations"));
    }

    #[test]
    fn test_reasoning_mentions_concerns() {
        let profile = make_profile(
            "Weak",
            &[
                ("cost", 1.5),
                ("scalability", 3.0),
                ("complexity", 3.0),
                ("ecosystem", 3.0),
                ("performance", 3.0),
            ],
        );
        let criteria = make_criteria(&[
            ("cost", 0.4),
            ("scalability", 0.15),
            ("complexity", 0.15),
            ("ecosystem", 0.15),
            ("performance", 0.15),
        ]);
        let score = CompatibilityScorer::with_defaults().score(&profile, &criteria);
        assert!(score.reasoning.contains("limited cost"));
    }

    #[test]
    fn test_empty_criteria_degrades_to_neutral() {
        let profile = make_profile("Sample", &[("cost", 4.0)]);
        let criteria = WeightedCriteria {
            dimension_weights: DimensionMap::default(),
            priority_factors: Vec::new(),
        };
        let score = CompatibilityScorer::with_defaults().score(&profile, &criteria);
        assert_eq!(score.score, 0.5);
        assert!(score.reasoning.contains("Compatibility calculation failed"));
    }

    #[test]
    fn test_scoring_is_pure() {
        let profile = make_profile(
            "Sample",
            &[("cost", 4.0), ("scalability", 2.0), ("ecosystem", 3.5)],
        );
        let criteria = even_criteria();
        let scorer = CompatibilityScorer::with_defaults();
        let first = scorer.score(&profile, &criteria);
        let second = scorer.score(&profile, &criteria);
        assert_eq!(first, second);
    }
}
