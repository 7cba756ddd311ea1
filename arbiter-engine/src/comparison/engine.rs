//! Comparison orchestration across 2-5 technologies.

use tracing::{debug, instrument};

use arbiter_core::config::ScoringConfig;
use arbiter_core::constants::{
    MAX_MATRIX_DIMENSIONS, MAX_TECHNOLOGIES, MIN_TECHNOLOGIES, STANDARD_DIMENSIONS,
};
use arbiter_core::errors::ComparisonError;
use arbiter_core::types::collections::DimensionMap;
use arbiter_core::types::{
    CompatibilityScore, TechProfile, TechSummary, TradeoffMatrix, WeightedCriteria,
};

use crate::scoring::CompatibilityScorer;

use super::matrix;

/// A profile needs at least this many known dimensions to count as having
/// adequate data.
const MIN_KNOWN_DIMENSIONS: usize = 3;

/// Everything the comparison stage produces; the pipeline folds this into
/// the final report.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub technologies: Vec<String>,
    pub comparison_data: DimensionMap<TechSummary>,
    pub tradeoff_matrix: TradeoffMatrix,
    pub compatibility_scores: Vec<CompatibilityScore>,
}

/// Orchestrates matrix construction, compatibility scoring, and
/// side-by-side assembly.
pub struct ComparisonEngine {
    scorer: CompatibilityScorer,
    config: ScoringConfig,
}

impl ComparisonEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scorer: CompatibilityScorer::new(config.clone()),
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Generate a comparison across the given profiles.
    ///
    /// Custom dimensions extend the standard five; a custom name that
    /// exactly duplicates a standard dimension is rejected.
    #[instrument(skip_all, fields(technologies = profiles.len()))]
    pub fn generate_comparison(
        &self,
        profiles: &[TechProfile],
        criteria: &WeightedCriteria,
        custom_dimensions: Option<&[String]>,
    ) -> Result<Comparison, ComparisonError> {
        self.validate_inputs(profiles, criteria)?;

        let dimensions = comparison_dimensions(custom_dimensions)?;
        let tradeoff_matrix = matrix::build_matrix(profiles, &dimensions, &self.config)?;

        // Per-technology scoring never aborts the comparison: the scorer
        // degrades a failing technology to a neutral score internally.
        let compatibility_scores: Vec<CompatibilityScore> = profiles
            .iter()
            .map(|profile| self.scorer.score(profile, criteria))
            .collect();

        let comparison_data = side_by_side(profiles);
        debug!(
            dimensions = dimensions.len(),
            highlights = tradeoff_matrix.highlights.len(),
            "comparison assembled"
        );

        Ok(Comparison {
            technologies: profiles.iter().map(|p| p.name.clone()).collect(),
            comparison_data,
            tradeoff_matrix,
            compatibility_scores,
        })
    }

    /// Reduced-fidelity fallback: standard dimensions only. For callers
    /// that caught `InsufficientData` on a custom-dimension request and
    /// chose to proceed anyway.
    pub fn generate_standard_comparison(
        &self,
        profiles: &[TechProfile],
        criteria: &WeightedCriteria,
    ) -> Result<Comparison, ComparisonError> {
        self.generate_comparison(profiles, criteria, None)
    }

    fn validate_inputs(
        &self,
        profiles: &[TechProfile],
        criteria: &WeightedCriteria,
    ) -> Result<(), ComparisonError> {
        if !(MIN_TECHNOLOGIES..=MAX_TECHNOLOGIES).contains(&profiles.len()) {
            return Err(ComparisonError::BadTechnologyCount {
                count: profiles.len(),
            });
        }
        if criteria.dimension_weights.is_empty() {
            return Err(ComparisonError::EmptyWeights);
        }

        let lacking = profiles
            .iter()
            .filter(|p| p.known_dimension_count() < MIN_KNOWN_DIMENSIONS)
            .count();
        // "More than half" without float division.
        if lacking * 2 > profiles.len() {
            return Err(ComparisonError::InsufficientData {
                lacking,
                total: profiles.len(),
            });
        }

        Ok(())
    }
}

/// The five standard dimensions plus any customs, rejecting exact
/// duplicates of standard names.
fn comparison_dimensions(
    custom_dimensions: Option<&[String]>,
) -> Result<Vec<String>, ComparisonError> {
    let mut dimensions: Vec<String> =
        STANDARD_DIMENSIONS.iter().map(|d| d.to_string()).collect();

    if let Some(customs) = custom_dimensions {
        for custom in customs {
            if STANDARD_DIMENSIONS.contains(&custom.as_str()) {
                return Err(ComparisonError::DimensionCollision {
                    name: custom.clone(),
                });
            }
            dimensions.push(custom.clone());
        }
    }

    if dimensions.len() > MAX_MATRIX_DIMENSIONS {
        return Err(ComparisonError::TooManyDimensions {
            count: dimensions.len(),
        });
    }

    Ok(dimensions)
}

/// Per-technology side-by-side view, assembled independently of the matrix.
fn side_by_side(profiles: &[TechProfile]) -> DimensionMap<TechSummary> {
    profiles
        .iter()
        .map(|profile| {
            (
                profile.name.clone(),
                TechSummary {
                    category: profile.category.clone(),
                    pros: profile.pros.clone(),
                    cons: profile.cons.clone(),
                    best_for: profile.best_for.clone(),
                    dimensions: profile.dimensions.clone(),
                    metadata: profile.metadata.clone(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn full_profile(name: &str) -> TechProfile {
        make_profile(
            name,
            &[
                ("cost", 4.0),
                ("scalability", 3.0),
                ("complexity", 3.5),
                ("ecosystem", 4.5),
                ("performance", 3.0),
            ],
        )
    }

    fn even_criteria() -> WeightedCriteria {
        let weights: DimensionMap<f64> = STANDARD_DIMENSIONS
            .iter()
            .map(|d| (d.to_string(), 0.2))
            .collect();
        WeightedCriteria {
            dimension_weights: weights,
            priority_factors: Vec::new(),
        }
    }

    #[test]
    fn test_comparison_bundle_shape() {
        let profiles = vec![full_profile("A"), full_profile("B")];
        let comparison = ComparisonEngine::with_defaults()
            .generate_comparison(&profiles, &even_criteria(), None)
            .unwrap();
        assert_eq!(comparison.technologies, vec!["A", "B"]);
        assert_eq!(comparison.compatibility_scores.len(), 2);
        assert_eq!(comparison.tradeoff_matrix.dimensions.len(), 5);
        assert!(comparison.comparison_data.contains_key("A"));
    }

    #[test]
    fn test_too_few_and_too_many_technologies() {
        let engine = ComparisonEngine::with_defaults();
        let one = vec![full_profile("A")];
        assert!(matches!(
            engine.generate_comparison(&one, &even_criteria(), None),
            Err(ComparisonError::BadTechnologyCount { count: 1 })
        ));

        let six: Vec<TechProfile> = (0..6).map(|i| full_profile(&format!("T{i}"))).collect();
        assert!(matches!(
            engine.generate_comparison(&six, &even_criteria(), None),
            Err(ComparisonError::BadTechnologyCount { count: 6 })
        ));
    }

    #[test]
    fn test_insufficient_data_when_most_profiles_are_thin() {
        let engine = ComparisonEngine::with_defaults();
        let profiles = vec![
            make_profile("Thin1", &[("cost", 3.0)]),
            make_profile("Thin2", &[("cost", 3.0), ("ecosystem", 2.0)]),
            full_profile("Full"),
        ];
        assert!(matches!(
            engine.generate_comparison(&profiles, &even_criteria(), None),
            Err(ComparisonError::InsufficientData { lacking: 2, total: 3 })
        ));
    }

    #[test]
    fn test_half_thin_profiles_still_compare() {
        // Exactly half thin is not "more than half".
        let engine = ComparisonEngine::with_defaults();
        let profiles = vec![make_profile("Thin", &[("cost", 3.0)]), full_profile("Full")];
        assert!(engine
            .generate_comparison(&profiles, &even_criteria(), None)
            .is_ok());
    }

    #[test]
    fn test_custom_dimensions_extend_matrix() {
        let profiles = vec![full_profile("A"), full_profile("B")];
        let customs = vec!["Bundle Size".to_string()];
        let comparison = ComparisonEngine::with_defaults()
            .generate_comparison(&profiles, &even_criteria(), Some(&customs))
            .unwrap();
        assert_eq!(comparison.tradeoff_matrix.dimensions.len(), 6);
        assert_eq!(comparison.tradeoff_matrix.score_for("A", "Bundle Size"), Some(3.0));
    }

    #[test]
    fn test_custom_dimension_exact_collision_rejected() {
        let profiles = vec![full_profile("A"), full_profile("B")];
        let customs = vec!["cost".to_string()];
        assert!(matches!(
            ComparisonEngine::with_defaults().generate_comparison(
                &profiles,
                &even_criteria(),
                Some(&customs)
            ),
            Err(ComparisonError::DimensionCollision { .. })
        ));
    }

    #[test]
    fn test_dimension_cap() {
        let profiles = vec![full_profile("A"), full_profile("B")];
        let customs: Vec<String> = (0..6).map(|i| format!("Custom {i}")).collect();
        assert!(matches!(
            ComparisonEngine::with_defaults().generate_comparison(
                &profiles,
                &even_criteria(),
                Some(&customs)
            ),
            Err(ComparisonError::TooManyDimensions { count: 11 })
        ));
    }

    #[test]
    fn test_empty_weights_rejected() {
        let profiles = vec![full_profile("A"), full_profile("B")];
        let criteria = WeightedCriteria {
            dimension_weights: DimensionMap::default(),
            priority_factors: Vec::new(),
        };
        assert!(matches!(
            ComparisonEngine::with_defaults().generate_comparison(&profiles, &criteria, None),
            Err(ComparisonError::EmptyWeights)
        ));
    }
}
