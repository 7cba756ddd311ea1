//! Output-contract types: trade-off matrix, recommendation, and the full
//! comparison report consumed by the rendering layer.
//!
//! The rendering layer owns all textual presentation and must not alter
//! scores or ranking order.

use serde::{Deserialize, Serialize};

use crate::errors::ComparisonError;

use super::collections::{DimensionMap, SmallVec4, SmallVec8};
use super::criteria::{CompatibilityScore, WeightedCriteria};
use super::profile::{DimensionScore, TechMetadata};

/// Confidence in a recommendation: how decisively the top choice beats the
/// runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// A dimension where one technology's lead over all others is large enough
/// to call out explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeoffHighlight {
    pub dimension: String,
    pub leader: String,
    pub explanation: String,
}

/// Technology × dimension score grid with explanations and highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeoffMatrix {
    pub technologies: Vec<String>,
    pub dimensions: Vec<String>,
    /// Row-major: `scores[tech_index][dimension_index]`.
    pub scores: Vec<Vec<f64>>,
    /// Same shape as `scores`.
    pub explanations: Vec<Vec<String>>,
    pub highlights: SmallVec4<TradeoffHighlight>,
}

impl TradeoffMatrix {
    /// Construct a matrix, validating that both grids match the declared
    /// technology and dimension counts exactly.
    pub fn new(
        technologies: Vec<String>,
        dimensions: Vec<String>,
        scores: Vec<Vec<f64>>,
        explanations: Vec<Vec<String>>,
        highlights: SmallVec4<TradeoffHighlight>,
    ) -> Result<Self, ComparisonError> {
        let rows = technologies.len();
        let cols = dimensions.len();

        if rows < 2 {
            return Err(ComparisonError::MatrixShape {
                detail: format!("matrix requires at least 2 technologies, got {rows}"),
            });
        }
        if cols == 0 {
            return Err(ComparisonError::MatrixShape {
                detail: "matrix requires at least 1 dimension".to_string(),
            });
        }

        for (label, grid_rows) in [("scores", scores.len()), ("explanations", explanations.len())]
        {
            if grid_rows != rows {
                return Err(ComparisonError::MatrixShape {
                    detail: format!("{label} grid has {grid_rows} rows, expected {rows}"),
                });
            }
        }
        for (i, row) in scores.iter().enumerate() {
            if row.len() != cols {
                return Err(ComparisonError::MatrixShape {
                    detail: format!("score row {i} has {} columns, expected {cols}", row.len()),
                });
            }
        }
        for (i, row) in explanations.iter().enumerate() {
            if row.len() != cols {
                return Err(ComparisonError::MatrixShape {
                    detail: format!(
                        "explanation row {i} has {} columns, expected {cols}",
                        row.len()
                    ),
                });
            }
        }

        Ok(Self {
            technologies,
            dimensions,
            scores,
            explanations,
            highlights,
        })
    }

    /// Score for a (technology, dimension) pair, if both exist.
    pub fn score_for(&self, technology: &str, dimension: &str) -> Option<f64> {
        let row = self.technologies.iter().position(|t| t == technology)?;
        let col = self.dimensions.iter().position(|d| d == dimension)?;
        Some(self.scores[row][col])
    }
}

/// One entry in the ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedChoice {
    pub technology: String,
    /// Overall compatibility score in [0, 1].
    pub score: f64,
    pub confidence: Confidence,
    pub reasoning: String,
}

/// A what-if recommendation for a different priority weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScenario {
    pub scenario: String,
    pub recommended_tech: String,
    pub explanation: String,
}

/// Final recommendation with ranked choices and reasoning.
///
/// Invariants (enforced by the recommendation engine): `ranked_choices` is
/// non-increasing by score and technology names are unique;
/// `key_decision_factors` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ranked_choices: SmallVec8<RankedChoice>,
    pub key_decision_factors: Vec<String>,
    pub caveats: Vec<String>,
    pub alternative_scenarios: Option<Vec<AlternativeScenario>>,
}

impl Recommendation {
    pub fn top_choice(&self) -> Option<&RankedChoice> {
        self.ranked_choices.first()
    }
}

/// Side-by-side view of a single technology, assembled independently of the
/// trade-off matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechSummary {
    pub category: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: Vec<String>,
    pub dimensions: DimensionMap<DimensionScore>,
    pub metadata: TechMetadata,
}

/// The structured bundle handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Technologies actually compared, in request order.
    pub technologies: Vec<String>,
    /// Technology name → side-by-side summary.
    pub comparison_data: DimensionMap<TechSummary>,
    /// Present unless the request disabled it.
    pub tradeoff_matrix: Option<TradeoffMatrix>,
    pub compatibility_scores: Vec<CompatibilityScore>,
    pub weighted_criteria: WeightedCriteria,
    /// Present unless the request disabled it.
    pub recommendation: Option<Recommendation>,
    /// Surfaced but non-fatal issues: bypassed requirement conflicts,
    /// unknown technologies that received fallback profiles, and similar.
    pub warnings: Vec<String>,
}
