//! Trade-off matrix construction and highlight detection.

use arbiter_core::config::ScoringConfig;
use arbiter_core::constants::NEUTRAL_DIMENSION_SCORE;
use arbiter_core::errors::ComparisonError;
use arbiter_core::types::collections::SmallVec4;
use arbiter_core::types::{TechProfile, TradeoffHighlight, TradeoffMatrix};

/// Cell value when evaluating a dimension fails outright; slightly below
/// neutral so corrupt data never looks like an asset.
const ERROR_CELL_SCORE: f64 = 2.5;

/// Build the technology × dimension matrix.
///
/// Known dimensions copy the profile's score and explanation verbatim;
/// unknown dimensions get a neutral 3.0 with a no-data explanation; a cell
/// that cannot be evaluated degrades to 2.5 with an error explanation. Cell
/// problems never abort the matrix.
pub fn build_matrix(
    profiles: &[TechProfile],
    dimensions: &[String],
    config: &ScoringConfig,
) -> Result<TradeoffMatrix, ComparisonError> {
    let tech_names: Vec<String> = profiles.iter().map(|p| p.name.clone()).collect();

    let mut scores = Vec::with_capacity(profiles.len());
    let mut explanations = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let mut row_scores = Vec::with_capacity(dimensions.len());
        let mut row_explanations = Vec::with_capacity(dimensions.len());

        for dimension in dimensions {
            match profile.dimensions.get(dimension) {
                Some(cell) if cell.score.is_finite() => {
                    row_scores.push(cell.score);
                    row_explanations.push(cell.explanation.clone());
                }
                Some(cell) => {
                    row_scores.push(ERROR_CELL_SCORE);
                    row_explanations.push(format!(
                        "Error evaluating {dimension}: non-finite score {}",
                        cell.score
                    ));
                }
                None => {
                    row_scores.push(NEUTRAL_DIMENSION_SCORE);
                    row_explanations
                        .push(format!("No specific data available for {dimension}"));
                }
            }
        }

        scores.push(row_scores);
        explanations.push(row_explanations);
    }

    let highlights = identify_highlights(profiles, dimensions, &scores, config);

    TradeoffMatrix::new(
        tech_names,
        dimensions.to_vec(),
        scores,
        explanations,
        highlights,
    )
}

/// Per dimension, the technology with the maximum score is the leader only
/// when it beats the runner-up by at least the configured lead.
fn identify_highlights(
    profiles: &[TechProfile],
    dimensions: &[String],
    scores: &[Vec<f64>],
    config: &ScoringConfig,
) -> SmallVec4<TradeoffHighlight> {
    let lead_threshold = config.effective_highlight_lead();
    let mut highlights = SmallVec4::new();

    for (dim_idx, dimension) in dimensions.iter().enumerate() {
        let column: Vec<f64> = scores.iter().map(|row| row[dim_idx]).collect();

        let Some((leader_idx, &max_score)) = column
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        else {
            continue;
        };

        let runner_up = column
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != leader_idx)
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        if !runner_up.is_finite() || max_score - runner_up < lead_threshold {
            continue;
        }

        let leader = &profiles[leader_idx];
        let explanation = leader
            .dimensions
            .get(dimension)
            .map(|cell| cell.explanation.clone())
            .unwrap_or_else(|| {
                format!("Leads in {dimension} with score of {max_score:.1}")
            });

        highlights.push(TradeoffHighlight {
            dimension: dimension.clone(),
            leader: leader.name.clone(),
            explanation,
        });
    }

    highlights
}
