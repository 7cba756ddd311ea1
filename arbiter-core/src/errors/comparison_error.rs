//! Comparison and matrix errors.

use super::error_code::{self, ArbiterErrorCode};

/// Errors raised while generating a comparison.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error(
        "{lacking} of {total} technologies have insufficient dimension data \
         for a meaningful comparison"
    )]
    InsufficientData { lacking: usize, total: usize },

    #[error("comparison requires between 2 and 5 technologies, got {count}")]
    BadTechnologyCount { count: usize },

    #[error("weighted criteria must contain dimension weights")]
    EmptyWeights,

    #[error("at most 10 dimensions can be compared, got {count}")]
    TooManyDimensions { count: usize },

    #[error("custom dimension '{name}' duplicates a standard dimension")]
    DimensionCollision { name: String },

    #[error("trade-off matrix shape mismatch: {detail}")]
    MatrixShape { detail: String },

    #[error("recommendation requires one compatibility score per technology ({scores} scores for {technologies} technologies)")]
    ScoreCountMismatch {
        scores: usize,
        technologies: usize,
    },
}

impl ArbiterErrorCode for ComparisonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            _ => error_code::COMPARISON_ERROR,
        }
    }
}
