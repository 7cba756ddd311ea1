//! Weight calculation errors.

use super::error_code::{self, ArbiterErrorCode};

/// Errors raised while deriving weighted criteria from requirements.
///
/// `ConflictingRequirements` is detected before computation and is
/// advisory: callers may re-run through the unchecked entry point and carry
/// the conflict descriptions forward as warnings instead.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("conflicting requirements detected: {}", .conflicts.join("; "))]
    ConflictingRequirements { conflicts: Vec<String> },

    #[error("dimension '{dimension}' has weight {weight:.3}, outside [0, 1]")]
    WeightOutOfRange { dimension: String, weight: f64 },

    #[error("weights sum to {sum:.3}, expected 1.0 within ±0.05")]
    BadWeightSum { sum: f64 },

    #[error(
        "dimension '{dimension}' has excessive weight ({weight:.1}%); \
         no single dimension may exceed 60% of the total"
    )]
    DominantDimension { dimension: String, weight: f64 },

    #[error(
        "dimension '{dimension}' has insufficient weight ({weight:.1}%); \
         every dimension needs at least 5% for a meaningful comparison"
    )]
    StarvedDimension { dimension: String, weight: f64 },

    #[error("missing required dimension in weights: {dimension}")]
    MissingDimension { dimension: String },
}

impl ArbiterErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConflictingRequirements { .. } => error_code::CONFLICTING_REQUIREMENTS,
            _ => error_code::WEIGHT_ERROR,
        }
    }
}
