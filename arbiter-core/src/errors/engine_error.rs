//! Top-level engine error: everything the end-to-end pipeline can surface.

use super::comparison_error::ComparisonError;
use super::error_code::{self, ArbiterErrorCode};
use super::knowledge_error::KnowledgeError;
use super::request_error::RequestError;
use super::weight_error::WeightError;

/// Any failure of the end-to-end comparison pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Weight(#[from] WeightError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ArbiterErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(inner) => inner.error_code(),
            Self::Weight(inner) => inner.error_code(),
            Self::Comparison(inner) => inner.error_code(),
            Self::Knowledge(inner) => inner.error_code(),
            Self::Serialize(_) => error_code::COMPUTATION_ERROR,
        }
    }
}
