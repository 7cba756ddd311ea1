//! Request validation errors.

use super::error_code::{self, ArbiterErrorCode};

/// Errors for malformed or out-of-range request fields. These are rejected
/// before any processing starts.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("at least 2 technologies are required, got {count}")]
    TooFewTechnologies { count: usize },

    #[error("at most 5 technologies can be compared, got {count}")]
    TooManyTechnologies { count: usize },

    #[error("technology name at position {position} is blank")]
    BlankTechnology { position: usize },

    #[error("duplicate technology after trimming: {name}")]
    DuplicateTechnology { name: String },

    #[error("team size must be between 1 and 1000, got {team_size}")]
    InvalidTeamSize { team_size: u32 },

    #[error("custom dimension at position {position} is blank")]
    BlankCustomDimension { position: usize },

    #[error("custom dimension '{name}' collides with a standard dimension")]
    CustomDimensionCollision { name: String },

    #[error("duplicate custom dimension: {name}")]
    DuplicateCustomDimension { name: String },

    #[error("max_technologies must be between 2 and 5, got {max}")]
    InvalidMaxTechnologies { max: usize },
}

impl ArbiterErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
