//! Input-contract types: the validated comparison request handed over by the
//! (external) argument-parsing layer.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TEAM_SIZE, MAX_TECHNOLOGIES, MIN_TECHNOLOGIES, STANDARD_DIMENSIONS};
use crate::errors::RequestError;

use super::requirements::ProjectRequirements;

/// Output shaping preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub include_matrix: bool,
    pub include_recommendation: bool,
    /// Upper bound on compared technologies, in [2, 5].
    pub max_technologies: usize,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            include_matrix: true,
            include_recommendation: true,
            max_technologies: MAX_TECHNOLOGIES,
        }
    }
}

/// A technology comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// 2-5 technology names, case-sensitive, unique after trimming.
    pub technologies: Vec<String>,
    pub requirements: ProjectRequirements,
    /// Extra comparison axes beyond the standard five.
    pub custom_dimensions: Option<Vec<String>>,
    #[serde(default)]
    pub output_preferences: OutputPreferences,
}

impl ComparisonRequest {
    /// Validate the request before any processing.
    ///
    /// Checks technology cardinality and uniqueness, requirement field
    /// ranges, custom-dimension rules (non-blank, pairwise unique,
    /// no case-insensitive collision with the standard five), and output
    /// preference bounds.
    pub fn validate(&self) -> Result<(), RequestError> {
        let trimmed: Vec<&str> = self.technologies.iter().map(|t| t.trim()).collect();

        if let Some(blank) = trimmed.iter().position(|t| t.is_empty()) {
            return Err(RequestError::BlankTechnology { position: blank });
        }
        if trimmed.len() < MIN_TECHNOLOGIES {
            return Err(RequestError::TooFewTechnologies { count: trimmed.len() });
        }
        if trimmed.len() > MAX_TECHNOLOGIES {
            return Err(RequestError::TooManyTechnologies { count: trimmed.len() });
        }
        for (i, name) in trimmed.iter().enumerate() {
            if trimmed[..i].contains(name) {
                return Err(RequestError::DuplicateTechnology {
                    name: name.to_string(),
                });
            }
        }

        if self.requirements.team_size < 1 {
            return Err(RequestError::InvalidTeamSize {
                team_size: self.requirements.team_size,
            });
        }
        if self.requirements.team_size > MAX_TEAM_SIZE {
            return Err(RequestError::InvalidTeamSize {
                team_size: self.requirements.team_size,
            });
        }

        if let Some(customs) = &self.custom_dimensions {
            for (i, dim) in customs.iter().enumerate() {
                let dim = dim.trim();
                if dim.is_empty() {
                    return Err(RequestError::BlankCustomDimension { position: i });
                }
                let lower = dim.to_lowercase();
                if STANDARD_DIMENSIONS.contains(&lower.as_str()) {
                    return Err(RequestError::CustomDimensionCollision {
                        name: dim.to_string(),
                    });
                }
                if customs[..i].iter().any(|prev| prev.trim() == dim) {
                    return Err(RequestError::DuplicateCustomDimension {
                        name: dim.to_string(),
                    });
                }
            }
        }

        let max = self.output_preferences.max_technologies;
        if !(MIN_TECHNOLOGIES..=MAX_TECHNOLOGIES).contains(&max) {
            return Err(RequestError::InvalidMaxTechnologies { max });
        }

        Ok(())
    }

    /// Trimmed technology names in request order.
    pub fn trimmed_technologies(&self) -> Vec<String> {
        self.technologies
            .iter()
            .map(|t| t.trim().to_string())
            .collect()
    }
}
