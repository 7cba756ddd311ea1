//! Project requirement inputs: the five categorical constraint fields.

use serde::{Deserialize, Serialize};

/// Budget constraint level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

/// Timeline constraint level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Tight,
    Moderate,
    Flexible,
}

/// Scalability requirement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Small,
    Medium,
    Large,
}

/// Team expertise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expertise {
    Beginner,
    Intermediate,
    Expert,
}

/// Project requirements and constraints. Created once per request; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequirements {
    /// Number of team members (>= 1).
    pub team_size: u32,
    pub budget: Budget,
    pub timeline: Timeline,
    pub scalability_needs: Scale,
    pub expertise_level: Expertise,
}

impl Default for ProjectRequirements {
    /// The neutral request: medium budget, moderate timeline, medium scale,
    /// intermediate expertise, three people.
    fn default() -> Self {
        Self {
            team_size: 3,
            budget: Budget::Medium,
            timeline: Timeline::Moderate,
            scalability_needs: Scale::Medium,
            expertise_level: Expertise::Intermediate,
        }
    }
}
