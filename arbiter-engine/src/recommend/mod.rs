//! Recommendation generation: ranking, confidence, decision factors,
//! caveats, and what-if scenarios.

pub mod confidence;
pub mod engine;
pub mod scenarios;

pub use engine::RecommendationEngine;
