//! Arbiter comparison engine.
//!
//! Turns qualitative project constraints plus a static technology knowledge
//! base into a ranked, explained recommendation report.
//!
//! Dependency chain: Knowledge → Weights → Scoring → (Comparison ∥ Recommend)
//! with `pipeline` orchestrating end to end.

pub mod comparison;
pub mod knowledge;
pub mod pipeline;
pub mod recommend;
pub mod scoring;
pub mod weights;
