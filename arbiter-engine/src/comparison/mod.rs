//! Comparison orchestration: trade-off matrices, highlights, and
//! side-by-side data across 2-5 technologies.

pub mod engine;
pub mod matrix;

pub use engine::{Comparison, ComparisonEngine};
