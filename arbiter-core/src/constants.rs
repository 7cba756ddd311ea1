//! Shared constants: dimension names, score ranges, weight bounds.

/// The five standard evaluation dimensions, in canonical order.
pub const STANDARD_DIMENSIONS: [&str; 5] =
    ["cost", "scalability", "complexity", "ecosystem", "performance"];

/// Dimension scores on technology profiles are 0-5.
pub const MAX_DIMENSION_SCORE: f64 = 5.0;

/// Neutral dimension score used for synthesized fallback profiles.
pub const NEUTRAL_DIMENSION_SCORE: f64 = 3.0;

/// Base weight assigned to every dimension before requirement boosts.
pub const BASE_DIMENSION_WEIGHT: f64 = 0.2;

/// Minimum viable weight for any dimension after rebalancing.
pub const MIN_DIMENSION_WEIGHT: f64 = 0.05;

/// No single dimension may exceed this weight after rebalancing.
pub const MAX_DIMENSION_WEIGHT: f64 = 0.6;

/// Weight sums within this tolerance of 1.0 are accepted.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.05;

/// Comparison cardinality bounds.
pub const MIN_TECHNOLOGIES: usize = 2;
pub const MAX_TECHNOLOGIES: usize = 5;

/// Total dimension count (standard + custom) allowed in one matrix.
pub const MAX_MATRIX_DIMENSIONS: usize = 10;

/// Requirements validation rejects team sizes above this sanity bound.
pub const MAX_TEAM_SIZE: u32 = 1000;

/// Returns true if `name` is one of the five standard dimensions.
pub fn is_standard_dimension(name: &str) -> bool {
    STANDARD_DIMENSIONS.contains(&name)
}
