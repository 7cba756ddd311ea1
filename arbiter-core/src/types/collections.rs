//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for highlight lists (usually <4 per comparison).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for ranked choices and per-comparison profiles (max 5).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// Dimension name → value map keyed by the standard five plus customs.
pub type DimensionMap<T> = FxHashMap<String, T>;
