//! Error taxonomy for the comparison engine.
//!
//! One enum per domain. Policy: graceful degradation (neutral scores,
//! fallback profiles, reduced feature sets) is preferred over aborting;
//! only malformed input or fewer than two usable technologies is a hard
//! failure.

pub mod comparison_error;
pub mod engine_error;
pub mod error_code;
pub mod knowledge_error;
pub mod request_error;
pub mod weight_error;

pub use comparison_error::ComparisonError;
pub use engine_error::EngineError;
pub use error_code::ArbiterErrorCode;
pub use knowledge_error::KnowledgeError;
pub use request_error::RequestError;
pub use weight_error::WeightError;
