//! ArbiterErrorCode trait for structured error codes.

/// Trait for converting Arbiter errors to structured error codes.
/// Every error enum implements this so callers embedding the engine can
/// branch on a stable string instead of parsing messages.
pub trait ArbiterErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFLICTING_REQUIREMENTS: &str = "CONFLICTING_REQUIREMENTS";
pub const WEIGHT_ERROR: &str = "WEIGHT_ERROR";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const COMPUTATION_ERROR: &str = "COMPUTATION_ERROR";
pub const COMPARISON_ERROR: &str = "COMPARISON_ERROR";
pub const UNKNOWN_TECHNOLOGY: &str = "UNKNOWN_TECHNOLOGY";
