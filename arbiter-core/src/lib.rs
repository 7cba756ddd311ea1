//! Core types, traits, errors, config, and constants for the Arbiter
//! technology comparison engine.
//!
//! This crate carries no business logic. The weight calculation, scoring,
//! and recommendation engines live in `arbiter-engine`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
