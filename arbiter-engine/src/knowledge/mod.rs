//! Technology knowledge base: seeded profiles, lookup, fuzzy suggestion,
//! and fallback-profile synthesis.
//!
//! The catalog is built once at store construction and is read-only
//! afterwards, so a store shared across comparison requests needs no
//! synchronization.

pub mod catalog;
pub mod fallback;
pub mod matching;
pub mod store;

pub use store::KnowledgeStore;
