//! Read-only knowledge store with layered lookup.

use rustc_hash::FxHashMap;
use tracing::debug;

use arbiter_core::errors::KnowledgeError;
use arbiter_core::types::TechProfile;

use super::catalog;
use super::fallback;
use super::matching;

/// Maximum suggestions returned for an unknown name.
const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity for a fuzzy suggestion.
const SUGGESTION_CUTOFF: f64 = 0.3;

/// The technology knowledge base. Built once, queried read-only; safe to
/// share across concurrent comparison requests.
pub struct KnowledgeStore {
    profiles: FxHashMap<String, TechProfile>,
    /// Insertion order of the catalog, for deterministic iteration.
    names: Vec<String>,
}

impl KnowledgeStore {
    /// Build the store from the seeded catalog.
    pub fn new() -> Self {
        Self::from_profiles(catalog::seed_profiles())
    }

    /// Build a store from explicit profiles (used by tests and embedders
    /// with their own catalogs).
    pub fn from_profiles(entries: Vec<TechProfile>) -> Self {
        let names: Vec<String> = entries.iter().map(|p| p.name.clone()).collect();
        let profiles = entries.into_iter().map(|p| (p.name.clone(), p)).collect();
        Self { profiles, names }
    }

    /// Layered lookup: exact, case-insensitive, substring either way,
    /// abbreviation. Blank input never matches.
    pub fn lookup(&self, name: &str) -> Option<&TechProfile> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(profile) = self.profiles.get(trimmed) {
            return Some(profile);
        }

        let input_lower = trimmed.to_lowercase();
        for known in &self.names {
            if known.to_lowercase() == input_lower {
                return self.profiles.get(known);
            }
        }

        for known in &self.names {
            let known_lower = known.to_lowercase();
            if known_lower.contains(&input_lower) || input_lower.contains(&known_lower) {
                return self.profiles.get(known);
            }
            if matching::is_abbreviation_match(&input_lower, &known_lower) {
                return self.profiles.get(known);
            }
        }

        None
    }

    /// Lookup with fallback synthesis. A miss yields a generic neutral
    /// profile; only a blank name is unrecoverable.
    pub fn lookup_or_fallback(&self, name: &str) -> Result<TechProfile, KnowledgeError> {
        if let Some(profile) = self.lookup(name) {
            return Ok(profile.clone());
        }

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(KnowledgeError::UnknownTechnology {
                name: name.to_string(),
                suggestions: Vec::new(),
            });
        }

        debug!(technology = trimmed, "synthesizing fallback profile");
        Ok(fallback::synthesize_profile(trimmed))
    }

    /// Is the name a direct catalog key?
    pub fn is_known(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// All catalog names in insertion order.
    pub fn known_technologies(&self) -> &[String] {
        &self.names
    }

    /// Catalog names in the given category.
    pub fn technologies_in_category(&self, category: &str) -> Vec<&str> {
        self.names
            .iter()
            .filter(|name| {
                self.profiles
                    .get(*name)
                    .is_some_and(|p| p.category == category)
            })
            .map(String::as_str)
            .collect()
    }

    /// All distinct categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in &self.names {
            if let Some(profile) = self.profiles.get(name) {
                if !seen.contains(&profile.category.as_str()) {
                    seen.push(profile.category.as_str());
                }
            }
        }
        seen
    }

    /// Up to 5 known names similar to `name`, best first.
    ///
    /// Fuzzy similarity over the catalog with a 0.3 cutoff; when nothing
    /// clears the cutoff, falls back to substring/abbreviation partials.
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|known| (matching::similarity(trimmed, known), known))
            .filter(|(sim, _)| *sim >= SUGGESTION_CUTOFF)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        if !scored.is_empty() {
            return scored
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|(_, name)| name.clone())
                .collect();
        }

        let input_lower = trimmed.to_lowercase();
        self.names
            .iter()
            .filter(|known| matching::is_partial_match(&input_lower, &known.to_lowercase()))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Completeness check for a catalog entry (resolved via `lookup`).
    pub fn validate_profile(&self, name: &str) -> (bool, Vec<String>) {
        match self.lookup(name) {
            Some(profile) => {
                let issues = profile.completeness_issues();
                (issues.is_empty(), issues)
            }
            None => (false, vec![format!("technology '{name}' not found")]),
        }
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}
