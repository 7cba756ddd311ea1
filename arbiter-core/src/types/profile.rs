//! Technology profiles: per-dimension scores, pros/cons, metadata.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DIMENSION_SCORE, STANDARD_DIMENSIONS};

use super::collections::DimensionMap;

/// Technology maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    Experimental,
    Stable,
    Mature,
}

/// Score for a single dimension with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Numerical score, 0-5.
    pub score: f64,
    /// Reasoning behind the score. Never empty on catalog profiles.
    pub explanation: String,
}

impl DimensionScore {
    pub fn new(score: f64, explanation: impl Into<String>) -> Self {
        Self {
            score,
            explanation: explanation.into(),
        }
    }
}

/// Metadata about a technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechMetadata {
    pub maturity: Maturity,
    pub license: String,
    pub maintainer: String,
}

/// Complete profile of a technology. Immutable once constructed; owned by
/// the knowledge store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechProfile {
    /// Unique key within the knowledge store.
    pub name: String,
    pub category: String,
    /// Dimension name → score. Catalog profiles always carry the five
    /// standard dimensions; synthesized fallbacks do too.
    pub dimensions: DimensionMap<DimensionScore>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: Vec<String>,
    pub metadata: TechMetadata,
}

impl TechProfile {
    /// Completeness check: all five standard dimensions present with in-range
    /// scores and non-empty explanations, and pros/cons/best_for non-empty.
    ///
    /// Returns the list of issues found (empty = complete).
    pub fn completeness_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for required in STANDARD_DIMENSIONS {
            if !self.dimensions.contains_key(required) {
                issues.push(format!("missing dimension: {required}"));
            }
        }

        for (name, dim) in &self.dimensions {
            if !(0.0..=MAX_DIMENSION_SCORE).contains(&dim.score) {
                issues.push(format!(
                    "invalid score for {name}: {} (must be 0-{MAX_DIMENSION_SCORE})",
                    dim.score
                ));
            }
            if dim.explanation.trim().is_empty() {
                issues.push(format!("empty explanation for {name}"));
            }
        }

        if self.pros.is_empty() {
            issues.push("no pros listed".to_string());
        }
        if self.cons.is_empty() {
            issues.push("no cons listed".to_string());
        }
        if self.best_for.is_empty() {
            issues.push("no best_for scenarios listed".to_string());
        }

        issues
    }

    pub fn is_complete(&self) -> bool {
        self.completeness_issues().is_empty()
    }

    /// Number of dimensions this profile has real data for.
    pub fn known_dimension_count(&self) -> usize {
        self.dimensions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(dimensions: &[(&str, f64)]) -> TechProfile {
        let dims = dimensions
            .iter()
            .map(|(name, score)| {
                (
                    name.to_string(),
                    DimensionScore::new(*score, format!("{name} rationale")),
                )
            })
            .collect();
        TechProfile {
            name: "Sample".to_string(),
            category: "Technology".to_string(),
            dimensions: dims,
            pros: vec!["a pro".to_string()],
            cons: vec!["a con".to_string()],
            best_for: vec!["a use case".to_string()],
            metadata: TechMetadata {
                maturity: Maturity::Stable,
                license: "MIT".to_string(),
                maintainer: "Someone".to_string(),
            },
        }
    }

    #[test]
    fn test_complete_profile() {
        let profile = make_profile(&[
            ("cost", 4.0),
            ("scalability", 3.0),
            ("complexity", 2.0),
            ("ecosystem", 5.0),
            ("performance", 3.5),
        ]);
        assert!(profile.is_complete(), "issues: {:?}", profile.completeness_issues());
    }

    #[test]
    fn test_missing_dimension_reported() {
        let profile = make_profile(&[("cost", 4.0), ("scalability", 3.0)]);
        let issues = profile.completeness_issues();
        assert!(issues.iter().any(|i| i.contains("complexity")));
        assert!(issues.iter().any(|i| i.contains("performance")));
    }

    #[test]
    fn test_out_of_range_score_reported() {
        let mut profile = make_profile(&[
            ("cost", 6.5),
            ("scalability", 3.0),
            ("complexity", 2.0),
            ("ecosystem", 5.0),
            ("performance", 3.5),
        ]);
        profile.pros.clear();
        let issues = profile.completeness_issues();
        assert!(issues.iter().any(|i| i.contains("invalid score for cost")));
        assert!(issues.iter().any(|i| i.contains("no pros")));
    }
}
