//! Fallback-profile synthesis for technologies outside the catalog.

use arbiter_core::constants::{NEUTRAL_DIMENSION_SCORE, STANDARD_DIMENSIONS};
use arbiter_core::types::{DimensionScore, Maturity, TechMetadata, TechProfile};

struct CategoryRule {
    category: &'static str,
    keywords: &'static [&'static str],
}

/// Keyword heuristics for guessing a category from a technology name.
/// First rule with any keyword hit wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Database",
        keywords: &["db", "database", "sql", "mongo", "redis", "elastic"],
    },
    CategoryRule {
        category: "API",
        keywords: &["api", "rest", "graphql", "grpc"],
    },
    CategoryRule {
        category: "Cloud Service",
        keywords: &["aws", "azure", "gcp", "cloud", "lambda", "function"],
    },
    CategoryRule {
        category: "Frontend Framework",
        keywords: &["react", "vue", "angular", "svelte", "frontend", "ui"],
    },
    CategoryRule {
        category: "Backend Framework",
        keywords: &["express", "django", "flask", "spring", "fastapi"],
    },
];

/// Guess a category from name patterns. Defaults to "Technology".
pub fn guess_category(name: &str) -> &'static str {
    let name_lower = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| name_lower.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or("Technology")
}

/// Synthesize a generic profile for an unknown technology: all five standard
/// dimensions at the neutral score with no-data explanations, maturity
/// assumed stable.
pub fn synthesize_profile(name: &str) -> TechProfile {
    let category = guess_category(name);

    let dimensions = STANDARD_DIMENSIONS
        .iter()
        .map(|dim| {
            (
                dim.to_string(),
                DimensionScore::new(
                    NEUTRAL_DIMENSION_SCORE,
                    format!("No specific {dim} data available for {name}"),
                ),
            )
        })
        .collect();

    TechProfile {
        name: name.to_string(),
        category: category.to_string(),
        dimensions,
        pros: vec![format!("Technology choice for {} needs", category.to_lowercase())],
        cons: vec!["Limited analysis data available".to_string()],
        best_for: vec![format!(
            "Projects requiring {} solutions",
            category.to_lowercase()
        )],
        metadata: TechMetadata {
            maturity: Maturity::Stable,
            license: "Unknown".to_string(),
            maintainer: "Unknown".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_guessing() {
        assert_eq!(guess_category("CockroachDB"), "Database");
        assert_eq!(guess_category("My REST Gateway"), "API");
        assert_eq!(guess_category("Azure Functions"), "Cloud Service");
        assert_eq!(guess_category("SvelteKit"), "Frontend Framework");
        assert_eq!(guess_category("FastAPI"), "Backend Framework");
        assert_eq!(guess_category("Foobar123"), "Technology");
    }

    #[test]
    fn test_synthesized_profile_is_neutral_and_complete() {
        let profile = synthesize_profile("Foobar123");
        assert_eq!(profile.category, "Technology");
        assert_eq!(profile.dimensions.len(), 5);
        for dim in STANDARD_DIMENSIONS {
            let score = profile.dimensions.get(dim).expect("dimension present");
            assert_eq!(score.score, NEUTRAL_DIMENSION_SCORE);
            assert!(score.explanation.contains("No specific"));
        }
        assert_eq!(profile.metadata.maturity, Maturity::Stable);
        assert!(profile.is_complete());
    }
}
