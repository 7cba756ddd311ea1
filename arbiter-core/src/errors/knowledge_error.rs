//! Knowledge store errors.

use super::error_code::{self, ArbiterErrorCode};

/// Errors raised by knowledge store lookups.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error(
        "technology '{name}' not found in the knowledge base{}",
        format_suggestions(.suggestions)
    )]
    UnknownTechnology {
        name: String,
        /// Up to 5 fuzzy-matched alternatives, best first.
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

impl ArbiterErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_TECHNOLOGY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_technology_message_includes_suggestions() {
        let err = KnowledgeError::UnknownTechnology {
            name: "Reakt".to_string(),
            suggestions: vec!["React".to_string(), "REST".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Reakt"));
        assert!(msg.contains("Did you mean: React, REST?"));
        assert_eq!(err.error_code(), "UNKNOWN_TECHNOLOGY");
    }

    #[test]
    fn test_unknown_technology_message_without_suggestions() {
        let err = KnowledgeError::UnknownTechnology {
            name: "Foobar123".to_string(),
            suggestions: Vec::new(),
        };
        assert!(!err.to_string().contains("Did you mean"));
    }
}
