//! Conflicting-requirement detection.
//!
//! Five hand-tuned rules over constraint combinations. Conflicts are
//! advisory: they do not block processing unless the caller uses the strict
//! entry point.

use serde::Serialize;

use arbiter_core::types::{Budget, Expertise, ProjectRequirements, Scale, Timeline};

/// Detect conflicting requirement combinations.
///
/// Returns human-readable descriptions, empty when the requirements are
/// coherent.
pub fn detect_conflicts(requirements: &ProjectRequirements) -> Vec<String> {
    let mut conflicts = Vec::new();

    // Rule 1: low budget + large scale + tight timeline.
    if requirements.budget == Budget::Low
        && requirements.scalability_needs == Scale::Large
        && requirements.timeline == Timeline::Tight
    {
        conflicts.push(
            "Low budget, large scalability needs, and tight timeline create competing priorities"
                .to_string(),
        );
    }

    // Rule 2: beginner expertise + tight timeline + large scale.
    if requirements.expertise_level == Expertise::Beginner
        && requirements.timeline == Timeline::Tight
        && requirements.scalability_needs == Scale::Large
    {
        conflicts.push(
            "Beginner expertise with tight timeline and large scale requirements may be unrealistic"
                .to_string(),
        );
    }

    // Rule 3: low budget + large expert team.
    if requirements.budget == Budget::Low
        && requirements.expertise_level == Expertise::Expert
        && requirements.team_size >= 5
    {
        conflicts.push(
            "Low budget with large expert team suggests potential resource mismatch".to_string(),
        );
    }

    // Rule 4: small scale + large team.
    if requirements.scalability_needs == Scale::Small && requirements.team_size >= 8 {
        conflicts.push(
            "Small scalability needs with large team may lead to over-engineering".to_string(),
        );
    }

    // Rule 5: high budget + tight timeline + beginner team.
    if requirements.budget == Budget::High
        && requirements.timeline == Timeline::Tight
        && requirements.expertise_level == Expertise::Beginner
    {
        conflicts.push(
            "High budget with tight timeline and beginner team may indicate poor planning"
                .to_string(),
        );
    }

    conflicts
}

/// Conflict analysis with resolution suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictReport {
    pub has_conflicts: bool,
    pub conflicts: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Build a conflict report with suggestions keyed off the detected
/// conflict phrasing.
pub fn conflict_report(requirements: &ProjectRequirements) -> ConflictReport {
    let conflicts = detect_conflicts(requirements);
    if conflicts.is_empty() {
        return ConflictReport {
            has_conflicts: false,
            conflicts,
            suggestions: Vec::new(),
        };
    }

    let mut suggestions = Vec::new();
    let mentions = |needle: &str| conflicts.iter().any(|c| c.to_lowercase().contains(needle));

    if mentions("competing priorities") {
        suggestions.push(
            "Consider relaxing one constraint: increase budget, extend timeline, or reduce scale requirements"
                .to_string(),
        );
    }
    if mentions("beginner expertise") {
        suggestions.push(
            "Consider adding experienced team members or extending timeline for learning"
                .to_string(),
        );
    }
    if mentions("resource mismatch") {
        suggestions.push(
            "Re-evaluate budget allocation or team composition for better alignment".to_string(),
        );
    }
    if mentions("over-engineering") {
        suggestions.push(
            "Consider reducing team size or increasing scalability requirements to match effort"
                .to_string(),
        );
    }
    if mentions("poor planning") {
        suggestions.push(
            "Review project planning: tight timelines typically require experienced teams"
                .to_string(),
        );
    }

    ConflictReport {
        has_conflicts: true,
        conflicts,
        suggestions,
    }
}
