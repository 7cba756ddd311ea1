//! End-to-end pipeline: request → resolved profiles → criteria →
//! comparison → recommendation → report.
//!
//! Single-threaded and purely computational. The knowledge store is the
//! only shared state and is read-only after construction.

use tracing::{debug, info, instrument, warn};

use arbiter_core::config::EngineConfig;
use arbiter_core::errors::EngineError;
use arbiter_core::types::{
    ComparisonReport, ComparisonRequest, TechProfile, WeightedCriteria,
};

use crate::comparison::ComparisonEngine;
use crate::knowledge::KnowledgeStore;
use crate::recommend::RecommendationEngine;
use crate::weights::{conflicts, WeightCalculator};

/// The full comparison pipeline.
pub struct Pipeline {
    store: KnowledgeStore,
    calculator: WeightCalculator,
    comparison: ComparisonEngine,
    recommender: RecommendationEngine,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            store: KnowledgeStore::new(),
            calculator: WeightCalculator::new(),
            comparison: ComparisonEngine::new(config.scoring.clone()),
            recommender: RecommendationEngine::new(config.recommend, config.scoring),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Read-only access to the knowledge store, for suggestion lookups and
    /// catalog listings by the embedding layer.
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Run the pipeline strictly: conflicting requirements abort with
    /// `WeightError::ConflictingRequirements`.
    pub fn run(&self, request: &ComparisonRequest) -> Result<ComparisonReport, EngineError> {
        self.execute(request, false)
    }

    /// Run the pipeline proceeding past requirement conflicts; detected
    /// conflicts are copied into the report's warnings instead.
    pub fn run_lenient(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonReport, EngineError> {
        self.execute(request, true)
    }

    /// Reduced-fidelity fallback: same request with custom dimensions
    /// stripped, for callers recovering from `InsufficientData`.
    pub fn run_reduced(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonReport, EngineError> {
        let mut reduced = request.clone();
        reduced.custom_dimensions = None;
        self.execute(&reduced, true)
    }

    /// Run strictly and serialize the report for the rendering layer.
    pub fn run_json(&self, request: &ComparisonRequest) -> Result<String, EngineError> {
        let report = self.run(request)?;
        Ok(serde_json::to_string_pretty(&report)?)
    }

    #[instrument(skip_all, fields(technologies = request.technologies.len()))]
    fn execute(
        &self,
        request: &ComparisonRequest,
        proceed_on_conflict: bool,
    ) -> Result<ComparisonReport, EngineError> {
        request.validate()?;
        let mut warnings = Vec::new();

        let mut names = request.trimmed_technologies();
        let max = request.output_preferences.max_technologies;
        if names.len() > max {
            warn!(
                requested = names.len(),
                max, "truncating technology list to configured maximum"
            );
            warnings.push(format!(
                "Only the first {max} technologies were compared; the rest were dropped"
            ));
            names.truncate(max);
        }

        let profiles = self.resolve_profiles(&names, &mut warnings)?;
        let criteria = self.derive_criteria(request, proceed_on_conflict, &mut warnings)?;

        let comparison = self.comparison.generate_comparison(
            &profiles,
            &criteria,
            request.custom_dimensions.as_deref(),
        )?;

        let recommendation = if request.output_preferences.include_recommendation {
            Some(self.recommender.generate_recommendation(
                &profiles,
                &comparison.compatibility_scores,
                &criteria,
            )?)
        } else {
            None
        };

        info!(
            technologies = comparison.technologies.len(),
            warnings = warnings.len(),
            "comparison pipeline complete"
        );

        Ok(ComparisonReport {
            technologies: comparison.technologies,
            comparison_data: comparison.comparison_data,
            tradeoff_matrix: request
                .output_preferences
                .include_matrix
                .then_some(comparison.tradeoff_matrix),
            compatibility_scores: comparison.compatibility_scores,
            weighted_criteria: criteria,
            recommendation,
            warnings,
        })
    }

    /// Resolve every requested name to a profile, synthesizing fallbacks
    /// for unknowns and recording suggestion warnings.
    fn resolve_profiles(
        &self,
        names: &[String],
        warnings: &mut Vec<String>,
    ) -> Result<Vec<TechProfile>, EngineError> {
        let mut profiles = Vec::with_capacity(names.len());

        for name in names {
            if self.store.lookup(name).is_none() {
                let suggestions = self.store.suggest(name);
                let mut warning =
                    format!("No knowledge base entry for '{name}'; using a generic profile");
                if !suggestions.is_empty() {
                    warning.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
                }
                warnings.push(warning);
            }
            profiles.push(self.store.lookup_or_fallback(name)?);
        }

        Ok(profiles)
    }

    fn derive_criteria(
        &self,
        request: &ComparisonRequest,
        proceed_on_conflict: bool,
        warnings: &mut Vec<String>,
    ) -> Result<WeightedCriteria, EngineError> {
        if !proceed_on_conflict {
            return Ok(self.calculator.criteria(&request.requirements)?);
        }

        let detected = conflicts::detect_conflicts(&request.requirements);
        if !detected.is_empty() {
            debug!(conflicts = detected.len(), "proceeding past requirement conflicts");
            for conflict in &detected {
                warnings.push(format!("Requirement conflict: {conflict}"));
            }
        }
        Ok(self.calculator.criteria_unchecked(&request.requirements)?)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
