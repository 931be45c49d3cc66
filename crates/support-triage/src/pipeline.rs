//! The five-stage triage pipeline

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    composer::ResponseComposer,
    config::TriageConfig,
    error::{Result, TriageError},
    extractor::FieldExtractor,
    models::PipelineResult,
    scorer::CategoryScorer,
    selector::CategorySelector,
    summarizer::IntentSummarizer,
};

/// Runs summarize → score → select → extract → compose over a query.
///
/// Holds no mutable state, so one pipeline can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct TriagePipeline {
    summarizer: IntentSummarizer,
    scorer: CategoryScorer,
    selector: CategorySelector,
    extractor: FieldExtractor,
    composer: ResponseComposer,
}

impl TriagePipeline {
    /// Create a pipeline with the given presentation settings
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            summarizer: IntentSummarizer::new(),
            scorer: CategoryScorer::new(),
            selector: CategorySelector::new(),
            extractor: FieldExtractor::new(),
            composer: ResponseComposer::new(config),
        }
    }

    /// Triage a query. Every string, including the empty one, has a result.
    pub fn run(&self, query: &str) -> PipelineResult {
        let intent_summary = self.summarizer.summarize(query);
        let ranked_categories = self.scorer.rank(query);
        let category = self.selector.select(&ranked_categories, query);
        let extraction = self.extractor.extract(query, category);
        let response = self.composer.compose(category, &extraction, &intent_summary);

        debug!(
            category = %category,
            candidates = ranked_categories.len(),
            missing = extraction.missing.len(),
            "triaged query"
        );
        PipelineResult {
            intent_summary,
            ranked_categories,
            category,
            extraction,
            response,
        }
    }

    /// Triage an untyped query value from a host program.
    ///
    /// Fails with [`TriageError::InvalidInputType`] before any stage runs when
    /// `input` is not a JSON string.
    pub fn handle(&self, input: &Value) -> Result<PipelineResult> {
        match input {
            Value::String(query) => Ok(self.run(query)),
            other => {
                let err = TriageError::invalid_input(other);
                warn!(error = %err, "rejected query");
                Err(err)
            }
        }
    }
}
