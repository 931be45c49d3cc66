#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Support Triage
//!
//! Routes a free-text customer-support query to one of eight intent
//! categories, pulls the fields that category needs out of the text, and
//! drafts a short reply asking for whatever is still missing.
//!
//! ## Pipeline
//!
//! - **Intent Summarizer**: one-sentence paraphrase of the request
//! - **Category Scorer**: keyword hit counts, ranked, never empty
//! - **Category Selector**: top-ranked category, falling back to General Information
//! - **Field Extractor**: heuristic matchers resolved against the category's required fields
//! - **Response Composer**: per-category template, signature and interpretation footer
//!
//! Every stage is a pure function of the query and the static tables in
//! [`catalog`], so identical queries always produce identical results.
//!
//! ## Example
//!
//! ```
//! use support_triage::{Category, TriagePipeline};
//!
//! let result = TriagePipeline::default().run("I lost my debit card ending 4321, please block it");
//! assert_eq!(result.category, Category::CardServices);
//! assert_eq!(result.extraction.value("card_last4"), Some("4321"));
//! ```

pub mod catalog;
pub mod composer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod scorer;
pub mod selector;
pub mod summarizer;

use once_cell::sync::Lazy;

pub use catalog::{CategoryProfile, FieldSource, ResponseTemplate, ScratchKey};
pub use composer::ResponseComposer;
pub use config::TriageConfig;
pub use error::{Result, TriageError};
pub use extractor::{FieldExtractor, ScratchPool};
pub use models::{Category, ExtractionResult, PipelineResult, ScoreTable};
pub use pipeline::TriagePipeline;
pub use scorer::CategoryScorer;
pub use selector::CategorySelector;
pub use summarizer::IntentSummarizer;

static DEFAULT_PIPELINE: Lazy<TriagePipeline> = Lazy::new(TriagePipeline::default);

/// Triage an untyped query with the default settings.
///
/// Fails with [`TriageError::InvalidInputType`] when `input` is not a string.
pub fn handle_query(input: &serde_json::Value) -> Result<PipelineResult> {
    DEFAULT_PIPELINE.handle(input)
}
