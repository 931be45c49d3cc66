//! Templated reply rendering

use tracing::debug;

use crate::config::TriageConfig;
use crate::models::{Category, ExtractionResult};

/// Renders the final reply for a triaged query
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    signature: String,
    include_interpretation: bool,
}

impl ResponseComposer {
    /// Create a composer using the given presentation settings
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            signature: config.signature.clone(),
            include_interpretation: config.include_interpretation,
        }
    }

    /// Reply body only: a request for the missing fields, or the category's
    /// next step when nothing is missing
    pub fn body(&self, category: Category, extraction: &ExtractionResult) -> String {
        let template = category.profile().template;
        if extraction.missing.is_empty() {
            format!("{} {}", template.lead, template.confirmation)
        } else {
            format!(
                "{} {} {}.",
                template.lead,
                template.request,
                extraction.missing.join(", ")
            )
        }
    }

    /// Full reply: body, signature and interpretation footer
    pub fn compose(
        &self,
        category: Category,
        extraction: &ExtractionResult,
        intent_summary: &str,
    ) -> String {
        let mut response = self.body(category, extraction);
        response.push_str("\n\n");
        response.push_str(&self.signature);
        if self.include_interpretation {
            response.push_str(&format!("\n\n(Interpretation: {intent_summary})"));
        }
        debug!(category = %category, complete = extraction.is_complete(), "composed reply");
        response
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new(&TriageConfig::default())
    }
}
