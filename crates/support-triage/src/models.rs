//! Data models for query triage

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Support-intent class a query is routed to.
///
/// Declaration order is significant: it breaks ties between equally
/// scored categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Opening a new account
    #[serde(rename = "Account Opening")]
    AccountOpening,
    /// Login, password and lock-out problems
    #[serde(rename = "Account Access")]
    AccountAccess,
    /// Invoices, fees and refunds
    #[serde(rename = "Billing Issue")]
    BillingIssue,
    /// Disputed or unrecognised transactions
    #[serde(rename = "Transaction Inquiry")]
    TransactionInquiry,
    /// Statement and history requests
    #[serde(rename = "Statement Request")]
    StatementRequest,
    /// Loan and mortgage questions
    #[serde(rename = "Loan Inquiry")]
    LoanInquiry,
    /// Lost, stolen, blocked or new cards
    #[serde(rename = "Card Services")]
    CardServices,
    /// Everything else; also the fallback category
    #[serde(rename = "General Information")]
    GeneralInformation,
}

impl Category {
    /// Every category, in tie-break order
    pub const ALL: [Category; 8] = [
        Category::AccountOpening,
        Category::AccountAccess,
        Category::BillingIssue,
        Category::TransactionInquiry,
        Category::StatementRequest,
        Category::LoanInquiry,
        Category::CardServices,
        Category::GeneralInformation,
    ];

    /// Category used when nothing else matches
    pub const DEFAULT: Category = Category::GeneralInformation;

    /// Human-readable category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AccountOpening => "Account Opening",
            Category::AccountAccess => "Account Access",
            Category::BillingIssue => "Billing Issue",
            Category::TransactionInquiry => "Transaction Inquiry",
            Category::StatementRequest => "Statement Request",
            Category::LoanInquiry => "Loan Inquiry",
            Category::CardServices => "Card Services",
            Category::GeneralInformation => "General Information",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category keyword hit counts for a single query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    counts: BTreeMap<Category, usize>,
}

impl ScoreTable {
    /// Table with every category at zero
    pub fn zeroed() -> Self {
        Self {
            counts: Category::ALL.iter().map(|&category| (category, 0)).collect(),
        }
    }

    /// Record one keyword hit for `category`
    pub fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Hit count for `category`
    pub fn get(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Categories with at least one hit, highest count first.
    ///
    /// Equal counts keep declaration order. May be empty.
    pub fn ranked(&self) -> Vec<Category> {
        let mut scored: Vec<(Category, usize)> = Category::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
            .filter(|(_, count)| *count > 0)
            .collect();
        // sort_by is stable, so ties stay in declaration order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(category, _)| category).collect()
    }
}

/// Fields found in a query for one category, plus what is still missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Schedule fields that were found.
    ///
    /// A value of `None` only occurs for `username_or_email`, which counts as
    /// found whenever the query contains any word, even without an email.
    pub found: BTreeMap<String, Option<String>>,
    /// Schedule fields that were not found, in schedule order
    pub missing: Vec<String>,
}

impl ExtractionResult {
    /// Extracted value for `field`, if found with a value
    pub fn value(&self, field: &str) -> Option<&str> {
        self.found.get(field).and_then(|value| value.as_deref())
    }

    /// Whether `field` counts as found
    pub fn is_found(&self, field: &str) -> bool {
        self.found.contains_key(field)
    }

    /// Whether every required field was found
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Output of one full pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// One-sentence paraphrase of the customer's intent
    pub intent_summary: String,
    /// Candidate categories, best first; never empty
    pub ranked_categories: Vec<Category>,
    /// Category acted on
    pub category: Category,
    /// Fields found and missing for `category`
    pub extraction: ExtractionResult,
    /// Final reply text
    pub response: String,
}

impl PipelineResult {
    /// Split into the ordered five-part result
    pub fn into_tuple(self) -> (String, Vec<Category>, Category, ExtractionResult, String) {
        (
            self.intent_summary,
            self.ranked_categories,
            self.category,
            self.extraction,
            self.response,
        )
    }
}
