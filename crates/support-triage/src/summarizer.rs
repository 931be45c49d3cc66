//! One-line paraphrase of what the customer wants

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

struct IntentTrigger {
    name: &'static str,
    pattern: Regex,
    phrase: &'static str,
}

impl IntentTrigger {
    fn new(name: &'static str, pattern: &str, phrase: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("intent trigger pattern is valid"),
            phrase,
        }
    }
}

// Checked in order against the lowercased query; each fires at most once.
static TRIGGERS: Lazy<Vec<IntentTrigger>> = Lazy::new(|| {
    vec![
        IntentTrigger::new(
            "dispute",
            r"dispute|fraud|unauthori[sz]ed|chargeback",
            "dispute a transaction",
        ),
        IntentTrigger::new(
            "account_opening",
            r"open (?:an |a |a new |new )?account|new account|sign up",
            "open a new account",
        ),
        IntentTrigger::new(
            "access",
            r"log ?in|sign ?in|password|locked out|username",
            "regain access to their account",
        ),
        IntentTrigger::new(
            "billing",
            r"\bbill|invoice|overcharg|refund|\bfees?\b",
            "resolve a billing issue",
        ),
        IntentTrigger::new("statements", r"statement", "obtain an account statement"),
        IntentTrigger::new("loans", r"loan|mortgage|borrow", "inquire about a loan"),
        IntentTrigger::new(
            "card_services",
            r"\bcard|\bpin\b|\bblock|activat|\blost\b|stolen",
            "get help with a card",
        ),
    ]
});

// Whole tokens only, optionally plural; the noun is reported without the `s`.
static OBJECT_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(transaction|card|account|statement|loan|bill|payment|password|login)s?\b")
        .expect("object noun pattern is valid")
});

/// Produces the intent summary for a query
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentSummarizer;

impl IntentSummarizer {
    /// Create a summarizer
    pub fn new() -> Self {
        Self
    }

    /// Paraphrase `query` as a single sentence. Never empty.
    pub fn summarize(&self, query: &str) -> String {
        let lower = query.to_lowercase();
        let verbs: Vec<&str> = TRIGGERS
            .iter()
            .filter(|trigger| trigger.pattern.is_match(&lower))
            .inspect(|trigger| debug!(trigger = trigger.name, "intent trigger fired"))
            .map(|trigger| trigger.phrase)
            .collect();

        if verbs.is_empty() {
            return format!("Customer asks: \"{}\".", query.trim());
        }

        let mut summary = format!("Customer intends to {}.", verbs.join(" and "));
        if let Some(object) = OBJECT_NOUN.captures(query).and_then(|caps| caps.get(1)) {
            summary.push_str(&format!(" Mentioned: {}.", object.as_str()));
        }
        summary
    }
}
