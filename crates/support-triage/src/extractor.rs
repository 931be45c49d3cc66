//! Category-specific field extraction
//!
//! Extraction runs in two passes. A fixed battery of heuristic matchers fills a
//! [`ScratchPool`] from the raw query without regard to category. The chosen
//! category's schedule is then resolved against that pool through
//! [`field_source`], yielding the found fields and, in schedule order, the
//! fields still missing.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::catalog::{field_source, FieldSource, ScratchKey};
use crate::models::{Category, ExtractionResult};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("extraction pattern is valid")
}

static CURRENCY_AMOUNT: Lazy<Regex> =
    Lazy::new(|| compile(r"[$€£¥]\s?\d+(?:,\d{3})*(?:\.\d+)?"));
static BARE_AMOUNT: Lazy<Regex> = Lazy::new(|| compile(r"\b\d+(?:,\d{3})*(?:\.\d+)?\b"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b|\b(?i:today|yesterday|tomorrow)\b")
});
static CARD_LAST4: Lazy<Regex> = Lazy::new(|| compile(r"(?:^|\D)(\d{4})(?:\D|$)"));
// The token must end the run of id characters: longer or lowercase-tailed
// tokens are rejected rather than truncated.
static TRANSACTION_ID: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?i:txn|transaction|refno|ref|id)\b[\s:#.\-]*([A-Z0-9][A-Z0-9\-]{3,29})(?:[^A-Za-z0-9\-]|$)",
    )
});
static EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}"));
// Any digit run with seven or more digits qualifies, ISO dates included.
static PHONE: Lazy<Regex> = Lazy::new(|| compile(r"\+?[\d(][\d\s()\-]{5,}\d"));
static FULL_NAME: Lazy<Regex> = Lazy::new(|| compile(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+){1,2}\b"));
static ACCOUNT_TYPE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(savings|checking|current|business|personal|credit)\b"));
static MERCHANT: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?i:at|from) ([A-Za-z0-9][A-Za-z0-9 &'\-]{2,29})"));
// Unicode-aware: a query written in any script counts as naming the user.
static WORD: Lazy<Regex> = Lazy::new(|| compile(r"\w+"));

// Later entries overwrite earlier ones when several match.
static ISSUE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (compile(r"(?i)lost|stolen"), "lost_or_stolen"),
        (compile(r"(?i)activate|activation"), "activate_card"),
        (compile(r"(?i)replace|new card|reissue"), "replace_card"),
        (compile(r"(?i)refund|overcharged|credit back"), "billing_dispute"),
    ]
});

const MIN_PHONE_DIGITS: usize = 7;

/// Category-independent values found in a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchPool {
    amount: Option<String>,
    date: Option<String>,
    card_last4: Option<String>,
    transaction_id: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    full_name: Option<String>,
    account_type: Option<String>,
    issue_type: Option<String>,
    merchant: Option<String>,
}

impl ScratchPool {
    /// Run every matcher over `query`.
    ///
    /// The merchant matcher is loose, so it only runs when `with_merchant` is set.
    pub fn collect(query: &str, with_merchant: bool) -> Self {
        Self {
            amount: extract_amount(query),
            date: first_match(&DATE, query),
            card_last4: first_capture(&CARD_LAST4, query),
            transaction_id: first_capture(&TRANSACTION_ID, query),
            email: first_match(&EMAIL, query),
            phone: extract_phone(query),
            full_name: first_match(&FULL_NAME, query),
            account_type: first_capture(&ACCOUNT_TYPE, query).map(|kind| kind.to_lowercase()),
            issue_type: derive_issue_type(query),
            merchant: if with_merchant {
                extract_merchant(query)
            } else {
                None
            },
        }
    }

    /// Value stored under `key`
    pub fn get(&self, key: ScratchKey) -> Option<&str> {
        let value = match key {
            ScratchKey::Amount => &self.amount,
            ScratchKey::Date => &self.date,
            ScratchKey::CardLast4 => &self.card_last4,
            ScratchKey::TransactionId => &self.transaction_id,
            ScratchKey::Email => &self.email,
            ScratchKey::Phone => &self.phone,
            ScratchKey::FullName => &self.full_name,
            ScratchKey::AccountType => &self.account_type,
            ScratchKey::IssueType => &self.issue_type,
            ScratchKey::Merchant => &self.merchant,
        };
        value.as_deref()
    }
}

/// Resolves a category's required fields against a query
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract `category`'s schedule fields from `query`.
    ///
    /// `found` only ever holds schedule fields, and every schedule field not in
    /// `found` is listed in `missing`, in schedule order.
    pub fn extract(&self, query: &str, category: Category) -> ExtractionResult {
        let schedule = category.schedule();
        let with_merchant = schedule.contains(&"merchant");
        let pool = ScratchPool::collect(query, with_merchant);

        let mut found = BTreeMap::new();
        let mut missing = Vec::new();
        for &field in schedule {
            match resolve(field, &pool, query) {
                Some(value) => {
                    trace!(field, ?value, "field found");
                    found.insert(field.to_string(), value);
                }
                None => missing.push(field.to_string()),
            }
        }

        debug!(
            category = %category,
            found = found.len(),
            missing = missing.len(),
            "extracted fields"
        );
        ExtractionResult { found, missing }
    }
}

/// `Some(value)` when `field` counts as found. The inner value is `None` only
/// for the lenient username field.
fn resolve(field: &str, pool: &ScratchPool, query: &str) -> Option<Option<String>> {
    match field_source(field) {
        FieldSource::Scratch(key) => pool.get(key).map(|value| Some(value.to_string())),
        FieldSource::LenientEmail => match pool.get(ScratchKey::Email) {
            Some(email) => Some(Some(email.to_string())),
            None if WORD.is_match(query) => Some(None),
            None => None,
        },
        FieldSource::Unmapped => None,
    }
}

fn first_match(pattern: &Regex, query: &str) -> Option<String> {
    pattern.find(query).map(|m| m.as_str().to_string())
}

fn first_capture(pattern: &Regex, query: &str) -> Option<String> {
    pattern
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Currency-prefixed amounts win over bare numbers.
///
/// The bare fallback takes the first number of any kind, so card digits or a
/// date's year can land here when no currency amount is present.
fn extract_amount(query: &str) -> Option<String> {
    first_match(&CURRENCY_AMOUNT, query).or_else(|| first_match(&BARE_AMOUNT, query))
}

fn extract_phone(query: &str) -> Option<String> {
    PHONE
        .find_iter(query)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            candidate.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
        })
        .map(str::to_string)
}

fn derive_issue_type(query: &str) -> Option<String> {
    ISSUE_RULES
        .iter()
        .filter(|(pattern, _)| pattern.is_match(query))
        .last()
        .map(|(_, issue)| issue.to_string())
}

fn extract_merchant(query: &str) -> Option<String> {
    first_capture(&MERCHANT, query)
        .map(|name| name.trim_end().to_string())
        .filter(|name| name.len() >= 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_card_fields() {
        let result = FieldExtractor::new().extract(
            "I lost my debit card ending 4321, please block it",
            Category::CardServices,
        );

        assert_eq!(result.value("card_last4"), Some("4321"));
        assert_eq!(result.value("issue_type"), Some("lost_or_stolen"));
        assert_eq!(result.missing, vec!["card_type", "reported_date"]);
    }

    #[test]
    fn transaction_id_follows_label() {
        let pool = ScratchPool::collect("ref: TXN-00912 disputed", false);
        assert_eq!(pool.get(ScratchKey::TransactionId), Some("TXN-00912"));

        let pool = ScratchPool::collect("transaction id #AB12-77 looks wrong", false);
        assert_eq!(pool.get(ScratchKey::TransactionId), Some("AB12-77"));
    }

    #[test]
    fn transaction_id_rejects_truncated_tokens() {
        let pool = ScratchPool::collect("ref: TXN-00912abc disputed", false);
        assert_eq!(pool.get(ScratchKey::TransactionId), None);

        let pool = ScratchPool::collect("ref ABCDEFGHIJKLMNOPQRSTUVWXYZ012345 please", false);
        assert_eq!(pool.get(ScratchKey::TransactionId), None);

        let pool = ScratchPool::collect("see ref QM-55120.", false);
        assert_eq!(pool.get(ScratchKey::TransactionId), Some("QM-55120"));
    }

    #[test]
    fn transaction_inquiry_resolves_merchant_and_amount() {
        let result = FieldExtractor::new().extract(
            "I don't recognise a $1,250.00 charge at Corner Cafe, dated 2024-03-05",
            Category::TransactionInquiry,
        );

        assert_eq!(result.value("amount"), Some("$1,250.00"));
        assert_eq!(result.value("transaction_date"), Some("2024-03-05"));
        assert_eq!(result.value("merchant"), Some("Corner Cafe"));
        assert_eq!(result.missing, vec!["transaction_id"]);
    }

    #[test]
    fn merchant_only_runs_when_scheduled() {
        let pool = ScratchPool::collect("paid at Corner Cafe", false);
        assert_eq!(pool.get(ScratchKey::Merchant), None);

        let pool = ScratchPool::collect("paid at Corner Cafe", true);
        assert_eq!(pool.get(ScratchKey::Merchant), Some("Corner Cafe"));
    }

    #[test]
    fn amount_prefers_currency_symbol() {
        assert_eq!(extract_amount("card 4321 charged £45.10"), Some("£45.10".into()));
        assert_eq!(extract_amount("charged 1,200 twice"), Some("1,200".into()));
        assert_eq!(extract_amount("no numbers here"), None);
    }

    #[test]
    fn bare_amount_falls_back_to_first_number() {
        let result = FieldExtractor::new().extract(
            "I was overcharged on card 4321 on 2024-03-05",
            Category::BillingIssue,
        );
        assert_eq!(result.value("amount"), Some("4321"));
        assert_eq!(result.value("billing_date"), Some("2024-03-05"));

        assert_eq!(extract_amount("overcharged on 2024-03-05"), Some("2024".into()));
    }

    #[test]
    fn dates_in_several_shapes() {
        assert_eq!(first_match(&DATE, "on 2024-01-31 please"), Some("2024-01-31".into()));
        assert_eq!(first_match(&DATE, "since 3/7/24"), Some("3/7/24".into()));
        assert_eq!(first_match(&DATE, "It happened Yesterday"), Some("Yesterday".into()));
    }

    #[test]
    fn card_last4_needs_exactly_four_digits() {
        assert_eq!(first_capture(&CARD_LAST4, "card 12345 and 6789"), Some("6789".into()));
        assert_eq!(first_capture(&CARD_LAST4, "card 123"), None);
    }

    #[test]
    fn phone_needs_seven_digits() {
        assert_eq!(
            extract_phone("call +1 (555) 010-9999 today"),
            Some("+1 (555) 010-9999".into())
        );
        assert_eq!(extract_phone("card 4321"), None);
    }

    #[test]
    fn iso_date_counts_as_phone() {
        let result = FieldExtractor::new().extract(
            "I am Jane Doe, born 1990-04-12, and want a savings account",
            Category::AccountOpening,
        );
        assert_eq!(result.value("phone"), Some("1990-04-12"));
    }

    #[test]
    fn account_opening_fields() {
        let result = FieldExtractor::new().extract(
            "Hello, I am Jane Doe, reach me at jane.doe@example.com or 555-123-4567",
            Category::AccountOpening,
        );

        assert_eq!(result.value("full_name"), Some("Jane Doe"));
        assert_eq!(result.value("email_or_address"), Some("jane.doe@example.com"));
        assert_eq!(result.value("phone"), Some("555-123-4567"));
        assert_eq!(result.missing, vec!["id_type", "id_number", "product_type"]);
    }

    #[test]
    fn later_issue_rules_overwrite_earlier() {
        assert_eq!(
            derive_issue_type("card was stolen, please send a new card"),
            Some("replace_card".into())
        );
        assert_eq!(derive_issue_type("please Activate it"), Some("activate_card".into()));
        assert_eq!(derive_issue_type("nothing relevant"), None);
    }

    #[test]
    fn account_type_is_lowercased() {
        let result =
            FieldExtractor::new().extract("Need my Savings statement", Category::StatementRequest);
        assert_eq!(result.value("account_type"), Some("savings"));
        assert_eq!(result.missing, vec!["statement_period", "delivery_method"]);
    }

    #[test]
    fn username_is_found_without_email_when_query_has_words() {
        let result = FieldExtractor::new().extract("locked out again", Category::AccountAccess);
        assert!(result.is_found("username_or_email"));
        assert_eq!(result.value("username_or_email"), None);
        assert_eq!(result.missing, vec!["last_successful_login"]);

        let result = FieldExtractor::new().extract("  ?! ", Category::AccountAccess);
        assert!(!result.is_found("username_or_email"));
    }

    #[test]
    fn username_leniency_accepts_any_script() {
        let result = FieldExtractor::new().extract("забыл пароль", Category::AccountAccess);
        assert!(result.is_found("username_or_email"));
        assert_eq!(result.value("username_or_email"), None);
    }

    #[test]
    fn empty_query_reports_whole_schedule_missing() {
        for category in Category::ALL {
            let result = FieldExtractor::new().extract("", category);
            assert!(result.found.is_empty());
            assert_eq!(result.missing, category.schedule());
        }
    }
}
