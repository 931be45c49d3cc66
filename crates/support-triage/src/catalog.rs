//! Static routing data: per-category lexicon, required fields and reply
//! template, plus the field-name correspondence used by the extractor.
//!
//! Everything here is `'static` and read-only. Adding a category means adding
//! an enum variant and one [`CategoryProfile`].

use crate::models::Category;

/// Reply wording for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTemplate {
    /// Opening sentence, always emitted
    pub lead: &'static str,
    /// Prefix placed before the comma-joined missing fields
    pub request: &'static str,
    /// Next-step sentence used when nothing is missing
    pub confirmation: &'static str,
}

/// Static data colocated per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Phrases matched case-insensitively as literal substrings
    pub keywords: &'static [&'static str],
    /// Fields needed to service the request, in the order they are asked for
    pub schedule: &'static [&'static str],
    /// Reply wording
    pub template: ResponseTemplate,
}

const ACCOUNT_OPENING: CategoryProfile = CategoryProfile {
    keywords: &[
        "open an account",
        "open account",
        "new account",
        "opening",
        "sign up",
        "savings account",
        "checking account",
        "join",
    ],
    schedule: &[
        "full_name",
        "email_or_address",
        "phone",
        "id_type",
        "id_number",
        "product_type",
    ],
    template: ResponseTemplate {
        lead: "Thanks for choosing to open an account with us.",
        request: "To get started, please provide:",
        confirmation: "Your application details are complete and we will email your next steps shortly.",
    },
};

const ACCOUNT_ACCESS: CategoryProfile = CategoryProfile {
    keywords: &[
        "login",
        "log in",
        "sign in",
        "password",
        "locked out",
        "username",
        "reset",
        "2fa",
        "otp",
        "access",
    ],
    schedule: &["username_or_email", "last_successful_login"],
    template: ResponseTemplate {
        lead: "Sorry you're having trouble signing in.",
        request: "To verify your identity, please share:",
        confirmation: "We've sent a secure reset link to your registered contact details.",
    },
};

const BILLING_ISSUE: CategoryProfile = CategoryProfile {
    keywords: &[
        "bill",
        "billing",
        "invoice",
        "overcharged",
        "refund",
        "fee",
        "subscription",
        "credit back",
    ],
    schedule: &[
        "billing_reference",
        "billing_date",
        "amount",
        "service_description",
    ],
    template: ResponseTemplate {
        lead: "I can help sort out this billing issue.",
        request: "Please provide:",
        confirmation: "A billing specialist will review the charge and reply within 2 business days.",
    },
};

const TRANSACTION_INQUIRY: CategoryProfile = CategoryProfile {
    keywords: &[
        "transaction",
        "txn",
        "dispute",
        "unauthorized",
        "fraud",
        "charge",
        "transfer",
        "payment",
        "ref",
    ],
    schedule: &["transaction_id", "transaction_date", "amount", "merchant"],
    template: ResponseTemplate {
        lead: "I can look into this transaction for you.",
        request: "Please provide:",
        confirmation: "We've opened an investigation and will update you within 5 business days.",
    },
};

const STATEMENT_REQUEST: CategoryProfile = CategoryProfile {
    keywords: &[
        "statement",
        "e-statement",
        "account history",
        "transaction history",
        "download",
    ],
    schedule: &["account_type", "statement_period", "delivery_method"],
    template: ResponseTemplate {
        lead: "Happy to get your statement ready.",
        request: "Please specify:",
        confirmation: "Your statement will be delivered using your chosen method shortly.",
    },
};

const LOAN_INQUIRY: CategoryProfile = CategoryProfile {
    keywords: &[
        "loan",
        "mortgage",
        "borrow",
        "financing",
        "tenor",
        "interest rate",
        "installment",
    ],
    schedule: &[
        "loan_type",
        "requested_amount",
        "term_or_tenor",
        "application_id",
    ],
    template: ResponseTemplate {
        lead: "Thanks for your interest in our loans.",
        request: "To continue, please provide:",
        confirmation: "A loan officer will contact you with the options available.",
    },
};

const CARD_SERVICES: CategoryProfile = CategoryProfile {
    keywords: &[
        "card",
        "debit",
        "credit card",
        "lost",
        "stolen",
        "block",
        "activate",
        "replace",
        "reissue",
        "pin",
    ],
    schedule: &["card_type", "card_last4", "issue_type", "reported_date"],
    template: ResponseTemplate {
        lead: "Card services handled — I can block or replace a card.",
        request: "Please confirm:",
        confirmation: "Your request has been logged and the card has been secured.",
    },
};

const GENERAL_INFORMATION: CategoryProfile = CategoryProfile {
    keywords: &[
        "hours",
        "branch",
        "location",
        "contact",
        "information",
        "help",
        "question",
        "where",
    ],
    schedule: &["topic"],
    template: ResponseTemplate {
        lead: "Happy to help with your question.",
        request: "To point you in the right direction, please clarify:",
        confirmation: "You can also find more details in our help center.",
    },
};

impl Category {
    /// Lexicon, schedule and template for this category
    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::AccountOpening => &ACCOUNT_OPENING,
            Category::AccountAccess => &ACCOUNT_ACCESS,
            Category::BillingIssue => &BILLING_ISSUE,
            Category::TransactionInquiry => &TRANSACTION_INQUIRY,
            Category::StatementRequest => &STATEMENT_REQUEST,
            Category::LoanInquiry => &LOAN_INQUIRY,
            Category::CardServices => &CARD_SERVICES,
            Category::GeneralInformation => &GENERAL_INFORMATION,
        }
    }

    /// Required fields, in schedule order
    pub fn schedule(&self) -> &'static [&'static str] {
        self.profile().schedule
    }

    /// Scoring keywords
    pub fn keywords(&self) -> &'static [&'static str] {
        self.profile().keywords
    }
}

/// Values produced by the extractor's matcher battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScratchKey {
    /// Currency amount
    Amount,
    /// ISO, slash-separated or relative date
    Date,
    /// Last four digits of a card
    CardLast4,
    /// Labelled transaction reference
    TransactionId,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Two or three capitalized words
    FullName,
    /// Account product keyword
    AccountType,
    /// Derived card or billing issue
    IssueType,
    /// Merchant named after "at" / "from"
    Merchant,
}

/// How a schedule field gets its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Copied from a scratch value when present
    Scratch(ScratchKey),
    /// Email when present, otherwise found without a value if the query
    /// contains any word at all
    LenientEmail,
    /// No matcher exists; always missing
    Unmapped,
}

const FIELD_SOURCES: &[(&str, FieldSource)] = &[
    ("full_name", FieldSource::Scratch(ScratchKey::FullName)),
    ("email_or_address", FieldSource::Scratch(ScratchKey::Email)),
    ("username_or_email", FieldSource::LenientEmail),
    ("phone", FieldSource::Scratch(ScratchKey::Phone)),
    ("account_type", FieldSource::Scratch(ScratchKey::AccountType)),
    ("billing_date", FieldSource::Scratch(ScratchKey::Date)),
    ("transaction_date", FieldSource::Scratch(ScratchKey::Date)),
    ("reported_date", FieldSource::Scratch(ScratchKey::Date)),
    ("amount", FieldSource::Scratch(ScratchKey::Amount)),
    ("requested_amount", FieldSource::Scratch(ScratchKey::Amount)),
    ("transaction_id", FieldSource::Scratch(ScratchKey::TransactionId)),
    ("merchant", FieldSource::Scratch(ScratchKey::Merchant)),
    ("card_last4", FieldSource::Scratch(ScratchKey::CardLast4)),
    ("issue_type", FieldSource::Scratch(ScratchKey::IssueType)),
];

/// Where the extractor should look for `field`
pub fn field_source(field: &str) -> FieldSource {
    FIELD_SOURCES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, source)| *source)
        .unwrap_or(FieldSource::Unmapped)
}
