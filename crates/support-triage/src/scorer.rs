//! Keyword scoring of a query against every category's lexicon

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::models::{Category, ScoreTable};

struct KeywordMatcher {
    category: Category,
    keyword: &'static str,
    pattern: Regex,
}

static KEYWORD_MATCHERS: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            category.keywords().iter().map(move |&keyword| KeywordMatcher {
                category,
                keyword,
                pattern: RegexBuilder::new(&regex::escape(keyword))
                    .case_insensitive(true)
                    .build()
                    .expect("escaped keyword is a valid pattern"),
            })
        })
        .collect()
});

/// Scores queries against the static keyword lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryScorer;

impl CategoryScorer {
    /// Create a scorer
    pub fn new() -> Self {
        Self
    }

    /// Count keyword hits per category.
    ///
    /// Each keyword adds at most one hit, however often it occurs.
    pub fn score(&self, query: &str) -> ScoreTable {
        let mut table = ScoreTable::zeroed();
        for matcher in KEYWORD_MATCHERS.iter() {
            if matcher.pattern.is_match(query) {
                trace!(category = %matcher.category, keyword = matcher.keyword, "keyword hit");
                table.increment(matcher.category);
            }
        }
        table
    }

    /// Categories with at least one hit, best first.
    ///
    /// Never empty: falls back to [`Category::DEFAULT`] when nothing matches.
    pub fn rank(&self, query: &str) -> Vec<Category> {
        let table = self.score(query);
        let mut ranked = table.ranked();
        if ranked.is_empty() {
            ranked.push(Category::DEFAULT);
        }
        debug!(?ranked, "ranked candidate categories");
        ranked
    }
}
