//! Picks the single category to act on

use tracing::debug;

use crate::models::Category;

/// Chooses one category from the ranked candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySelector;

impl CategorySelector {
    /// Create a selector
    pub fn new() -> Self {
        Self
    }

    /// Return the top-ranked candidate, or [`Category::DEFAULT`] when there
    /// are none.
    ///
    /// `_query` is accepted so that disambiguation between tied candidates can
    /// be added without changing callers; it does not affect the choice today.
    pub fn select(&self, ranked: &[Category], _query: &str) -> Category {
        let chosen = ranked.first().copied().unwrap_or(Category::DEFAULT);
        debug!(category = %chosen, candidates = ranked.len(), "selected category");
        chosen
    }
}
