//! Browser configuration.

use serde::{Deserialize, Serialize};

use crate::search::{Query, SortKey, SortOrder};

/// Number of cards revealed per "load more" step.
pub const DEFAULT_PAGE_INCREMENT: usize = 30;

/// Configuration for a `CardBrowser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Cards revealed initially and added by each `show_more` (minimum 1).
    pub page_increment: usize,

    /// Sort key of the initial query.
    pub sort_key: SortKey,

    /// Sort direction of the initial query.
    pub sort_order: SortOrder,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_increment: DEFAULT_PAGE_INCREMENT,
            sort_key: SortKey::Number,
            sort_order: SortOrder::Asc,
        }
    }
}

impl BrowserConfig {
    /// Set the page increment.
    pub fn with_page_increment(mut self, increment: usize) -> Self {
        self.page_increment = increment;
        self
    }

    /// Set the initial sort.
    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    /// The query a fresh browser starts with: every facet enabled, no
    /// region required, empty text, and the configured sort.
    pub fn initial_query(&self) -> Query {
        Query::default().with_sort(self.sort_key, self.sort_order)
    }
}
