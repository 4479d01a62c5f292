//! Incremental reveal over a result list.
//!
//! The browser shows the first `increment` cards and grows the window by
//! `increment` on each "load more". Paging is pure slicing; it never
//! affects which cards match or their order.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::pipeline::SearchResult;

/// Visible window over the head of a result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    increment: usize,
    shown: usize,
}

impl Pager {
    /// Create a pager showing one increment. An increment of 0 is treated as 1.
    #[must_use]
    pub fn new(increment: usize) -> Self {
        let increment = increment.max(1);
        Self {
            increment,
            shown: increment,
        }
    }

    /// Cards revealed per step.
    #[must_use]
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Window size, not clamped to any result.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Number of cards visible for `result`.
    #[must_use]
    pub fn visible_len(&self, result: &SearchResult) -> usize {
        self.shown.min(result.len())
    }

    /// Visible identifiers, in result order.
    pub fn visible<'a>(&self, result: &'a SearchResult) -> impl Iterator<Item = CardId> + 'a {
        result.iter().take(self.shown).copied()
    }

    /// Whether `result` has cards beyond the window.
    #[must_use]
    pub fn has_more(&self, result: &SearchResult) -> bool {
        self.shown < result.len()
    }

    /// Grow the window by one increment.
    pub fn show_more(&mut self) {
        self.shown = self.shown.saturating_add(self.increment);
    }

    /// Shrink the window back to one increment.
    pub fn reset(&mut self) {
        self.shown = self.increment;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_PAGE_INCREMENT)
    }
}
