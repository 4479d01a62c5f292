//! Browser state: the catalog, the current query, and its result.
//!
//! `CardBrowser` is the state a UI layer drives. Each interaction hands it
//! a complete new `Query`; it recomputes the result from scratch and resets
//! paging. The catalog and index are shared and read-only, so several
//! browsers (or threads) can hold the same `Arc`s.

use std::sync::Arc;

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::BrowserConfig;
use crate::search::{self, FacetStats, Pager, Query, SearchResult, TextIndex};

/// Query state and derived results over a shared catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use dragon_search::browser::CardBrowser;
/// use dragon_search::cards::{Card, CardId, CardRegistry, Personality};
/// use dragon_search::core::BrowserConfig;
///
/// let registry = CardRegistry::from_cards(vec![
///     Card::dragon(CardId::new(1), "Ember")
///         .with_personality(Personality::Shy)
///         .with_ability_types("WhenPlayed"),
///     Card::cave(CardId::new(2), "Hollow"),
/// ])
/// .unwrap();
///
/// let mut browser = CardBrowser::new(Arc::new(registry), BrowserConfig::default());
/// assert_eq!(browser.result().len(), 2);
///
/// let query = browser.query().clone().with_text("hollow");
/// browser.apply(query);
/// assert_eq!(browser.result().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardBrowser {
    registry: Arc<CardRegistry>,
    index: Arc<TextIndex>,
    query: Query,
    result: SearchResult,
    pager: Pager,
}

impl CardBrowser {
    /// Index the catalog and run the configured initial query.
    pub fn new(registry: Arc<CardRegistry>, config: BrowserConfig) -> Self {
        let index = Arc::new(TextIndex::build(&registry));
        Self::with_index(registry, index, config)
    }

    /// Use an index that was already built for `registry`.
    pub fn with_index(
        registry: Arc<CardRegistry>,
        index: Arc<TextIndex>,
        config: BrowserConfig,
    ) -> Self {
        let query = config.initial_query();
        let result = search::run(&registry, &index, &query);
        Self {
            registry,
            index,
            query,
            result,
            pager: Pager::new(config.page_increment),
        }
    }

    /// Replace the query and recompute the result.
    ///
    /// Paging restarts at the first increment.
    pub fn apply(&mut self, query: Query) {
        self.result = search::run(&self.registry, &self.index, &query);
        self.query = query;
        self.pager.reset();
    }

    /// The current query.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The current ordered result.
    #[must_use]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Facet counts over the current result.
    #[must_use]
    pub fn stats(&self) -> FacetStats {
        FacetStats::compute(&self.registry, &self.result)
    }

    /// Look up a card record.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.registry.get(id)
    }

    /// Cards in the visible window, in result order.
    pub fn visible(&self) -> impl Iterator<Item = &Card> + '_ {
        self.pager
            .visible(&self.result)
            .filter_map(move |id| self.registry.get(id))
    }

    /// Whether more results are available beyond the window.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pager.has_more(&self.result)
    }

    /// Reveal the next increment of results.
    pub fn show_more(&mut self) {
        self.pager.show_more();
    }

    /// The shared catalog.
    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        &self.registry
    }

    /// The shared text index.
    #[must_use]
    pub fn index(&self) -> &Arc<TextIndex> {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AbilityType, CardType, Personality};
    use crate::search::{FacetValue, SortKey, SortOrder};

    fn browser(increment: usize) -> CardBrowser {
        let cards = (1..=5)
            .map(|i| {
                Card::dragon(CardId::new(i), format!("Dragon {i}"))
                    .with_personality(Personality::Helpful)
                    .with_ability_type(AbilityType::Adventurer)
            })
            .chain((6..=8).map(|i| Card::cave(CardId::new(i), format!("Cave {i}"))))
            .collect();
        let registry = CardRegistry::from_cards(cards).unwrap();
        CardBrowser::new(
            Arc::new(registry),
            BrowserConfig::default().with_page_increment(increment),
        )
    }

    #[test]
    fn test_initial_state() {
        let browser = browser(3);
        assert_eq!(browser.result().len(), 8);
        assert_eq!(browser.visible().count(), 3);
        assert!(browser.has_more());
        assert_eq!(browser.query(), &Query::default());
    }

    #[test]
    fn test_config_sort_applies_to_initial_query() {
        let registry = browser(3).registry().clone();
        let browser = CardBrowser::new(
            registry,
            BrowserConfig::default().with_sort(SortKey::Number, SortOrder::Desc),
        );
        assert_eq!(browser.result().front(), Some(&CardId::new(8)));
    }

    #[test]
    fn test_apply_replaces_and_resets_paging() {
        let mut browser = browser(3);
        browser.show_more();
        assert_eq!(browser.visible().count(), 6);

        let mut query = browser.query().clone();
        query.card_type.remove(CardType::Cave);
        browser.apply(query);

        assert_eq!(browser.result().len(), 5);
        assert_eq!(browser.visible().count(), 3);
        assert!(!browser.query().card_type.contains(CardType::Cave));
    }

    #[test]
    fn test_stats_follow_result() {
        let mut browser = browser(3);
        assert_eq!(browser.stats().count(FacetValue::Type(CardType::Cave)), 3);

        let query = browser.query().clone().with_text("dragon");
        browser.apply(query);
        let stats = browser.stats();
        assert_eq!(stats.count(FacetValue::Type(CardType::Cave)), 0);
        assert_eq!(stats.count(FacetValue::Type(CardType::Dragon)), 5);
    }

    #[test]
    fn test_card_lookup() {
        let browser = browser(3);
        assert_eq!(browser.card(CardId::new(6)).unwrap().name, "Cave 6");
        assert!(browser.card(CardId::new(60)).is_none());
    }
}
