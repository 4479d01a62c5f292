//! The search pipeline: text lookup, facet filter, sort.
//!
//! `run` is a pure function of the catalog, the index, and the query. It
//! keeps no state between calls and never mutates its inputs.

use im::Vector;
use tracing::debug;

use crate::cards::{Card, CardId, CardRegistry};

use super::filter::include;
use super::index::TextIndex;
use super::query::Query;
use super::sort::compare_directed;

/// Ordered card identifiers produced by a search.
///
/// Persistent vector, so presenters and pagers clone it in O(1).
pub type SearchResult = Vector<CardId>;

/// Run `query` against the catalog.
///
/// 1. Candidates: every card when the text is blank, otherwise the cards
///    the index matches, in catalog order and deduplicated.
/// 2. Keep candidates passing [`include`].
/// 3. Stable-sort by the query's key and direction.
pub fn run(registry: &CardRegistry, index: &TextIndex, query: &Query) -> SearchResult {
    let candidates = candidates(registry, index, query);
    let candidate_count = candidates.len();

    let mut matched: Vec<&Card> = candidates
        .into_iter()
        .filter(|card| include(card, query))
        .collect();
    matched.sort_by(|a, b| compare_directed(a, b, query.sort_key, query.sort_order));

    debug!(
        candidates = candidate_count,
        matched = matched.len(),
        sort_key = %query.sort_key,
        sort_order = query.sort_order.as_str(),
        "search pipeline run"
    );

    matched.into_iter().map(|card| card.id).collect()
}

fn candidates<'a>(registry: &'a CardRegistry, index: &TextIndex, query: &Query) -> Vec<&'a Card> {
    if query.text_is_blank() {
        return registry.iter().collect();
    }
    let hits = index.search(&query.text);
    registry.iter().filter(|card| hits.contains(&card.id)).collect()
}
