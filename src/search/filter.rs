//! Facet predicate: decides whether a card is included by a query.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. Category must be included.
//! 2. Personality must be included (dragons only).
//! 3. Expansion must be included.
//! 4. Size must be included (only if the card declares a size).
//! 5. Cost: an ignored-cost card needs `IgnoreCost`; a free card needs
//!    `NoResourceCost`; otherwise every resource the card carries must be
//!    included. Resources the card does not carry are never checked.
//! 6. Ability type (dragons only, only when any type is selected): some
//!    selected type must be a substring of some card tag.
//! 7. Region (dragons only, only when any region is selected): the card
//!    must be marked for every selected region.
//!
//! Absent fields (unrecognized category, expansion or personality) fail
//! their inclusion check rather than raising an error.

use crate::cards::{Card, CostFacet, CostState, FacetSet, Region};

use super::query::Query;

/// Whether `card` passes every facet of `query`.
#[must_use]
pub fn include(card: &Card, query: &Query) -> bool {
    category_included(card, query)
        && personality_included(card, query)
        && expansion_included(card, query)
        && size_included(card, query)
        && cost_included(card, query)
        && ability_type_included(card, query)
        && regions_included(card, query)
}

fn category_included(card: &Card, query: &Query) -> bool {
    card.card_type.is_some_and(|t| query.card_type.contains(t))
}

fn personality_included(card: &Card, query: &Query) -> bool {
    if !card.is_primary() {
        return true;
    }
    card.personality()
        .is_some_and(|p| query.personality.contains(p))
}

fn expansion_included(card: &Card, query: &Query) -> bool {
    card.expansion.is_some_and(|e| query.expansion.contains(e))
}

fn size_included(card: &Card, query: &Query) -> bool {
    card.size.map_or(true, |s| query.size.contains(s))
}

/// Resolve the card's cost state against the cost facets.
fn cost_included(card: &Card, query: &Query) -> bool {
    match card.costs.state() {
        CostState::Ignored => query.resource.contains(CostFacet::IgnoreCost),
        CostState::Free => query.resource.contains(CostFacet::NoResourceCost),
        CostState::Resources => card
            .costs
            .resources()
            .all(|r| query.resource.contains(CostFacet::from(r))),
    }
}

fn ability_type_included(card: &Card, query: &Query) -> bool {
    if !card.is_primary() || query.ability_type.is_empty() {
        return true;
    }
    query.ability_type.iter().any(|t| card.has_ability_type(t))
}

fn regions_included(card: &Card, query: &Query) -> bool {
    if !card.is_primary() {
        return true;
    }
    marked_for_all(card, query.region)
}

fn marked_for_all(card: &Card, required: FacetSet<Region>) -> bool {
    required.iter().all(|r| card.marked_for(r))
}
