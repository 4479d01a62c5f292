//! The catalog store.
//!
//! `CardRegistry` holds every card in catalog order (ascending `sort_id`,
//! ties by input order) together with an id lookup. It is built once and
//! never mutated afterwards; share it behind an `Arc`.

use rustc_hash::FxHashMap;
use tracing::info;

use super::definition::{Card, CardId};
use super::loader;
use crate::core::{CatalogError, Result};

/// Immutable catalog of cards.
///
/// ## Example
///
/// ```
/// use dragon_search::cards::{Card, CardId, CardRegistry};
///
/// let registry = CardRegistry::from_cards(vec![
///     Card::dragon(CardId::new(2), "Ember").with_number(5),
///     Card::cave(CardId::new(1), "Hollow").with_number(1),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.get(CardId::new(2)).unwrap().name, "Ember");
/// assert_eq!(registry.ids().collect::<Vec<_>>(), vec![CardId::new(1), CardId::new(2)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Build a registry from loaded cards.
    ///
    /// Fails on duplicate identifiers.
    pub fn from_cards(mut cards: Vec<Card>) -> Result<Self> {
        cards.sort_by_key(|c| c.sort_id);

        let mut by_id = FxHashMap::default();
        by_id.reserve(cards.len());
        for (position, card) in cards.iter().enumerate() {
            if by_id.insert(card.id, position).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }

        info!(cards = cards.len(), "card catalog built");
        Ok(Self { cards, by_id })
    }

    /// Parse catalog JSON and build a registry.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_cards(loader::parse_catalog(json)?)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&pos| &self.cards[pos])
    }

    /// Catalog position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Cards as a slice, in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
