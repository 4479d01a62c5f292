//! Card records - the immutable catalog entries.
//!
//! A `Card` is loaded once and never mutated. Dragon-only fields
//! (personality, ability tags, region markers) are stored on every record
//! but read through accessors that treat them as absent for caves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{
    AbilityType, CardType, Expansion, Facet, FacetSet, Personality, Region, Resource, Size,
};

/// Unique, stable identifier for a catalog card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The three mutually exclusive cost states of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostState {
    /// The card's cost is ignored; resources play no part.
    Ignored,
    /// No resource amounts and not cost-ignored.
    Free,
    /// At least one resource amount is positive.
    Resources,
}

/// Resource costs of a card.
///
/// Amounts are indexed by `Resource`. `ignore_cost` overrides everything
/// else: an ignored-cost card is never "free" even with no amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costs {
    amounts: [u32; 6],
    /// Cost is ignored for this card.
    pub ignore_cost: bool,
}

impl Costs {
    /// No resources, cost not ignored.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            amounts: [0; 6],
            ignore_cost: false,
        }
    }

    /// Amount of a resource (0 when absent).
    #[must_use]
    pub fn amount(&self, resource: Resource) -> u32 {
        self.amounts[resource as usize]
    }

    /// Set the amount of a resource.
    pub fn set_amount(&mut self, resource: Resource, amount: u32) {
        self.amounts[resource as usize] = amount;
    }

    /// Whether the card carries a positive amount of `resource`.
    #[must_use]
    pub fn has(&self, resource: Resource) -> bool {
        self.amount(resource) > 0
    }

    /// Resources carried with a positive amount, in canonical order.
    pub fn resources(&self) -> impl Iterator<Item = Resource> + '_ {
        Resource::ALL.iter().copied().filter(move |r| self.has(*r))
    }

    /// Derived "no cost": no resource is carried and cost is not ignored.
    #[must_use]
    pub fn no_cost(&self) -> bool {
        !self.ignore_cost && self.amounts.iter().all(|&a| a == 0)
    }

    /// Resolve to exactly one cost state.
    #[must_use]
    pub fn state(&self) -> CostState {
        if self.ignore_cost {
            CostState::Ignored
        } else if self.no_cost() {
            CostState::Free
        } else {
            CostState::Resources
        }
    }
}

/// A catalog card.
///
/// ## Example
///
/// ```
/// use dragon_search::cards::{Card, CardId, Region, Resource, Size};
///
/// let ember = Card::dragon(CardId::new(1), "Ember")
///     .with_size(Size::Small)
///     .with_cost(Resource::Egg, 1)
///     .with_region(Region::CrimsonCavern);
///
/// assert!(ember.costs.has(Resource::Egg));
/// assert!(ember.marked_for(Region::CrimsonCavern));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Ability text (empty when the card has none).
    pub ability: String,

    /// Printed card number, as displayed and indexed.
    pub number: String,

    /// Numeric sort key; defines catalog order.
    pub sort_id: i64,

    /// Category. `None` when the source value was unrecognized.
    pub card_type: Option<CardType>,

    /// Source set. `None` when the source value was unrecognized.
    pub expansion: Option<Expansion>,

    /// Size, if the card declares one.
    pub size: Option<Size>,

    /// Resource costs.
    pub costs: Costs,

    /// Victory points, if printed.
    pub victory_points: Option<i64>,

    personality: Option<Personality>,
    ability_tags: SmallVec<[String; 4]>,
    regions: FacetSet<Region>,
}

impl Card {
    /// Create a card with the given category and no other attributes.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: Option<CardType>) -> Self {
        let sort_id = i64::from(id.raw());
        Self {
            id,
            name: name.into(),
            ability: String::new(),
            number: sort_id.to_string(),
            sort_id,
            card_type,
            expansion: Some(Expansion::Base),
            size: None,
            costs: Costs::free(),
            victory_points: None,
            personality: None,
            ability_tags: SmallVec::new(),
            regions: FacetSet::empty(),
        }
    }

    /// Create a dragon card.
    #[must_use]
    pub fn dragon(id: CardId, name: impl Into<String>) -> Self {
        Self::new(id, name, Some(CardType::Dragon))
    }

    /// Create a cave card.
    #[must_use]
    pub fn cave(id: CardId, name: impl Into<String>) -> Self {
        Self::new(id, name, Some(CardType::Cave))
    }

    /// Set the ability text (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = ability.into();
        self
    }

    /// Set the sort key and printed number together (builder pattern).
    #[must_use]
    pub fn with_number(mut self, sort_id: i64) -> Self {
        self.sort_id = sort_id;
        self.number = sort_id.to_string();
        self
    }

    /// Set the expansion (builder pattern).
    #[must_use]
    pub fn with_expansion(mut self, expansion: Option<Expansion>) -> Self {
        self.expansion = expansion;
        self
    }

    /// Set the size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set a resource amount (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, resource: Resource, amount: u32) -> Self {
        self.costs.set_amount(resource, amount);
        self
    }

    /// Mark the cost as ignored (builder pattern).
    #[must_use]
    pub fn with_ignored_cost(mut self) -> Self {
        self.costs.ignore_cost = true;
        self
    }

    /// Set victory points (builder pattern).
    #[must_use]
    pub fn with_victory_points(mut self, vp: i64) -> Self {
        self.victory_points = Some(vp);
        self
    }

    /// Set the personality (builder pattern).
    #[must_use]
    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }

    /// Set ability tags from the catalog's comma-separated form.
    #[must_use]
    pub fn with_ability_types(mut self, raw: &str) -> Self {
        self.ability_tags = split_ability_tags(raw);
        self
    }

    /// Add an ability tag (builder pattern).
    #[must_use]
    pub fn with_ability_type(mut self, tag: AbilityType) -> Self {
        self.ability_tags.push(tag.to_string());
        self
    }

    /// Mark the card for a region (builder pattern).
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.insert(region);
        self
    }

    /// Whether this card is in the primary (dragon) category.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.card_type.is_some_and(CardType::is_primary)
    }

    /// Personality; always `None` for non-dragon cards.
    #[must_use]
    pub fn personality(&self) -> Option<Personality> {
        self.personality.filter(|_| self.is_primary())
    }

    /// Parsed ability tags; always empty for non-dragon cards.
    #[must_use]
    pub fn ability_tags(&self) -> &[String] {
        if self.is_primary() {
            &self.ability_tags
        } else {
            &[]
        }
    }

    /// Region markers; always empty for non-dragon cards.
    #[must_use]
    pub fn regions(&self) -> FacetSet<Region> {
        if self.is_primary() {
            self.regions
        } else {
            FacetSet::empty()
        }
    }

    /// Whether the card is explicitly marked for `region`.
    #[must_use]
    pub fn marked_for(&self, region: Region) -> bool {
        self.regions().contains(region)
    }

    /// Whether any ability tag contains `tag`'s name as a substring.
    #[must_use]
    pub fn has_ability_type(&self, tag: AbilityType) -> bool {
        let needle = tag.name();
        self.ability_tags().iter().any(|t| t.contains(needle))
    }

    /// Victory points for sorting (absent reads as 0).
    #[must_use]
    pub fn vp_or_zero(&self) -> i64 {
        self.victory_points.unwrap_or(0)
    }
}

/// Split the catalog's `"A, B"` ability-type form into tags.
pub(crate) fn split_ability_tags(raw: &str) -> SmallVec<[String; 4]> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
