//! Closed card vocabularies.
//!
//! Every facet the search pipeline filters on draws its values from a
//! fixed vocabulary. Each vocabulary is an enum implementing [`Facet`],
//! which provides:
//!
//! - `ALL`: every value, in canonical order
//! - `index`: a dense position (used by `FacetSet` bitsets)
//! - `name`: the canonical string used in the catalog data and UI
//!
//! ## Vocabularies
//!
//! - `CardType`: Dragon (primary category) or Cave
//! - `Personality`: Shy, Playful, Helpful, Aggressive
//! - `Expansion`: base, academy
//! - `Size`: Hatchling < Fledgling < Small < Medium < Large
//! - `Resource`: the six cost resources
//! - `CostFacet`: the six resources plus the two derived cost flags
//! - `AbilityType`: Adventurer, WhenPlayed, OncePerRound, EndGame
//! - `Region`: the three cave regions a dragon may be marked for
//!
//! `FacetSet<F>` is a small bitset over one vocabulary. Queries use it for
//! inclusion sets and cards use it for region markers.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::UnknownValue;

/// A closed vocabulary of facet values.
pub trait Facet: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Vocabulary name, used in error messages and logs.
    const KIND: &'static str;

    /// Every value, in canonical order.
    const ALL: &'static [Self];

    /// Dense position of this value within `ALL`.
    fn index(self) -> usize;

    /// Canonical name as it appears in catalog data.
    fn name(self) -> &'static str;

    /// Look up a value by its canonical name (exact match).
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $label)] $variant),+
        }

        impl Facet for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Facet>::from_name(s).ok_or_else(|| UnknownValue::new($kind, s))
            }
        }
    };
}

vocabulary! {
    /// Card category. Dragons are the primary category; only they carry
    /// personality, ability-type tags, and region markers.
    CardType: "type" {
        Dragon => "Dragon",
        Cave => "Cave",
    }
}

impl CardType {
    /// Whether this is the primary (dragon) category.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, CardType::Dragon)
    }
}

vocabulary! {
    /// Dragon personality.
    Personality: "personality" {
        Shy => "Shy",
        Playful => "Playful",
        Helpful => "Helpful",
        Aggressive => "Aggressive",
    }
}

vocabulary! {
    /// Source set a card was printed in.
    Expansion: "expansion" {
        Base => "base",
        Academy => "academy",
    }
}

vocabulary! {
    /// Dragon size, declared smallest to largest.
    Size: "size" {
        Hatchling => "Hatchling",
        Fledgling => "Fledgling",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
    }
}

impl Size {
    /// Ordinal rank used for sorting (1 = Hatchling .. 5 = Large).
    ///
    /// Cards without a recognized size rank 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Rank of an optional size, 0 when absent.
    #[must_use]
    pub fn rank_of(size: Option<Size>) -> u8 {
        size.map_or(0, Size::rank)
    }
}

vocabulary! {
    /// Resource a card may cost.
    Resource: "resource" {
        Egg => "Egg",
        Milk => "Milk",
        Meat => "Meat",
        Gold => "Gold",
        Crystal => "Crystal",
        Coin => "Coin",
    }
}

vocabulary! {
    /// Cost filter dimension: each resource plus the two derived cost flags.
    ///
    /// A card resolves to exactly one of three cost states: cost-ignored,
    /// no-cost, or carrying one or more resources.
    CostFacet: "cost" {
        Egg => "Egg",
        Milk => "Milk",
        Meat => "Meat",
        Gold => "Gold",
        Crystal => "Crystal",
        Coin => "Coin",
        NoResourceCost => "NoResourceCost",
        IgnoreCost => "IgnoreCost",
    }
}

impl From<Resource> for CostFacet {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Egg => CostFacet::Egg,
            Resource::Milk => CostFacet::Milk,
            Resource::Meat => CostFacet::Meat,
            Resource::Gold => CostFacet::Gold,
            Resource::Crystal => CostFacet::Crystal,
            Resource::Coin => CostFacet::Coin,
        }
    }
}

impl CostFacet {
    /// The resource this facet stands for, if it is not a cost flag.
    #[must_use]
    pub const fn resource(self) -> Option<Resource> {
        match self {
            CostFacet::Egg => Some(Resource::Egg),
            CostFacet::Milk => Some(Resource::Milk),
            CostFacet::Meat => Some(Resource::Meat),
            CostFacet::Gold => Some(Resource::Gold),
            CostFacet::Crystal => Some(Resource::Crystal),
            CostFacet::Coin => Some(Resource::Coin),
            CostFacet::NoResourceCost | CostFacet::IgnoreCost => None,
        }
    }
}

vocabulary! {
    /// Ability timing tag.
    AbilityType: "abilityType" {
        Adventurer => "Adventurer",
        WhenPlayed => "WhenPlayed",
        OncePerRound => "OncePerRound",
        EndGame => "EndGame",
    }
}

vocabulary! {
    /// Cave region a dragon can be explicitly marked for.
    Region: "region" {
        CrimsonCavern => "Crimson Cavern",
        GoldenGrotto => "Golden Grotto",
        AmethystAbyss => "Amethyst Abyss",
    }
}

/// Set of values from one vocabulary, stored as a bitset.
///
/// Serializes as the list of member names in canonical order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacetSet<F: Facet> {
    bits: u32,
    _marker: PhantomData<F>,
}

impl<F: Facet> FacetSet<F> {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// Every value in the vocabulary.
    #[must_use]
    pub fn all() -> Self {
        F::ALL.iter().copied().collect()
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, value: F) -> bool {
        self.bits & (1 << value.index()) != 0
    }

    /// Add a value.
    pub fn insert(&mut self, value: F) {
        self.bits |= 1 << value.index();
    }

    /// Remove a value.
    pub fn remove(&mut self, value: F) {
        self.bits &= !(1 << value.index());
    }

    /// Set membership of a value explicitly.
    pub fn set(&mut self, value: F, included: bool) {
        if included {
            self.insert(value);
        } else {
            self.remove(value);
        }
    }

    /// Copy with `value` added (builder pattern).
    #[must_use]
    pub fn with(mut self, value: F) -> Self {
        self.insert(value);
        self
    }

    /// Copy with `value` removed (builder pattern).
    #[must_use]
    pub fn without(mut self, value: F) -> Self {
        self.remove(value);
        self
    }

    /// Copy with membership of `value` flipped.
    #[must_use]
    pub fn toggled(mut self, value: F) -> Self {
        self.bits ^= 1 << value.index();
        self
    }

    /// True if no value is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of selected values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over selected values in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(move |v| self.contains(*v))
    }
}

impl<F: Facet> Default for FacetSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Facet> FromIterator<F> for FacetSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<F: Facet> fmt::Debug for FacetSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Facet::name)).finish()
    }
}

impl<F: Facet + Serialize> Serialize for FacetSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, F: Facet + Deserialize<'de>> Deserialize<'de> for FacetSet<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<F>::deserialize(deserializer)?.into_iter().collect())
    }
}
