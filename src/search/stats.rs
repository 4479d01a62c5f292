//! Per-facet counts over a filtered result.
//!
//! Every facet value the UI labels is one `FacetValue`, and each one knows
//! how to test a card. Statistics are one generic reduction over the
//! result: for each card, for each table entry, count a hit. Values with no
//! hits read as zero.

use rustc_hash::FxHashMap;

use crate::cards::{
    AbilityType, Card, CardId, CardRegistry, CardType, CostFacet, Expansion, Facet, Personality,
    Region, Size,
};

/// One countable facet value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetValue {
    /// Card category.
    Type(CardType),
    /// Dragon personality.
    Personality(Personality),
    /// Expansion.
    Expansion(Expansion),
    /// Declared size.
    Size(Size),
    /// Carried resource, or one of the derived cost flags.
    Cost(CostFacet),
    /// Dragon ability tag (substring match, as in filtering).
    AbilityType(AbilityType),
    /// Dragon region marker.
    Region(Region),
}

impl FacetValue {
    /// Every countable value, grouped by dimension in canonical order.
    pub fn table() -> impl Iterator<Item = FacetValue> {
        let types = CardType::ALL.iter().copied().map(FacetValue::Type);
        let personalities = Personality::ALL.iter().copied().map(FacetValue::Personality);
        let expansions = Expansion::ALL.iter().copied().map(FacetValue::Expansion);
        let sizes = Size::ALL.iter().copied().map(FacetValue::Size);
        let costs = CostFacet::ALL.iter().copied().map(FacetValue::Cost);
        let abilities = AbilityType::ALL.iter().copied().map(FacetValue::AbilityType);
        let regions = Region::ALL.iter().copied().map(FacetValue::Region);

        types
            .chain(personalities)
            .chain(expansions)
            .chain(sizes)
            .chain(costs)
            .chain(abilities)
            .chain(regions)
    }

    /// Whether `card` counts toward this value.
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            FacetValue::Type(t) => card.card_type == Some(t),
            FacetValue::Personality(p) => card.personality() == Some(p),
            FacetValue::Expansion(e) => card.expansion == Some(e),
            FacetValue::Size(s) => card.size == Some(s),
            FacetValue::Cost(CostFacet::NoResourceCost) => card.costs.no_cost(),
            FacetValue::Cost(CostFacet::IgnoreCost) => card.costs.ignore_cost,
            FacetValue::Cost(c) => c.resource().is_some_and(|r| card.costs.has(r)),
            FacetValue::AbilityType(a) => card.has_ability_type(a),
            FacetValue::Region(r) => card.marked_for(r),
        }
    }

    /// Dimension name (e.g. "size").
    #[must_use]
    pub fn dimension(self) -> &'static str {
        match self {
            FacetValue::Type(_) => CardType::KIND,
            FacetValue::Personality(_) => Personality::KIND,
            FacetValue::Expansion(_) => Expansion::KIND,
            FacetValue::Size(_) => Size::KIND,
            FacetValue::Cost(_) => CostFacet::KIND,
            FacetValue::AbilityType(_) => AbilityType::KIND,
            FacetValue::Region(_) => Region::KIND,
        }
    }

    /// Canonical value name (e.g. "Small").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FacetValue::Type(v) => v.name(),
            FacetValue::Personality(v) => v.name(),
            FacetValue::Expansion(v) => v.name(),
            FacetValue::Size(v) => v.name(),
            FacetValue::Cost(v) => v.name(),
            FacetValue::AbilityType(v) => v.name(),
            FacetValue::Region(v) => v.name(),
        }
    }
}

/// Counts per facet value over a set of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetStats {
    counts: FxHashMap<FacetValue, usize>,
    total: usize,
}

impl FacetStats {
    /// Count facet values over the cards in `ids`.
    ///
    /// Identifiers missing from the registry are skipped.
    pub fn compute<'a>(
        registry: &CardRegistry,
        ids: impl IntoIterator<Item = &'a CardId>,
    ) -> Self {
        let table: Vec<FacetValue> = FacetValue::table().collect();
        let mut stats = Self::default();
        for card in ids.into_iter().filter_map(|id| registry.get(*id)) {
            stats.total += 1;
            for value in &table {
                if value.matches(card) {
                    *stats.counts.entry(*value).or_insert(0) += 1;
                }
            }
        }
        stats
    }

    /// Count for one value; zero when nothing matched.
    #[must_use]
    pub fn count(&self, value: FacetValue) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of cards counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every table value with its count, zeros included, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (FacetValue, usize)> + '_ {
        FacetValue::table().map(move |v| (v, self.count(v)))
    }

    /// Counts for one dimension, keyed by value name.
    pub fn dimension(&self, name: &str) -> Vec<(&'static str, usize)> {
        self.iter()
            .filter(|(v, _)| v.dimension() == name)
            .map(|(v, n)| (v.name(), n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Resource;

    fn registry() -> CardRegistry {
        CardRegistry::from_cards(vec![
            Card::dragon(CardId::new(1), "Ember")
                .with_personality(Personality::Shy)
                .with_size(Size::Small)
                .with_cost(Resource::Egg, 1)
                .with_ability_types("WhenPlayed")
                .with_region(Region::CrimsonCavern),
            Card::dragon(CardId::new(2), "Cinder")
                .with_personality(Personality::Shy)
                .with_cost(Resource::Egg, 2)
                .with_cost(Resource::Gold, 1),
            Card::cave(CardId::new(3), "Hollow"),
            Card::cave(CardId::new(4), "Vault")
                .with_cost(Resource::Coin, 1)
                .with_ignored_cost(),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_covers_every_value() {
        // 2 types + 4 personalities + 2 expansions + 5 sizes + 8 costs + 4 abilities + 3 regions
        assert_eq!(FacetValue::table().count(), 28);
    }

    #[test]
    fn test_entry_predicates() {
        let registry = registry();
        let hollow = registry.get(CardId::new(3)).unwrap();
        let vault = registry.get(CardId::new(4)).unwrap();

        assert!(FacetValue::Cost(CostFacet::NoResourceCost).matches(hollow));
        assert!(!FacetValue::Cost(CostFacet::NoResourceCost).matches(vault));
        assert!(FacetValue::Cost(CostFacet::IgnoreCost).matches(vault));
        assert!(FacetValue::Cost(CostFacet::Coin).matches(vault));
        assert!(!FacetValue::Personality(Personality::Shy).matches(hollow));
    }

    #[test]
    fn test_counts() {
        let registry = registry();
        let ids: Vec<CardId> = registry.ids().collect();
        let stats = FacetStats::compute(&registry, &ids);

        assert_eq!(stats.total(), 4);
        assert_eq!(stats.count(FacetValue::Type(CardType::Dragon)), 2);
        assert_eq!(stats.count(FacetValue::Type(CardType::Cave)), 2);
        assert_eq!(stats.count(FacetValue::Personality(Personality::Shy)), 2);
        assert_eq!(stats.count(FacetValue::Cost(CostFacet::Egg)), 2);
        assert_eq!(stats.count(FacetValue::Cost(CostFacet::Gold)), 1);
        assert_eq!(stats.count(FacetValue::Cost(CostFacet::NoResourceCost)), 1);
        assert_eq!(stats.count(FacetValue::Cost(CostFacet::IgnoreCost)), 1);
        assert_eq!(stats.count(FacetValue::AbilityType(AbilityType::WhenPlayed)), 1);
        assert_eq!(stats.count(FacetValue::Region(Region::CrimsonCavern)), 1);
        assert_eq!(stats.count(FacetValue::Expansion(Expansion::Base)), 4);
    }

    #[test]
    fn test_absent_values_read_zero() {
        let registry = registry();
        let stats = FacetStats::compute(&registry, &[CardId::new(3), CardId::new(99)]);

        assert_eq!(stats.total(), 1);
        assert_eq!(stats.count(FacetValue::Region(Region::AmethystAbyss)), 0);
        assert_eq!(stats.count(FacetValue::Type(CardType::Dragon)), 0);

        let sizes = stats.dimension("size");
        assert_eq!(sizes.len(), 5);
        assert!(sizes.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_empty_result() {
        let stats = FacetStats::compute(&registry(), &[]);
        assert_eq!(stats.total(), 0);
        assert!(stats.iter().all(|(_, n)| n == 0));
    }
}
