//! Catalog loading from the card JSON format.
//!
//! The catalog is an array of flat records as exported from the card
//! spreadsheet. Column conventions:
//!
//! - `id`: integer or numeric string, required and unique
//! - `type`, `personality`, `size`, `expansion`: vocabulary names
//! - `abilityType`: comma-separated ability tags
//! - `Crimson Cavern`, `Golden Grotto`, `Amethyst Abyss`: `"x"` marks a region
//! - `Egg` .. `Coin`: resource amounts (numbers or numeric strings)
//! - `ignoreCost`: `"x"` or `true`
//! - `VP`: victory points, optional
//! - `sort_id`: catalog order; `number`: printed number
//!
//! Identity is strict: a missing or malformed `id` is a `CatalogError`.
//! Vocabulary is lenient: an unrecognized value is logged and loaded as
//! absent, which the filter then treats like any other absent field.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::attributes::{Facet, Region, Resource};
use super::definition::{Card, CardId};
use crate::core::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ability: Option<String>,
    #[serde(default)]
    number: Option<Value>,
    #[serde(default)]
    sort_id: Option<Value>,
    #[serde(default, rename = "type")]
    card_type: Option<String>,
    #[serde(default)]
    personality: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    expansion: Option<String>,
    #[serde(default, rename = "abilityType")]
    ability_type: Option<String>,
    #[serde(default, rename = "Crimson Cavern")]
    crimson_cavern: Option<Value>,
    #[serde(default, rename = "Golden Grotto")]
    golden_grotto: Option<Value>,
    #[serde(default, rename = "Amethyst Abyss")]
    amethyst_abyss: Option<Value>,
    #[serde(default, rename = "Egg")]
    egg: Option<Value>,
    #[serde(default, rename = "Milk")]
    milk: Option<Value>,
    #[serde(default, rename = "Meat")]
    meat: Option<Value>,
    #[serde(default, rename = "Gold")]
    gold: Option<Value>,
    #[serde(default, rename = "Crystal")]
    crystal: Option<Value>,
    #[serde(default, rename = "Coin")]
    coin: Option<Value>,
    #[serde(default, rename = "ignoreCost")]
    ignore_cost: Option<Value>,
    #[serde(default, rename = "VP")]
    vp: Option<Value>,
}

/// Parse a catalog from its JSON text.
pub fn parse_catalog(json: &str) -> Result<Vec<Card>> {
    let raw: Vec<RawCard> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| convert(index, record))
        .collect()
}

/// Read and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

fn convert(index: usize, raw: RawCard) -> Result<Card> {
    let id = parse_id(index, raw.id.as_ref())?;

    let number = raw.number.as_ref().and_then(display_text);
    let sort_id = raw
        .sort_id
        .as_ref()
        .and_then(integer)
        .or_else(|| raw.number.as_ref().and_then(integer))
        .unwrap_or_else(|| i64::from(id.raw()));

    let mut card = Card::new(id, raw.name.unwrap_or_default(), vocab(id, raw.card_type.as_deref()))
        .with_ability(raw.ability.unwrap_or_default())
        .with_number(sort_id)
        .with_expansion(vocab(id, raw.expansion.as_deref()));
    if let Some(number) = number {
        card.number = number;
    }

    if let Some(size) = vocab(id, raw.size.as_deref()) {
        card = card.with_size(size);
    }
    if let Some(personality) = vocab(id, raw.personality.as_deref()) {
        card = card.with_personality(personality);
    }
    if let Some(tags) = raw.ability_type.as_deref() {
        card = card.with_ability_types(tags);
    }

    let regions = [
        (Region::CrimsonCavern, &raw.crimson_cavern),
        (Region::GoldenGrotto, &raw.golden_grotto),
        (Region::AmethystAbyss, &raw.amethyst_abyss),
    ];
    for (region, marker) in regions {
        if marker.as_ref().is_some_and(is_marked) {
            card = card.with_region(region);
        }
    }

    let amounts = [
        (Resource::Egg, &raw.egg),
        (Resource::Milk, &raw.milk),
        (Resource::Meat, &raw.meat),
        (Resource::Gold, &raw.gold),
        (Resource::Crystal, &raw.crystal),
        (Resource::Coin, &raw.coin),
    ];
    for (resource, amount) in amounts {
        let amount = amount.as_ref().map_or(0, resource_amount);
        if amount > 0 {
            card = card.with_cost(resource, amount);
        }
    }

    if raw.ignore_cost.as_ref().is_some_and(is_marked) {
        card = card.with_ignored_cost();
    }
    if let Some(vp) = raw.vp.as_ref().and_then(integer) {
        card = card.with_victory_points(vp);
    }

    Ok(card)
}

fn parse_id(index: usize, value: Option<&Value>) -> Result<CardId> {
    let value = match value {
        None | Some(Value::Null) => return Err(CatalogError::MissingId { index }),
        Some(value) => value,
    };
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) if s.trim().is_empty() => return Err(CatalogError::MissingId { index }),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.map(CardId::new).ok_or_else(|| CatalogError::InvalidId {
        index,
        value: value.to_string(),
    })
}

/// Parse a vocabulary column; blank is absent, unknown is logged and absent.
fn vocab<F: Facet + FromStr>(id: CardId, raw: Option<&str>) -> Option<F> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<F>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(card = %id, kind = F::KIND, value = raw, "unrecognized vocabulary value");
            None
        }
    }
}

fn is_marked(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("x"),
        _ => false,
    }
}

fn resource_amount(value: &Value) -> u32 {
    integer(value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, CostState, Expansion, Personality, Size};

    const EMBER: &str = r#"[{
        "id": 1,
        "name": "Ember",
        "ability": "Gain an egg.",
        "number": "5",
        "sort_id": 5,
        "type": "Dragon",
        "personality": "Shy",
        "size": "Small",
        "abilityType": "WhenPlayed",
        "Crimson Cavern": "x",
        "Golden Grotto": "",
        "Egg": 1,
        "VP": 3,
        "expansion": "base"
    }]"#;

    #[test]
    fn test_parse_full_record() {
        let cards = parse_catalog(EMBER).unwrap();
        assert_eq!(cards.len(), 1);
        let ember = &cards[0];

        assert_eq!(ember.id, CardId::new(1));
        assert_eq!(ember.name, "Ember");
        assert_eq!(ember.number, "5");
        assert_eq!(ember.sort_id, 5);
        assert_eq!(ember.card_type, Some(CardType::Dragon));
        assert_eq!(ember.personality(), Some(Personality::Shy));
        assert_eq!(ember.size, Some(Size::Small));
        assert_eq!(ember.expansion, Some(Expansion::Base));
        assert_eq!(ember.ability_tags(), &["WhenPlayed"]);
        assert!(ember.marked_for(Region::CrimsonCavern));
        assert!(!ember.marked_for(Region::GoldenGrotto));
        assert_eq!(ember.costs.amount(Resource::Egg), 1);
        assert_eq!(ember.victory_points, Some(3));
    }

    #[test]
    fn test_ignore_cost_forms() {
        let json = r#"[
            {"id": 1, "type": "Cave", "ignoreCost": "x"},
            {"id": 2, "type": "Cave", "ignoreCost": true},
            {"id": 3, "type": "Cave", "ignoreCost": ""},
            {"id": 4, "type": "Cave", "Gold": "2"}
        ]"#;
        let cards = parse_catalog(json).unwrap();
        assert_eq!(cards[0].costs.state(), CostState::Ignored);
        assert_eq!(cards[1].costs.state(), CostState::Ignored);
        assert_eq!(cards[2].costs.state(), CostState::Free);
        assert_eq!(cards[3].costs.amount(Resource::Gold), 2);
    }

    #[test]
    fn test_missing_ability_is_empty() {
        let cards = parse_catalog(r#"[{"id": "7", "name": "Quiet", "type": "Cave"}]"#).unwrap();
        assert_eq!(cards[0].id, CardId::new(7));
        assert_eq!(cards[0].ability, "");
        assert_eq!(cards[0].sort_id, 7);
    }

    #[test]
    fn test_unknown_vocabulary_is_absent() {
        let json = r#"[{"id": 1, "type": "Dragon", "size": "Colossal", "expansion": "promo"}]"#;
        let cards = parse_catalog(json).unwrap();
        assert_eq!(cards[0].size, None);
        assert_eq!(cards[0].expansion, None);
    }

    #[test]
    fn test_missing_id_is_fatal() {
        let json = r#"[{"id": 1, "name": "A"}, {"name": "B"}]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, CatalogError::MissingId { index: 1 }));

        let err = parse_catalog(r#"[{"id": null}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::MissingId { index: 0 }));
    }

    #[test]
    fn test_invalid_id() {
        let err = parse_catalog(r#"[{"id": "dragon"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { index: 0, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog("/nonexistent/cards.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
