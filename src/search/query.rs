//! Query value type.
//!
//! A `Query` is a plain value owned by the caller and replaced wholesale on
//! every interaction. Any combination of fields is legal; an all-empty
//! facet set simply matches nothing on that dimension.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{
    AbilityType, CardType, CostFacet, Expansion, FacetSet, Personality, Region, Size,
};

/// Key the result list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Catalog sort id.
    #[default]
    Number,
    /// Card name.
    Name,
    /// Victory points (absent reads as 0).
    VictoryPoints,
    /// Size rank (no size reads as 0).
    Size,
}

impl SortKey {
    /// Every sort key.
    pub const ALL: [SortKey; 4] = [
        SortKey::Number,
        SortKey::Name,
        SortKey::VictoryPoints,
        SortKey::Size,
    ];

    /// Wire name: `number`, `name`, `vp`, `size`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Number => "number",
            SortKey::Name => "name",
            SortKey::VictoryPoints => "vp",
            SortKey::Size => "size",
        }
    }

    /// Parse a wire name. Unrecognized keys fall back to `Number`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .unwrap_or_default()
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire name: `asc` or `desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl From<String> for SortOrder {
    fn from(name: String) -> Self {
        if name == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}

/// A complete search request: free text, facet inclusion sets, and sort.
///
/// The default query includes every category, personality, expansion,
/// size, cost facet and ability type, requires no region, has empty text,
/// and sorts by number ascending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Free text; blank matches every card.
    pub text: String,

    /// Included categories.
    #[serde(rename = "type")]
    pub card_type: FacetSet<CardType>,

    /// Included personalities (checked for dragons only).
    pub personality: FacetSet<Personality>,

    /// Included expansions.
    pub expansion: FacetSet<Expansion>,

    /// Included sizes (checked only for cards that declare a size).
    pub size: FacetSet<Size>,

    /// Included resources and cost flags.
    pub resource: FacetSet<CostFacet>,

    /// Selected ability types; empty means "don't filter".
    pub ability_type: FacetSet<AbilityType>,

    /// Required regions; every selected region must be marked on a dragon.
    pub region: FacetSet<Region>,

    /// Sort key.
    pub sort_key: SortKey,

    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            card_type: FacetSet::all(),
            personality: FacetSet::all(),
            expansion: FacetSet::all(),
            size: FacetSet::all(),
            resource: FacetSet::all(),
            ability_type: FacetSet::all(),
            region: FacetSet::empty(),
            sort_key: SortKey::Number,
            sort_order: SortOrder::Asc,
        }
    }
}

impl Query {
    /// Set the free text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set sort key and direction (builder pattern).
    #[must_use]
    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    /// Whether the text is empty or whitespace only.
    #[must_use]
    pub fn text_is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = Query::default();
        assert!(query.text_is_blank());
        assert_eq!(query.card_type.len(), 2);
        assert_eq!(query.resource.len(), 8);
        assert_eq!(query.ability_type.len(), 4);
        assert!(query.region.is_empty());
        assert_eq!(query.sort_key, SortKey::Number);
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_whitespace_text_is_blank() {
        assert!(Query::default().with_text("  \t ").text_is_blank());
        assert!(!Query::default().with_text(" ember ").text_is_blank());
    }

    #[test]
    fn test_sort_key_parse_fallback() {
        assert_eq!(SortKey::parse("vp"), SortKey::VictoryPoints);
        assert_eq!(SortKey::parse("size"), SortKey::Size);
        assert_eq!(SortKey::parse("rarity"), SortKey::Number);
        assert_eq!(SortOrder::from("sideways".to_string()), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
    }

    #[test]
    fn test_query_json_shape() {
        let json = r#"{
            "text": "ember",
            "type": ["Dragon"],
            "region": ["Crimson Cavern"],
            "sort_key": "name",
            "sort_order": "desc"
        }"#;
        let query: Query = serde_json::from_str(json).unwrap();

        assert_eq!(query.text, "ember");
        assert!(query.card_type.contains(CardType::Dragon));
        assert!(!query.card_type.contains(CardType::Cave));
        assert!(query.region.contains(Region::CrimsonCavern));
        assert_eq!(query.personality, FacetSet::all());
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_order, SortOrder::Desc);

        let round: Query = serde_json::from_str(&serde_json::to_string(&query).unwrap()).unwrap();
        assert_eq!(round, query);
    }

    #[test]
    fn test_unknown_sort_key_in_json() {
        let query: Query = serde_json::from_str(r#"{"sort_key": "power"}"#).unwrap();
        assert_eq!(query.sort_key, SortKey::Number);
    }
}
