//! Full-text index over the catalog.
//!
//! Each indexed field (name, ability text, printed number) is tokenized into
//! lowercase alphanumeric runs, and every substring of every token becomes a
//! posting key. A query term therefore matches any card with a token that
//! contains it, so "emb" finds "Ember" and "ember" finds "Embers".
//!
//! Multi-term queries are conjunctive within a field and disjunctive across
//! fields: a card matches when all terms hit the same field.
//!
//! The index is built once and is read-only afterwards.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::info;

use crate::cards::{Card, CardId, CardRegistry};

/// A card field covered by the text index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexedField {
    /// Card name.
    Name,
    /// Ability text.
    Ability,
    /// Printed card number.
    Number,
}

impl IndexedField {
    /// All indexed fields.
    pub const ALL: [IndexedField; 3] = [
        IndexedField::Name,
        IndexedField::Ability,
        IndexedField::Number,
    ];

    fn text(self, card: &Card) -> &str {
        match self {
            IndexedField::Name => &card.name,
            IndexedField::Ability => &card.ability,
            IndexedField::Number => &card.number,
        }
    }
}

type Postings = SmallVec<[CardId; 4]>;

#[derive(Clone, Debug, Default)]
struct FieldIndex {
    postings: FxHashMap<Box<str>, Postings>,
}

impl FieldIndex {
    fn add(&mut self, id: CardId, text: &str) {
        let mut keys: FxHashSet<String> = FxHashSet::default();
        for token in tokenize(text) {
            keys.extend(substrings(&token).map(str::to_string));
        }
        for key in keys {
            self.postings.entry(key.into_boxed_str()).or_default().push(id);
        }
    }

    /// Cards where every term is contained in some token of this field.
    fn matching(&self, terms: &[String]) -> FxHashSet<CardId> {
        let mut terms = terms.iter();
        let Some(first) = terms.next() else {
            return FxHashSet::default();
        };
        let mut hits: FxHashSet<CardId> = match self.postings.get(first.as_str()) {
            Some(ids) => ids.iter().copied().collect(),
            None => return FxHashSet::default(),
        };
        for term in terms {
            match self.postings.get(term.as_str()) {
                Some(ids) => hits.retain(|id| ids.contains(id)),
                None => return FxHashSet::default(),
            }
            if hits.is_empty() {
                break;
            }
        }
        hits
    }
}

/// Inverted index over card name, ability text, and number.
///
/// ## Example
///
/// ```
/// use dragon_search::cards::{Card, CardId, CardRegistry};
/// use dragon_search::search::TextIndex;
///
/// let registry = CardRegistry::from_cards(vec![
///     Card::dragon(CardId::new(1), "Ember").with_ability("Gain an egg."),
///     Card::cave(CardId::new(2), "Hollow"),
/// ])
/// .unwrap();
/// let index = TextIndex::build(&registry);
///
/// assert!(index.search("EMB").contains(&CardId::new(1)));
/// assert!(index.search("ember").len() == 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextIndex {
    fields: [FieldIndex; 3],
}

impl TextIndex {
    /// Index every card in the registry.
    pub fn build(registry: &CardRegistry) -> Self {
        let mut index = Self::default();
        for card in registry.iter() {
            index.add(card);
        }
        info!(
            cards = registry.len(),
            keys = index.key_count(),
            "text index built"
        );
        index
    }

    fn add(&mut self, card: &Card) {
        for (field, slot) in IndexedField::ALL.iter().zip(self.fields.iter_mut()) {
            slot.add(card.id, field.text(card));
        }
    }

    /// Cards whose indexed text matches `text`.
    ///
    /// Case-insensitive; each term may match part of a word. The result is
    /// deduplicated and unordered. Text without any alphanumeric token
    /// (including blank text) matches nothing here; callers treat blank
    /// text as "all cards" before reaching the index.
    pub fn search(&self, text: &str) -> FxHashSet<CardId> {
        let terms: Vec<String> = tokenize(text).collect();
        let mut found = FxHashSet::default();
        for field in &self.fields {
            found.extend(field.matching(&terms));
        }
        found
    }

    /// Cards matching `text` in one specific field.
    pub fn search_field(&self, field: IndexedField, text: &str) -> FxHashSet<CardId> {
        let terms: Vec<String> = tokenize(text).collect();
        let slot = IndexedField::ALL
            .iter()
            .position(|f| *f == field)
            .map(|i| &self.fields[i]);
        slot.map(|f| f.matching(&terms)).unwrap_or_default()
    }

    /// Total number of distinct posting keys across fields.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.fields.iter().map(|f| f.postings.len()).sum()
    }
}

/// Split text into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Every non-empty substring of `token`, on char boundaries.
fn substrings(token: &str) -> impl Iterator<Item = &str> {
    let bounds: Vec<usize> = token
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(token.len()))
        .collect();
    let n = bounds.len();
    (0..n).flat_map(move |start| {
        let bounds = bounds.clone();
        (start + 1..n).map(move |end| &token[bounds[start]..bounds[end]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CardRegistry {
        CardRegistry::from_cards(vec![
            Card::dragon(CardId::new(1), "Ember")
                .with_number(5)
                .with_ability("When played, lay an egg."),
            Card::dragon(CardId::new(2), "Ashen Wyrm")
                .with_number(12)
                .with_ability("Gain 1 ember token."),
            Card::cave(CardId::new(3), "Crystal Hollow").with_number(120),
        ])
        .unwrap()
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<String> = tokenize("When played, lay an EGG!").collect();
        assert_eq!(tokens, vec!["when", "played", "lay", "an", "egg"]);
        assert_eq!(tokenize("  ,, ").count(), 0);
    }

    #[test]
    fn test_substrings() {
        let subs: Vec<&str> = substrings("abc").collect();
        assert_eq!(subs, vec!["a", "ab", "abc", "b", "bc", "c"]);

        let subs: Vec<&str> = substrings("éa").collect();
        assert_eq!(subs, vec!["é", "éa", "a"]);
    }

    #[test]
    fn test_name_and_ability_match() {
        let index = TextIndex::build(&registry());
        let hits = index.search("ember");
        assert!(hits.contains(&CardId::new(1)));
        assert!(hits.contains(&CardId::new(2)));
        assert!(!hits.contains(&CardId::new(3)));
    }

    #[test]
    fn test_case_insensitive_partial() {
        let index = TextIndex::build(&registry());
        assert_eq!(index.search("HOLL").len(), 1);
        assert!(index.search("yrm").contains(&CardId::new(2)));
    }

    #[test]
    fn test_number_field() {
        let index = TextIndex::build(&registry());
        let hits = index.search_field(IndexedField::Number, "12");
        assert!(hits.contains(&CardId::new(2)));
        assert!(hits.contains(&CardId::new(3)));
        assert!(!hits.contains(&CardId::new(1)));
    }

    #[test]
    fn test_terms_must_share_a_field() {
        let index = TextIndex::build(&registry());
        // Both terms in the ability text of card 1.
        assert_eq!(
            index.search("played egg").into_iter().collect::<Vec<_>>(),
            vec![CardId::new(1)]
        );
        // "ashen" is in a name, "egg" only in an ability: no single field has both.
        assert!(index.search("ashen egg").is_empty());
    }

    #[test]
    fn test_no_match_and_no_tokens() {
        let index = TextIndex::build(&registry());
        assert!(index.search("basilisk").is_empty());
        assert!(index.search("!!").is_empty());
    }

    #[test]
    fn test_empty_ability_indexes_as_empty() {
        let registry =
            CardRegistry::from_cards(vec![Card::cave(CardId::new(1), "Bare")]).unwrap();
        let index = TextIndex::build(&registry);
        assert!(index.search_field(IndexedField::Ability, "bare").is_empty());
        assert!(index.search("bare").contains(&CardId::new(1)));
    }
}
