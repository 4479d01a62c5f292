//! Result ordering.
//!
//! `compare` extracts one key per `SortKey`; `compare_directed` applies the
//! direction by reversing the comparison. Callers sort with a stable sort,
//! so cards with equal keys keep catalog order in either direction.

use std::cmp::Ordering;

use crate::cards::{Card, Size};

use super::query::{SortKey, SortOrder};

/// Compare two cards by `key`, ascending.
#[must_use]
pub fn compare(a: &Card, b: &Card, key: SortKey) -> Ordering {
    match key {
        SortKey::Number => a.sort_id.cmp(&b.sort_id),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::VictoryPoints => a.vp_or_zero().cmp(&b.vp_or_zero()),
        SortKey::Size => Size::rank_of(a.size).cmp(&Size::rank_of(b.size)),
    }
}

/// Compare two cards by `key` in the given direction.
#[must_use]
pub fn compare_directed(a: &Card, b: &Card, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = compare(a, b, key);
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Case-insensitive name order, falling back to the raw strings.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn card(id: u32, name: &str) -> Card {
        Card::dragon(CardId::new(id), name).with_number(i64::from(id))
    }

    #[test]
    fn test_number() {
        let a = card(1, "B");
        let b = card(2, "A");
        assert_eq!(compare(&a, &b, SortKey::Number), Ordering::Less);
        assert_eq!(
            compare_directed(&a, &b, SortKey::Number, SortOrder::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_name_case_insensitive() {
        let a = card(1, "ember");
        let b = card(2, "Frost");
        assert_eq!(compare(&a, &b, SortKey::Name), Ordering::Less);

        let upper = card(3, "Ember");
        assert_ne!(compare(&a, &upper, SortKey::Name), Ordering::Equal);
        assert_eq!(compare(&upper, &upper.clone(), SortKey::Name), Ordering::Equal);
    }

    #[test]
    fn test_victory_points_absent_is_zero() {
        let none = card(1, "A");
        let zero = card(2, "B").with_victory_points(0);
        let three = card(3, "C").with_victory_points(3);
        assert_eq!(compare(&none, &zero, SortKey::VictoryPoints), Ordering::Equal);
        assert_eq!(compare(&none, &three, SortKey::VictoryPoints), Ordering::Less);
    }

    #[test]
    fn test_size_rank() {
        let none = card(1, "A");
        let hatchling = card(2, "B").with_size(Size::Hatchling);
        let large = card(3, "C").with_size(Size::Large);
        assert_eq!(compare(&none, &hatchling, SortKey::Size), Ordering::Less);
        assert_eq!(compare(&large, &hatchling, SortKey::Size), Ordering::Greater);
        assert_eq!(
            compare_directed(&large, &hatchling, SortKey::Size, SortOrder::Desc),
            Ordering::Less
        );
    }
}
