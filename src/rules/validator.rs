//! Set validity.
//!
//! Three cards form a set when, for every property, their values are all
//! the same or all different. Two-equal-one-different on any single
//! property invalidates the whole triple.

use crate::cards::{Card, Property};

/// Count distinct values among three.
fn distinct<T: PartialEq>(a: T, b: T, c: T) -> usize {
    match (a == b, b == c, a == c) {
        (true, true, _) => 1,
        (false, false, false) => 3,
        _ => 2,
    }
}

/// Check whether three cards form a set.
///
/// Properties absent from all three cards count as "all the same".
///
/// ```
/// use set_engine::cards::{Card, Color, Fill, Shape};
/// use set_engine::rules::is_valid_set;
///
/// let a = Card::new(1, Shape::Oval, Color::Red, Fill::Solid);
/// let b = Card::new(2, Shape::Oval, Color::Red, Fill::Solid);
/// let c = Card::new(3, Shape::Oval, Color::Red, Fill::Solid);
/// assert!(is_valid_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    Property::ALL
        .into_iter()
        .all(|p| distinct(a.value(p), b.value(p), c.value(p)) != 2)
}

/// [`is_valid_set`] over an array of three cards.
#[must_use]
pub fn is_valid_triple(cards: &[Card; 3]) -> bool {
    is_valid_set(&cards[0], &cards[1], &cards[2])
}
