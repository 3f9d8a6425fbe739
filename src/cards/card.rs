//! The card value type.
//!
//! A `Card` is an immutable tuple with one value per property. Properties
//! that are absent in the current game mode hold `None`. Cards are plain
//! `Copy` values compared structurally; board identity lives in
//! [`CardId`](crate::core::CardId).
//!
//! ```
//! use set_engine::cards::{Card, Color, Fill, Shape};
//!
//! let card = Card::new(2, Shape::Oval, Color::Red, Fill::Striped);
//! assert_eq!(card.number(), Some(2));
//! assert_eq!(card.to_string(), "2 red striped ovals");
//! ```

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Fill, Property, Shape, PROPERTY_COUNT, VALUES_PER_PROPERTY};
use crate::error::GameError;

/// A card: one optional value index per property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    values: [Option<u8>; PROPERTY_COUNT],
}

/// Unchecked wire form of a card; validated on the way in.
#[derive(Deserialize)]
struct RawCard {
    values: [Option<u8>; PROPERTY_COUNT],
}

impl TryFrom<RawCard> for Card {
    type Error = GameError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_from_values(raw.values)
    }
}

impl Card {
    /// Create a four-property card. `number` is 1-based (1..=3).
    #[must_use]
    pub fn new(number: u8, shape: Shape, color: Color, fill: Fill) -> Self {
        assert!((1..=3).contains(&number), "Card number must be 1-3, got {}", number);
        Self {
            values: [
                Some(number - 1),
                Some(shape.index()),
                Some(color.index()),
                Some(fill.index()),
            ],
        }
    }

    /// Create a three-property card with no fill.
    #[must_use]
    pub fn without_fill(number: u8, shape: Shape, color: Color) -> Self {
        let mut card = Self::new(number, shape, color, Fill::Solid);
        card.values[Property::Fill.index()] = None;
        card
    }

    /// Create a card from raw value indices in property order.
    ///
    /// Panics if any present value is outside `0..3`.
    #[must_use]
    pub fn from_values(values: [Option<u8>; PROPERTY_COUNT]) -> Self {
        for value in values.iter().flatten() {
            assert!(
                *value < VALUES_PER_PROPERTY,
                "Property value {} out of range",
                value
            );
        }
        Self { values }
    }

    /// Like [`from_values`](Card::from_values), but reports an out-of-range
    /// value instead of panicking.
    pub fn try_from_values(values: [Option<u8>; PROPERTY_COUNT]) -> Result<Self, GameError> {
        match values.iter().flatten().find(|v| **v >= VALUES_PER_PROPERTY) {
            Some(&value) => Err(GameError::InvalidValue(value)),
            None => Ok(Self { values }),
        }
    }

    /// Raw value indices in property order.
    #[must_use]
    pub fn values(&self) -> [Option<u8>; PROPERTY_COUNT] {
        self.values
    }

    /// Value index of a property, `None` if the property is absent.
    #[must_use]
    pub fn value(&self, property: Property) -> Option<u8> {
        self.values[property.index()]
    }

    /// Symbol count (1-based).
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        self.value(Property::Number).map(|v| v + 1)
    }

    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        self.value(Property::Shape).map(Shape::from_index)
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.value(Property::Color).map(Color::from_index)
    }

    #[must_use]
    pub fn fill(&self) -> Option<Fill> {
        self.value(Property::Fill).map(Fill::from_index)
    }

    /// The unique card that completes a set with `a` and `b`.
    ///
    /// Per property, equal values stay equal and two different values
    /// call for the remaining third one. Returns `None` when a property is
    /// present on one card and absent on the other, since no third card
    /// can make that property all-same or all-different.
    #[must_use]
    pub fn complete(a: &Card, b: &Card) -> Option<Card> {
        let mut values = [None; PROPERTY_COUNT];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = match (a.values[i], b.values[i]) {
                (None, None) => None,
                (Some(x), Some(y)) => Some((2 * VALUES_PER_PROPERTY - x - y) % VALUES_PER_PROPERTY),
                _ => return None,
            };
        }
        Some(Card { values })
    }
}

impl AsRef<Card> for Card {
    fn as_ref(&self) -> &Card {
        self
    }
}

impl std::fmt::Display for Card {
    /// Formats as "2 red striped ovals", skipping absent properties.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words: Vec<String> = Vec::with_capacity(PROPERTY_COUNT);
        if let Some(n) = self.number() {
            words.push(n.to_string());
        }
        if let Some(color) = self.color() {
            words.push(color.name().to_string());
        }
        if let Some(fill) = self.fill() {
            words.push(fill.name().to_string());
        }
        if let Some(shape) = self.shape() {
            let plural = self.number().map_or(false, |n| n > 1);
            words.push(if plural {
                format!("{}s", shape.name())
            } else {
                shape.name().to_string()
            });
        }
        f.write_str(&words.join(" "))
    }
}
