//! Card properties and their value domains.
//!
//! A Set card varies along up to four independent properties, each with
//! three possible values:
//!
//! - `Number`: 1, 2 or 3 symbols
//! - `Shape`: diamond, squiggle, oval
//! - `Color`: red, green, purple
//! - `Fill`: solid, blank, striped
//!
//! Values are stored on cards as a 0-based index (`0..VALUES_PER_PROPERTY`).
//! The typed enums below convert between indices and names.
//!
//! ## Domains
//!
//! Reduced game modes restrict a property's domain: `Fixed` pins it to a
//! single value (every card shares it), `Absent` removes the property from
//! the cards altogether.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Number of properties a card can carry.
pub const PROPERTY_COUNT: usize = 4;

/// Number of values in a full property domain.
pub const VALUES_PER_PROPERTY: u8 = 3;

/// An axis of card variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Number,
    Shape,
    Color,
    Fill,
}

impl Property {
    /// All properties in card tuple order.
    pub const ALL: [Property; PROPERTY_COUNT] =
        [Property::Number, Property::Shape, Property::Color, Property::Fill];

    /// Position of this property in a card's value tuple.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Property::Number => "number",
            Property::Shape => "shape",
            Property::Color => "color",
            Property::Fill => "fill",
        }
    }

    /// Parse a lowercase property name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Display name of a value index for this property.
    ///
    /// Panics if `value` is outside the property's domain.
    #[must_use]
    pub fn value_name(self, value: u8) -> &'static str {
        match self {
            Property::Number => ["1", "2", "3"][value as usize],
            Property::Shape => Shape::from_index(value).name(),
            Property::Color => Color::from_index(value).name(),
            Property::Fill => Fill::from_index(value).name(),
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];

    /// Panics if `index >= 3`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Oval => "oval",
        }
    }
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];

    /// Panics if `index >= 3`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

/// Symbol shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Solid,
    Blank,
    Striped,
}

impl Fill {
    pub const ALL: [Fill; 3] = [Fill::Solid, Fill::Blank, Fill::Striped];

    /// Panics if `index >= 3`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Fill::Solid => "solid",
            Fill::Blank => "blank",
            Fill::Striped => "striped",
        }
    }
}

/// Which values of a property appear in a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyDomain {
    /// Every value of the property.
    #[default]
    All,
    /// A single value shared by every card.
    Fixed(u8),
    /// The property is not on the cards.
    Absent,
}

impl PropertyDomain {
    /// Values this domain contributes to the deck's Cartesian product.
    ///
    /// `Absent` contributes a single `None` so the product still has one
    /// factor for the property.
    #[must_use]
    pub fn values(self) -> SmallVec<[Option<u8>; 3]> {
        match self {
            PropertyDomain::All => (0..VALUES_PER_PROPERTY).map(Some).collect(),
            PropertyDomain::Fixed(value) => {
                assert!(
                    value < VALUES_PER_PROPERTY,
                    "Fixed property value {} out of range",
                    value
                );
                smallvec![Some(value)]
            }
            PropertyDomain::Absent => smallvec![None],
        }
    }

    /// Number of distinct values in this domain.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            PropertyDomain::All => VALUES_PER_PROPERTY as usize,
            PropertyDomain::Fixed(_) | PropertyDomain::Absent => 1,
        }
    }

    /// Whether the property appears on cards at all.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, PropertyDomain::Absent)
    }
}
