//! Card model: properties, cards and decks.
//!
//! ## Key Types
//!
//! - `Property`: An axis of variation (number, shape, color, fill)
//! - `PropertyDomain`: Which values of a property a deck uses
//! - `Card`: Immutable tuple of property values
//! - `DeckSpec`: Domains for every property, resolved from a `GameMode`
//! - `Deck`: Shuffled pile of undealt cards

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{
    Color, Fill, Property, PropertyDomain, Shape, PROPERTY_COUNT, VALUES_PER_PROPERTY,
};
pub use card::Card;
pub use deck::{Deck, DeckSpec};
