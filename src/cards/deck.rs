//! Deck construction, shuffling and drawing.
//!
//! A deck starts as the Cartesian product of every property's domain, so a
//! full four-property deck holds `3^4 = 81` distinct cards. Reduced modes
//! shrink the product by fixing or removing a property; they never filter
//! cards out of a larger deck.
//!
//! ## Usage
//!
//! ```
//! use set_engine::cards::{Deck, DeckSpec};
//! use set_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = Deck::shuffled(&DeckSpec::full(), &mut rng);
//! assert_eq!(deck.len(), 81);
//!
//! let card = deck.draw().unwrap();
//! assert_eq!(deck.len(), 80);
//! assert!(!deck.cards().contains(&card));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::attributes::{Fill, Property, PropertyDomain, PROPERTY_COUNT, VALUES_PER_PROPERTY};
use super::card::Card;
use crate::core::{GameMode, GameRng};
use crate::error::GameError;

/// Active properties and their domains for one deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    domains: [PropertyDomain; PROPERTY_COUNT],
}

impl DeckSpec {
    /// Every property with its full domain (81 cards).
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Replace the domain of one property.
    #[must_use]
    pub fn with_domain(mut self, property: Property, domain: PropertyDomain) -> Self {
        self.domains[property.index()] = domain;
        self
    }

    /// Resolve a game mode into a deck spec.
    ///
    /// `Single` modes pick the surviving value here, once per call, so a new
    /// game gets a fresh random value and every card of that game shares it.
    #[must_use]
    pub fn for_mode(mode: GameMode, rng: &mut GameRng) -> Self {
        match mode {
            GameMode::Full => Self::full(),
            GameMode::Simplified => {
                Self::full().with_domain(Property::Fill, PropertyDomain::Fixed(Fill::Solid.index()))
            }
            GameMode::ThreeProperty => Self::full().with_domain(Property::Fill, PropertyDomain::Absent),
            GameMode::Single(property) => {
                let value = rng.gen_range_usize(0..VALUES_PER_PROPERTY as usize) as u8;
                Self::full().with_domain(property, PropertyDomain::Fixed(value))
            }
        }
    }

    /// Domain of a property.
    #[must_use]
    pub fn domain(&self, property: Property) -> PropertyDomain {
        self.domains[property.index()]
    }

    /// Properties present on the cards.
    pub fn active_properties(&self) -> impl Iterator<Item = Property> + '_ {
        Property::ALL
            .into_iter()
            .filter(move |p| self.domain(*p).is_active())
    }

    /// Number of cards in a deck built from this spec.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.domains.iter().map(|d| d.size()).product()
    }
}

/// An ordered pile of undealt cards. The top of the deck is the end of
/// the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the unshuffled Cartesian product of a spec's domains.
    ///
    /// Cards come out in lexicographic property order (number varies
    /// slowest, fill fastest).
    #[must_use]
    pub fn build(spec: &DeckSpec) -> Self {
        let mut partial: Vec<[Option<u8>; PROPERTY_COUNT]> = vec![[None; PROPERTY_COUNT]];

        for property in Property::ALL {
            let values = spec.domain(property).values();
            partial = partial
                .into_iter()
                .flat_map(|prefix| {
                    values.iter().map(move |&value| {
                        let mut next = prefix;
                        next[property.index()] = value;
                        next
                    })
                })
                .collect();
        }

        Self {
            cards: partial.into_iter().map(Card::from_values).collect(),
        }
    }

    /// Build and shuffle in one step.
    #[must_use]
    pub fn shuffled(spec: &DeckSpec, rng: &mut GameRng) -> Self {
        let mut deck = Self::build(spec);
        deck.shuffle(rng);
        deck
    }

    /// Create a deck from explicit cards, top card last.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Uniformly permute the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check whether any property tuple occurs twice.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = FxHashSet::default();
        !self.cards.iter().all(|card| seen.insert(*card))
    }
}
