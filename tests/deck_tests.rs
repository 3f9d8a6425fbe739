//! Deck construction and shuffle integration tests.

use set_engine::cards::{Card, Deck, DeckSpec, Fill, Property, PropertyDomain};
use set_engine::core::{GameMode, GameRng};

// =============================================================================
// Construction
// =============================================================================

/// Every mode builds 3^k distinct cards for its k active properties.
#[test]
fn test_mode_deck_sizes() {
    let mut rng = GameRng::new(42);
    for mode in GameMode::ALL {
        let spec = DeckSpec::for_mode(mode, &mut rng);
        let deck = Deck::build(&spec);
        let expected = match mode {
            GameMode::Full => 81,
            _ => 27,
        };
        assert_eq!(deck.len(), expected, "mode {}", mode);
        assert_eq!(spec.deck_size(), expected);
        assert!(!deck.has_duplicates(), "mode {}", mode);
    }
}

/// Reduced specs compose: fixing two properties leaves nine cards.
#[test]
fn test_custom_spec() {
    let spec = DeckSpec::full()
        .with_domain(Property::Color, PropertyDomain::Fixed(2))
        .with_domain(Property::Fill, PropertyDomain::Absent);
    let deck = Deck::build(&spec);

    assert_eq!(deck.len(), 9);
    assert_eq!(spec.active_properties().count(), 3);
    assert!(deck.cards().iter().all(|c| c.value(Property::Color) == Some(2)));
    assert!(deck.cards().iter().all(|c| c.fill().is_none()));
}

/// Simplified mode pins every card to solid fill.
#[test]
fn test_simplified_fill() {
    let mut rng = GameRng::new(1);
    let deck = Deck::shuffled(&DeckSpec::for_mode(GameMode::Simplified, &mut rng), &mut rng);
    assert!(deck.cards().iter().all(|c| c.fill() == Some(Fill::Solid)));
}

/// Single-property modes fix one value per game, varying across games.
#[test]
fn test_single_mode_value_varies() {
    let mut rng = GameRng::new(5);
    let mut seen = [false; 3];
    for _ in 0..50 {
        let spec = DeckSpec::for_mode(GameMode::Single(Property::Shape), &mut rng);
        match spec.domain(Property::Shape) {
            PropertyDomain::Fixed(v) => seen[v as usize] = true,
            other => panic!("unexpected domain {:?}", other),
        }
    }
    assert_eq!(seen, [true; 3]);
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_exhausts_deck() {
    let mut deck = Deck::build(&DeckSpec::for_mode(GameMode::ThreeProperty, &mut GameRng::new(0)));
    let mut drawn: Vec<Card> = Vec::new();
    while let Ok(card) = deck.draw() {
        drawn.push(card);
    }
    assert_eq!(drawn.len(), 27);
    assert!(deck.is_empty());
    assert!(deck.draw().is_err());
}

// =============================================================================
// Shuffle
// =============================================================================

/// Same seed, same order. Different seed, different order.
#[test]
fn test_shuffle_determinism() {
    let spec = DeckSpec::full();
    let a = Deck::shuffled(&spec, &mut GameRng::new(99));
    let b = Deck::shuffled(&spec, &mut GameRng::new(99));
    let c = Deck::shuffled(&spec, &mut GameRng::new(100));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(!a.has_duplicates());
}

/// Chi-square test: each card lands in the top position uniformly.
#[test]
fn test_shuffle_uniformity() {
    let spec = DeckSpec::for_mode(GameMode::ThreeProperty, &mut GameRng::new(0));
    let reference = Deck::build(&spec);
    let n = reference.len();
    let trials = 10_000;

    let mut rng = GameRng::new(2024);
    let mut counts = vec![0u32; n];
    for _ in 0..trials {
        let deck = Deck::shuffled(&spec, &mut rng);
        let top = *deck.cards().last().unwrap();
        let index = reference.cards().iter().position(|c| *c == top).unwrap();
        counts[index] += 1;
    }

    let expected = trials as f64 / n as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 26 degrees of freedom; p = 0.001 critical value is about 54.05.
    assert!(chi_square < 60.0, "chi-square {} too large", chi_square);
}
