//! # set-engine
//!
//! Rules engine for the pattern-matching card game Set.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The engine owns deck, board and selection state.
//!    Rendering goes through the `Presenter` trait.
//!
//! 2. **Deterministic**: Shuffles come from a seeded ChaCha RNG and timers run
//!    on a virtual clock, so every session can be replayed exactly.
//!
//! 3. **Board invariant**: While a game is running the board always holds a
//!    set. Dealing continues past the target size until it does, and the game
//!    ends the moment the deck cannot restore it.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, game modes and session configuration
//! - `cards`: Properties, cards and deck construction
//! - `rules`: Set validation and board search
//! - `session`: Game state machine, timers, event history and presentation
//! - `error`: Error type for fallible operations

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng,
    GameMode, MissPolicy, SessionConfig,
    FULL_BOARD_SIZE, SMALL_BOARD_SIZE,
};

pub use crate::cards::{
    Card, Deck, DeckSpec,
    Color, Fill, Property, PropertyDomain, Shape,
};

pub use crate::rules::{board_has_set, count_sets, find_set, is_valid_set, is_valid_triple};

pub use crate::session::{
    BoardSlot, BoardView, EventRecord, GameEvent, Phase,
    Presenter, SelectOutcome, Session, TextPresenter,
};

pub use crate::error::GameError;
