//! Session event history.
//!
//! Every state transition is recorded as a `GameEvent` with a sequence
//! number and the virtual time it happened at. The history serves as the
//! session's log: presenters replay it, tests assert on it, and it can be
//! serialized for debugging.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, GameMode};

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was built and shuffled.
    GameStarted { mode: GameMode, deck_size: usize },
    /// A batch of cards was appended to the board.
    Dealt { cards: SmallVec<[CardId; 3]> },
    Selected(CardId),
    Deselected(CardId),
    SetFound([CardId; 3]),
    NotASet([CardId; 3]),
    /// A matched card was replaced in place by a freshly drawn one.
    Replaced { old: CardId, new: CardId },
    /// A matched card left the board without replacement.
    Removed(CardId),
    /// A status notification was posted.
    Notified(String),
    /// The pending notification expired.
    StatusCleared,
    /// A selection was refused because the game is over.
    Rejected(CardId),
    GameOver,
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the history of the current game (0-based).
    pub sequence: u32,

    /// Virtual time at which the event happened.
    pub at: Duration,

    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(sequence: u32, at: Duration, event: GameEvent) -> Self {
        Self { sequence, at, event }
    }
}
