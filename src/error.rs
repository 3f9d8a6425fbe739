//! Engine error types.
//!
//! The rules engine has almost nothing fallible at its boundary: an invalid
//! triple is a normal game outcome, not an error. What remains is misuse of
//! the API (drawing from an empty deck, selecting a card that isn't on the
//! board), parsing mode names and decoding malformed cards.

use crate::core::CardId;

/// Errors returned by deck and session operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    #[error("{0} is not on the board")]
    UnknownCard(CardId),
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),
    #[error("property value {0} out of range")]
    InvalidValue(u8),
}
