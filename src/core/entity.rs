//! Card identification on the board.
//!
//! Cards are compared by their property values when checking sets, but the
//! board needs a stable handle for each dealt card so that a presenter can
//! map a click back to a slot. Every card dealt by a session receives a
//! fresh `CardId`; ids are never reused within a session.
//!
//! ```
//! use set_engine::core::CardId;
//!
//! let id = CardId::new(3);
//! assert_eq!(id.raw(), 3);
//! assert_eq!(id.next(), CardId::new(4));
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a card dealt onto the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
