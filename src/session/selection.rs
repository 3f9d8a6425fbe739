//! Highlighted board cards (at most three).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Cards a set is made of.
pub const SET_SIZE: usize = 3;

/// Ordered selection of up to three board cards.
///
/// The session keeps it in board order, so toggling a card off and on
/// again restores the previous selection exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: SmallVec<[CardId; SET_SIZE]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// Add a card. Returns false if the selection is already full or the
    /// card is already selected.
    pub fn push(&mut self, id: CardId) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a card. Returns true if it was selected.
    pub fn remove(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&s| s == id) {
            self.ids.remove(pos);
            true
        } else {
            false
        }
    }

    /// Reorder the selected ids by a key, e.g. their board position.
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&CardId) -> K) {
        self.ids.sort_by_key(key);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() == SET_SIZE
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.ids
    }

    /// The three selected ids, once the selection is full.
    #[must_use]
    pub fn triple(&self) -> Option<[CardId; SET_SIZE]> {
        match self.ids.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }
}
