//! Board search: does any triple on the board form a set?
//!
//! Boards are small (9 to 21 cards in practice), so an exhaustive scan of
//! all C(n, 3) triples is cheap. Triples are visited in lexicographic index
//! order `(i < j < k)`.
//!
//! The functions are generic over `AsRef<Card>` so they run on bare
//! `Card` slices as well as on board slots.

use crate::cards::Card;

use super::validator::is_valid_set;

/// Index triples `i < j < k` over `n` cards, in lexicographic order.
fn triples(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..n).flat_map(move |i| {
        ((i + 1)..n).flat_map(move |j| ((j + 1)..n).map(move |k| [i, j, k]))
    })
}

fn is_set_at<C: AsRef<Card>>(cards: &[C], [i, j, k]: [usize; 3]) -> bool {
    is_valid_set(cards[i].as_ref(), cards[j].as_ref(), cards[k].as_ref())
}

/// Indices of the first set on the board, if any.
#[must_use]
pub fn find_set<C: AsRef<Card>>(cards: &[C]) -> Option<[usize; 3]> {
    triples(cards.len()).find(|&t| is_set_at(cards, t))
}

/// Whether any three cards on the board form a set.
///
/// Always false for fewer than three cards.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::rules::board_has_set;
///
/// let empty: [Card; 0] = [];
/// assert!(!board_has_set(&empty));
/// ```
#[must_use]
pub fn board_has_set<C: AsRef<Card>>(cards: &[C]) -> bool {
    find_set(cards).is_some()
}

/// Number of distinct sets on the board.
#[must_use]
pub fn count_sets<C: AsRef<Card>>(cards: &[C]) -> usize {
    triples(cards.len()).filter(|&t| is_set_at(cards, t)).count()
}
