//! Set rules: triple validation and board search.
//!
//! Both are pure functions over [`Card`](crate::cards::Card) values. The
//! session calls into them but never reimplements the rule.

pub mod search;
pub mod validator;

pub use search::{board_has_set, count_sets, find_set};
pub use validator::{is_valid_set, is_valid_triple};
