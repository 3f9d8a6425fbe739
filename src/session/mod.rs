//! Single-player game sessions.
//!
//! - `game`: the `Session` state machine
//! - `selection`: up to three highlighted cards
//! - `timers`: virtual-clock task queue for notifications and the tick
//! - `events`: recorded history of everything the session did
//! - `view`: snapshot and presenter boundary

pub mod events;
pub mod game;
pub mod selection;
pub mod timers;
pub mod view;

pub use events::{EventRecord, GameEvent};
pub use game::{
    BoardSlot, Phase, SelectOutcome, Session, MSG_NOT_A_SET, MSG_NO_MORE_SETS, MSG_SET_FOUND,
};
pub use selection::{Selection, SET_SIZE};
pub use timers::{TimerId, TimerQueue, TimerTask};
pub use view::{BoardView, Presenter, TextPresenter};
