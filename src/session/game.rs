//! Game session state machine.
//!
//! A `Session` owns the deck, the board, the selection and the clock of a
//! single player's game. All operations run to completion synchronously;
//! the only deferred work is timer tasks, which the host fires through
//! [`Session::advance_time`].
//!
//! ## Lifecycle
//!
//! ```text
//! new_game ──► dealing ──► Playing { selected: 0..=3 } ──► GameOver
//!                 ▲               │ set found / deal more
//!                 └───────────────┘
//! ```
//!
//! The board always holds at least one set while the game is running.
//! Dealing keeps going past the target size until that holds, and the game
//! ends as soon as the deck can no longer restore it.
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::{GameMode, SessionConfig};
//! use set_engine::session::{SelectOutcome, Session};
//!
//! let mut session = Session::new(SessionConfig::default().with_mode(GameMode::Full).with_seed(42));
//! assert!(session.board().len() >= 12);
//!
//! let [a, b, c] = session.hint().unwrap();
//! session.toggle_select(a).unwrap();
//! session.toggle_select(b).unwrap();
//! assert_eq!(session.toggle_select(c), Ok(SelectOutcome::SetFound));
//! assert_eq!(session.sets_found(), 1);
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::events::{EventRecord, GameEvent};
use super::selection::{Selection, SET_SIZE};
use super::timers::{TimerId, TimerQueue, TimerTask};
use super::view::{BoardView, Presenter};
use crate::cards::{Card, Deck, DeckSpec};
use crate::core::{CardId, GameMode, GameRng, MissPolicy, SessionConfig};
use crate::error::GameError;
use crate::rules::{board_has_set, find_set, is_valid_triple};

/// Posted when the selected triple is a set.
pub const MSG_SET_FOUND: &str = "Set found!";
/// Posted when the selected triple is not a set.
pub const MSG_NOT_A_SET: &str = "Not a valid set";
/// Posted when a card is selected after the game ended.
pub const MSG_NO_MORE_SETS: &str = "No more sets";

/// A face-up card and its board identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSlot {
    pub id: CardId,
    pub card: Card,
}

impl BoardSlot {
    #[must_use]
    pub fn new(id: CardId, card: Card) -> Self {
        Self { id, card }
    }
}

impl AsRef<Card> for BoardSlot {
    fn as_ref(&self) -> &Card {
        &self.card
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Game running with `selected` cards highlighted.
    Playing { selected: usize },
    GameOver,
}

/// Result of toggling a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Card added; fewer than three selected.
    Selected,
    /// Card was selected and has been released.
    Deselected,
    /// Three cards already held; the click was ignored.
    Ignored,
    /// Third card completed a set; it has been replaced or removed.
    SetFound,
    /// Third card did not complete a set.
    NotASet,
    /// The game is over; nothing changed.
    Rejected,
}

/// A single game of Set.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    mode: GameMode,
    rng: GameRng,

    deck: Deck,
    board: Vec<BoardSlot>,
    selection: Selection,
    target_size: usize,
    game_over: bool,
    next_id: CardId,
    sets_found: u32,

    // Display state touched by timers
    status: Option<String>,
    status_timer: Option<TimerId>,
    tick_timer: Option<TimerId>,
    elapsed: Duration,
    timers: TimerQueue,

    history: Vector<EventRecord>,
    presented: usize,
}

impl Session {
    /// Create a session and deal the first game in `config.mode`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_random_seed, GameRng::new);
        let mode = config.mode;
        let mut session = Self::empty(config, rng);
        session.new_game(mode);
        session
    }

    /// Create a session whose first game deals from `deck` as given.
    ///
    /// The deck is not shuffled; its last card is dealt first. Useful for
    /// replaying a known deal.
    #[must_use]
    pub fn from_deck(config: SessionConfig, mode: GameMode, deck: Deck) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_random_seed, GameRng::new);
        let mut session = Self::empty(config, rng);
        session.new_game_with_deck(mode, deck);
        session
    }

    fn empty(config: SessionConfig, rng: GameRng) -> Self {
        Self {
            mode: config.mode,
            target_size: config.target_for(config.mode),
            config,
            rng,
            deck: Deck::default(),
            board: Vec::new(),
            selection: Selection::new(),
            game_over: false,
            next_id: CardId::new(0),
            sets_found: 0,
            status: None,
            status_timer: None,
            tick_timer: None,
            elapsed: Duration::ZERO,
            timers: TimerQueue::new(),
            history: Vector::new(),
            presented: 0,
        }
    }

    // === Inbound operations ===

    /// Start over with a freshly built and shuffled deck.
    ///
    /// Always allowed, including mid-game and after game over.
    pub fn new_game(&mut self, mode: GameMode) {
        let spec = DeckSpec::for_mode(mode, &mut self.rng);
        let deck = Deck::shuffled(&spec, &mut self.rng);
        self.new_game_with_deck(mode, deck);
    }

    /// Start over dealing from `deck` in its current order.
    ///
    /// The event history restarts with the new game.
    pub fn new_game_with_deck(&mut self, mode: GameMode, deck: Deck) {
        self.mode = mode;
        self.target_size = self.config.target_for(mode);
        self.deck = deck;
        self.board.clear();
        self.selection.clear();
        self.game_over = false;
        self.sets_found = 0;
        self.elapsed = Duration::ZERO;
        self.status = None;
        self.status_timer = None;
        self.timers.cancel_all();
        self.tick_timer = Some(self.timers.schedule(self.config.tick_interval, TimerTask::Tick));
        self.history.clear();
        self.presented = 0;

        self.record(GameEvent::GameStarted {
            mode,
            deck_size: self.deck.len(),
        });

        while self.board.len() < self.target_size && self.deck.len() >= SET_SIZE {
            self.deal_batch();
        }
        self.replenish();
    }

    /// Select or deselect a board card.
    ///
    /// Returns `Err(UnknownCard)` for an id that is not on the board while
    /// the game is running.
    pub fn toggle_select(&mut self, id: CardId) -> Result<SelectOutcome, GameError> {
        if self.game_over {
            self.notify(MSG_NO_MORE_SETS);
            self.record(GameEvent::Rejected(id));
            return Ok(SelectOutcome::Rejected);
        }
        if self.position(id).is_none() {
            return Err(GameError::UnknownCard(id));
        }

        if self.selection.remove(id) {
            self.record(GameEvent::Deselected(id));
            return Ok(SelectOutcome::Deselected);
        }
        if !self.selection.push(id) {
            return Ok(SelectOutcome::Ignored);
        }
        let board = &self.board;
        self.selection
            .sort_by_key(|selected| board.iter().position(|slot| slot.id == *selected));
        self.record(GameEvent::Selected(id));

        let Some(triple) = self.selection.triple() else {
            return Ok(SelectOutcome::Selected);
        };
        let cards = self.cards_of(triple)?;

        if is_valid_triple(&cards) {
            self.sets_found += 1;
            self.record(GameEvent::SetFound(triple));
            self.notify(MSG_SET_FOUND);
            self.resolve_match(triple);
            self.selection.clear();
            Ok(SelectOutcome::SetFound)
        } else {
            self.record(GameEvent::NotASet(triple));
            self.notify(MSG_NOT_A_SET);
            if self.config.miss_policy == MissPolicy::Clear {
                self.selection.clear();
            }
            Ok(SelectOutcome::NotASet)
        }
    }

    /// Deal three extra cards on request.
    ///
    /// Returns false when the game is over or fewer than three cards remain.
    pub fn deal_more(&mut self) -> bool {
        if self.game_over || self.deck.len() < SET_SIZE {
            return false;
        }
        self.deal_batch();
        true
    }

    /// Advance the virtual clock, firing due timer tasks in order.
    pub fn advance_time(&mut self, dt: Duration) {
        let until = self.timers.now() + dt;
        while let Some((id, task)) = self.timers.pop_due(until) {
            match task {
                TimerTask::ClearStatus => {
                    if self.status_timer == Some(id) {
                        self.status_timer = None;
                        self.status = None;
                        self.record(GameEvent::StatusCleared);
                    }
                }
                TimerTask::Tick => {
                    if self.tick_timer == Some(id) && !self.game_over {
                        self.elapsed += self.config.tick_interval;
                        self.tick_timer =
                            Some(self.timers.schedule(self.config.tick_interval, TimerTask::Tick));
                    }
                }
            }
        }
        self.timers.settle(until);
    }

    /// Replay unseen events into a presenter, then render the board.
    pub fn present<P: Presenter>(&mut self, presenter: &mut P) {
        let mut game_over = false;
        for record in self.history.iter().skip(self.presented) {
            match &record.event {
                GameEvent::Notified(text) => {
                    presenter.show_notification(text, self.config.notification_delay);
                }
                GameEvent::StatusCleared => presenter.clear_notification(),
                GameEvent::GameOver => game_over = true,
                _ => {}
            }
        }
        self.presented = self.history.len();

        presenter.render_board(&self.view());
        if game_over {
            presenter.show_game_over();
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Seed of the session RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn board(&self) -> &[BoardSlot] {
        &self.board
    }

    /// Card values on the board, in board order.
    #[must_use]
    pub fn board_cards(&self) -> Vec<Card> {
        self.board.iter().map(|slot| slot.card).collect()
    }

    /// Look up a board card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.board.iter().find(|slot| slot.id == id).map(|slot| slot.card)
    }

    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        self.selection.as_slice()
    }

    #[must_use]
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Playing {
                selected: self.selection.len(),
            }
        }
    }

    /// Current status notification, if one is showing.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Time counted by the elapsed-time tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Virtual clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.sets_found
    }

    /// Ids of the first set on the board, if any.
    #[must_use]
    pub fn hint(&self) -> Option<[CardId; 3]> {
        find_set(&self.board).map(|[i, j, k]| [self.board[i].id, self.board[j].id, self.board[k].id])
    }

    /// Everything that has happened in the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            mode: self.mode,
            cards: self.board.clone(),
            selected: self.selection.as_slice().to_vec(),
            deck_remaining: self.deck.len(),
            game_over: self.game_over,
            status: self.status.clone(),
            elapsed_secs: self.elapsed.as_secs(),
            sets_found: self.sets_found,
        }
    }

    // === Internals ===

    fn position(&self, id: CardId) -> Option<usize> {
        self.board.iter().position(|slot| slot.id == id)
    }

    fn cards_of(&self, ids: [CardId; 3]) -> Result<[Card; 3], GameError> {
        let lookup = |id: CardId| self.card(id).ok_or(GameError::UnknownCard(id));
        Ok([lookup(ids[0])?, lookup(ids[1])?, lookup(ids[2])?])
    }

    fn has_set(&self) -> bool {
        board_has_set(&self.board)
    }

    /// Replace or remove each matched card, then restore the set invariant.
    fn resolve_match(&mut self, ids: [CardId; 3]) {
        for id in ids {
            let Some(pos) = self.position(id) else {
                continue;
            };
            if !self.deck.is_empty() && self.board.len() <= self.target_size {
                let slot = self.draw_slot();
                self.board[pos] = slot;
                self.record(GameEvent::Replaced { old: id, new: slot.id });
            } else {
                self.board.remove(pos);
                self.record(GameEvent::Removed(id));
            }
        }
        self.replenish();
    }

    /// Deal until the board holds a set; end the game if the deck cannot.
    fn replenish(&mut self) {
        while !self.has_set() && self.deck.len() >= SET_SIZE {
            self.deal_batch();
        }
        if !self.has_set() {
            self.declare_game_over();
        }
    }

    fn deal_batch(&mut self) {
        let mut dealt: SmallVec<[CardId; 3]> = SmallVec::new();
        for _ in 0..SET_SIZE {
            let slot = self.draw_slot();
            dealt.push(slot.id);
            self.board.push(slot);
        }
        self.record(GameEvent::Dealt { cards: dealt });
    }

    fn draw_slot(&mut self) -> BoardSlot {
        let card = self
            .deck
            .draw()
            .expect("deck length is checked before every draw");
        let id = self.next_id;
        self.next_id = id.next();
        BoardSlot::new(id, card)
    }

    fn declare_game_over(&mut self) {
        self.game_over = true;
        if let Some(tick) = self.tick_timer.take() {
            self.timers.cancel(tick);
        }
        self.record(GameEvent::GameOver);
    }

    /// Post a status message; it replaces any pending one.
    fn notify(&mut self, text: &str) {
        if let Some(pending) = self.status_timer.take() {
            self.timers.cancel(pending);
        }
        self.status = Some(text.to_string());
        self.status_timer = Some(
            self.timers
                .schedule(self.config.notification_delay, TimerTask::ClearStatus),
        );
        self.record(GameEvent::Notified(text.to_string()));
    }

    fn record(&mut self, event: GameEvent) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(EventRecord::new(sequence, self.timers.now(), event));
    }
}
