//! Presentation boundary.
//!
//! The engine never draws anything. A host implements [`Presenter`] and
//! calls [`Session::present`](super::Session::present) after handling an
//! input or advancing the clock; the session replays the notifications and
//! game-over events recorded since the previous call, then hands over a
//! [`BoardView`] snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::game::BoardSlot;
use crate::cards::Card;
use crate::core::{CardId, GameMode};

/// Snapshot of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub mode: GameMode,
    pub cards: Vec<BoardSlot>,
    pub selected: Vec<CardId>,
    pub deck_remaining: usize,
    pub game_over: bool,
    pub status: Option<String>,
    pub elapsed_secs: u64,
    pub sets_found: u32,
}

impl BoardView {
    #[must_use]
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selected.contains(&id)
    }
}

/// Outbound calls from the engine into a renderer.
pub trait Presenter {
    /// Visual representation of a single card.
    type Visual;

    /// Produce the visual for a card's property tuple.
    fn render_card(&mut self, card: &Card) -> Self::Visual;

    /// Display the board.
    fn render_board(&mut self, view: &BoardView);

    /// Show a transient message. The session clears it after `duration`
    /// through [`clear_notification`](Presenter::clear_notification).
    fn show_notification(&mut self, _text: &str, _duration: Duration) {}

    fn clear_notification(&mut self) {}

    /// Acknowledge the end of the game.
    fn show_game_over(&mut self) {}
}

/// Plain-text presenter. Keeps every rendered frame and message.
#[derive(Clone, Debug, Default)]
pub struct TextPresenter {
    /// Rendered boards, oldest first.
    pub frames: Vec<String>,
    /// Notifications in the order they were shown.
    pub messages: Vec<String>,
    /// Currently displayed notification.
    pub notification: Option<String>,
    pub game_over_shown: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent board frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Presenter for TextPresenter {
    type Visual = String;

    fn render_card(&mut self, card: &Card) -> String {
        card.to_string()
    }

    fn render_board(&mut self, view: &BoardView) {
        let mut out = String::new();
        for slot in &view.cards {
            let mark = if view.is_selected(slot.id) { '*' } else { ' ' };
            let visual = self.render_card(&slot.card);
            out.push_str(&format!("{} {:>4} {}\n", mark, slot.id.raw(), visual));
        }
        out.push_str(&format!("{} cards left in deck\n", view.deck_remaining));
        if let Some(status) = &view.status {
            out.push_str(status);
            out.push('\n');
        }
        self.frames.push(out);
    }

    fn show_notification(&mut self, text: &str, _duration: Duration) {
        self.messages.push(text.to_string());
        self.notification = Some(text.to_string());
    }

    fn clear_notification(&mut self) {
        self.notification = None;
    }

    fn show_game_over(&mut self) {
        self.game_over_shown = true;
    }
}
