//! Session bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, GameMode, MissPolicy, SessionConfig};
use crate::session::{SelectOutcome, Session};

use super::py_cards::PyCard;

/// Python wrapper for a game session.
///
/// Card ids are plain integers. The clock only moves through `advance_ms`.
#[pyclass(name = "SetGame")]
pub struct PySetGame {
    session: Session,
}

#[pymethods]
impl PySetGame {
    /// Create a session and deal the first game.
    ///
    /// # Arguments
    /// - mode: "full", "simplified", "three-property" or "single-<property>"
    /// - seed: RNG seed for deterministic games (random when omitted)
    /// - retain_on_miss: keep the selection after an invalid triple
    #[new]
    #[pyo3(signature = (mode = "simplified", seed = None, retain_on_miss = false))]
    fn new(mode: &str, seed: Option<u64>, retain_on_miss: bool) -> PyResult<Self> {
        let mode = parse_mode(mode)?;
        let mut config = SessionConfig::default().with_mode(mode);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if retain_on_miss {
            config = config.with_miss_policy(MissPolicy::Retain);
        }
        Ok(Self {
            session: Session::new(config),
        })
    }

    /// Start a new game, optionally switching mode.
    #[pyo3(signature = (mode = None))]
    fn new_game(&mut self, mode: Option<&str>) -> PyResult<()> {
        let mode = match mode {
            Some(name) => parse_mode(name)?,
            None => self.session.mode(),
        };
        self.session.new_game(mode);
        Ok(())
    }

    /// Select or deselect a card; returns the outcome name.
    fn toggle(&mut self, card_id: u32) -> PyResult<&'static str> {
        let outcome = self
            .session
            .toggle_select(CardId::new(card_id))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(match outcome {
            SelectOutcome::Selected => "selected",
            SelectOutcome::Deselected => "deselected",
            SelectOutcome::Ignored => "ignored",
            SelectOutcome::SetFound => "set_found",
            SelectOutcome::NotASet => "not_a_set",
            SelectOutcome::Rejected => "rejected",
        })
    }

    /// Deal three extra cards. Returns False when no deal was possible.
    fn deal_more(&mut self) -> bool {
        self.session.deal_more()
    }

    /// Advance the virtual clock by `ms` milliseconds.
    fn advance_ms(&mut self, ms: u64) {
        self.session.advance_time(Duration::from_millis(ms));
    }

    /// Board as a list of (id, card) pairs.
    fn board(&self) -> Vec<(u32, PyCard)> {
        self.session
            .board()
            .iter()
            .map(|slot| (slot.id.raw(), PyCard(slot.card)))
            .collect()
    }

    fn selected(&self) -> Vec<u32> {
        self.session.selection().iter().map(|id| id.raw()).collect()
    }

    fn hint(&self) -> Option<(u32, u32, u32)> {
        self.session
            .hint()
            .map(|[a, b, c]| (a.raw(), b.raw(), c.raw()))
    }

    fn deck_remaining(&self) -> usize {
        self.session.deck_remaining()
    }

    fn game_over(&self) -> bool {
        self.session.is_game_over()
    }

    fn status(&self) -> Option<String> {
        self.session.status().map(str::to_string)
    }

    fn elapsed_secs(&self) -> u64 {
        self.session.elapsed().as_secs()
    }

    fn sets_found(&self) -> u32 {
        self.session.sets_found()
    }

    #[getter]
    fn mode(&self) -> String {
        self.session.mode().name()
    }

    fn __repr__(&self) -> String {
        format!(
            "SetGame(mode={}, board={}, deck={})",
            self.session.mode(),
            self.session.board().len(),
            self.session.deck_remaining()
        )
    }
}

fn parse_mode(name: &str) -> PyResult<GameMode> {
    name.parse::<GameMode>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
