//! Core engine types: card ids, RNG, configuration.
//!
//! This module contains the building blocks shared by the deck model and
//! the session. Games choose a `GameMode` rather than modifying the core.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{GameMode, MissPolicy, SessionConfig, FULL_BOARD_SIZE, SMALL_BOARD_SIZE};
