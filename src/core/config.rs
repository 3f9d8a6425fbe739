//! Game configuration types.
//!
//! - `GameMode`: Which properties are in play and how big the board is
//! - `MissPolicy`: What happens to the selection after an invalid triple
//! - `SessionConfig`: Everything a session needs at startup
//!
//! The rules never hardcode a board size or a deck shape - modes define them.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Property;
use crate::error::GameError;

/// Board size for modes using all four properties.
pub const FULL_BOARD_SIZE: usize = 12;

/// Board size for the reduced 27-card modes.
pub const SMALL_BOARD_SIZE: usize = 9;

/// Deck and board shape of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// All four properties with three values each: 81 cards, 12 on the board.
    Full,
    /// Fill fixed to solid: 27 cards, 9 on the board.
    Simplified,
    /// Fill removed from the cards: 27 cards, 9 on the board.
    ThreeProperty,
    /// One property collapsed to a single random value (picked once per
    /// game): 27 cards, 12 on the board.
    Single(Property),
}

impl GameMode {
    /// Every mode, in menu order.
    pub const ALL: [GameMode; 7] = [
        GameMode::Full,
        GameMode::Simplified,
        GameMode::ThreeProperty,
        GameMode::Single(Property::Number),
        GameMode::Single(Property::Shape),
        GameMode::Single(Property::Color),
        GameMode::Single(Property::Fill),
    ];

    /// Number of face-up cards the dealer aims for.
    #[must_use]
    pub const fn target_board_size(self) -> usize {
        match self {
            GameMode::Full | GameMode::Single(_) => FULL_BOARD_SIZE,
            GameMode::Simplified | GameMode::ThreeProperty => SMALL_BOARD_SIZE,
        }
    }

    /// Mode name as accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            GameMode::Full => "full".to_string(),
            GameMode::Simplified => "simplified".to_string(),
            GameMode::ThreeProperty => "three-property".to_string(),
            GameMode::Single(property) => format!("single-{}", property.name()),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "full" => Ok(GameMode::Full),
            "simple" | "simplified" => Ok(GameMode::Simplified),
            "three-property" | "three" => Ok(GameMode::ThreeProperty),
            other => other
                .strip_prefix("single-")
                .and_then(Property::from_name)
                .map(GameMode::Single)
                .ok_or_else(|| GameError::UnknownMode(s.to_string())),
        }
    }
}

/// Selection handling after three cards that do not form a set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissPolicy {
    /// Clear the selection after every evaluated triple.
    #[default]
    Clear,
    /// Keep the three cards selected; the player deselects one to retry.
    Retain,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mode of the first game.
    pub mode: GameMode,

    /// RNG seed. `None` draws a random seed.
    pub seed: Option<u64>,

    /// Selection handling after a miss.
    pub miss_policy: MissPolicy,

    /// Overrides the mode's target board size when set.
    pub target_board_size: Option<usize>,

    /// How long a status notification stays up.
    pub notification_delay: Duration,

    /// Interval of the elapsed-time tick.
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Simplified,
            seed: None,
            miss_policy: MissPolicy::Clear,
            target_board_size: None,
            notification_delay: Duration::from_millis(1000),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Set the mode of the first game.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_miss_policy(mut self, policy: MissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }

    /// Override the target board size for every mode.
    #[must_use]
    pub fn with_target_board_size(mut self, size: usize) -> Self {
        assert!(size >= 3, "Target board size must be at least 3");
        self.target_board_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_notification_delay(mut self, delay: Duration) -> Self {
        self.notification_delay = delay;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Target board size for a mode, honoring the override.
    #[must_use]
    pub fn target_for(&self, mode: GameMode) -> usize {
        self.target_board_size.unwrap_or_else(|| mode.target_board_size())
    }
}
