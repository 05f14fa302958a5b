//! Game configuration.
//!
//! Fixed for the lifetime of a game:
//! - `player_count`: more than 2, at most 255
//! - `dice_count`: 1 to 26 (one letter label per die)
//! - `max_rolls`: rolls each player may make per round

use serde::{Deserialize, Serialize};

use super::die::MAX_DICE;
use super::error::ConfigError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (3-255).
    pub player_count: usize,

    /// Number of shared dice.
    pub dice_count: usize,

    /// Rolls allowed per player per round.
    pub max_rolls: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            dice_count: 5,
            max_rolls: 3,
        }
    }
}

impl GameConfig {
    /// Create a new game configuration.
    ///
    /// Not validated until [`validate`](Self::validate) or game creation.
    pub fn new(player_count: usize, dice_count: usize, max_rolls: u32) -> Self {
        Self {
            player_count,
            dice_count,
            max_rolls,
        }
    }

    /// Set the player count.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the dice count.
    #[must_use]
    pub fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the per-round roll limit.
    #[must_use]
    pub fn with_max_rolls(mut self, rolls: u32) -> Self {
        self.max_rolls = rolls;
        self
    }

    /// Check the configuration can build a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count <= 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > u8::MAX as usize {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.dice_count == 0 {
            return Err(ConfigError::NoDice);
        }
        if self.dice_count > MAX_DICE {
            return Err(ConfigError::TooManyDice(self.dice_count));
        }
        Ok(())
    }
}
