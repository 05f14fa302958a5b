//! Error types for game construction and driver misuse.

use thiserror::Error;

use super::player::PlayerNumber;

/// Rejected game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a game needs more than 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),
    #[error("a game needs at least one die")]
    NoDice,
    #[error("at most 26 dice supported, got {0}")]
    TooManyDice(usize),
}

/// Errors reported by [`Game`](crate::game::Game) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("no round has been started")]
    RoundNotStarted,
    #[error("{player} has used {rolls_used} of {max_rolls} rolls")]
    NoRollsRemaining {
        player: PlayerNumber,
        rolls_used: u32,
        max_rolls: u32,
    },
    #[error("every die is held")]
    AllDiceHeld,
    #[error("standings for this round were already recorded")]
    StandingsAlreadyRecorded,
    #[error("snapshot does not match its configuration")]
    InvalidSnapshot,
}
