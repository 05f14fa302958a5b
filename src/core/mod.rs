//! Core engine types: dice, players, RNG, configuration, errors.
//!
//! These are plain value records. The `game` module owns and
//! orchestrates them.

pub mod die;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use die::{Die, DieId, MAX_DICE, MAX_FACE, MIN_FACE};
pub use player::{Player, PlayerNumber};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
