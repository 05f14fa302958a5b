//! # dice-game
//!
//! A turn-based 4-5-6 dice game engine.
//!
//! ## Design Principles
//!
//! 1. **Driver-Led**: The engine never prompts or prints. An external
//!    driver decides when to roll, which dice to hold, and when to score.
//!
//! 2. **Deterministic**: Every game owns a seeded `GameRng`, so the same
//!    seed and the same calls replay the same game.
//!
//! 3. **Reported, Not Panicked**: Driver mistakes (rolling with no rolls
//!    left, recording standings twice) come back as `GameError`.
//!
//! ## Modules
//!
//! - `core`: Dice, players, RNG, configuration, errors
//! - `game`: Turn orchestration, scoring rule, standings, snapshots

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Die, DieId, GameConfig, GameError, GameRng, GameRngState, Player, PlayerNumber,
};

pub use crate::game::{Game, GameSnapshot, RoundPhase, Standings};
