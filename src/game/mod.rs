//! The dice game: turn orchestration, scoring, and standings.
//!
//! Each player takes one turn per round, rolling the shared dice up to
//! `max_rolls` times and holding dice between rolls. A turn scores only
//! if the dice show a 4, a 5 and a 6; the score is the sum of all faces
//! minus 15. The round's high scorers are credited a win.

pub mod engine;
pub mod phase;
pub mod scoring;
pub mod snapshot;
pub mod standings;

pub use engine::{DicePool, Game, AUTO_HOLD_ORDER};
pub use phase::RoundPhase;
pub use snapshot::GameSnapshot;
pub use standings::Standings;
