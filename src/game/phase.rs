//! Round state machine.
//!
//! ```text
//! NotStarted -> InTurn(p) -> TurnScored(p) -> InTurn(p + 1) -> ... -> RoundOver
//! ```
//!
//! `start_new_round` re-enters `InTurn(1)` from any state.

use serde::{Deserialize, Serialize};

use crate::core::PlayerNumber;

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started yet.
    #[default]
    NotStarted,
    /// The player is rolling and holding.
    InTurn(PlayerNumber),
    /// The player's turn has been scored.
    TurnScored(PlayerNumber),
    /// The last player has finished; standings can be computed.
    RoundOver,
}

impl RoundPhase {
    /// Has a round been started?
    #[must_use]
    pub fn is_started(self) -> bool {
        !matches!(self, RoundPhase::NotStarted)
    }

    /// Player whose turn is in progress or just scored.
    #[must_use]
    pub fn turn_player(self) -> Option<PlayerNumber> {
        match self {
            RoundPhase::InTurn(p) | RoundPhase::TurnScored(p) => Some(p),
            RoundPhase::NotStarted | RoundPhase::RoundOver => None,
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::NotStarted => write!(f, "not started"),
            RoundPhase::InTurn(p) => write!(f, "{} rolling", p),
            RoundPhase::TurnScored(p) => write!(f, "{} scored", p),
            RoundPhase::RoundOver => write!(f, "round over"),
        }
    }
}
