//! Player identification and per-player tallies.
//!
//! ## PlayerNumber
//!
//! Type-safe, 1-based player number supporting 1-255 players.
//!
//! ## Player
//!
//! Round score and roll counter, plus win/loss tallies that survive
//! across rounds.

use serde::{Deserialize, Serialize};

/// Player number, 1-based.
///
/// The first player created is `PlayerNumber(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerNumber(pub u8);

impl PlayerNumber {
    /// The first player of every round.
    pub const FIRST: PlayerNumber = PlayerNumber(1);

    /// Create a new player number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw number (1-based).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position in creation order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player numbers for a game with `player_count` players.
    ///
    /// ```
    /// use dice_game::core::PlayerNumber;
    ///
    /// let players: Vec<_> = PlayerNumber::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerNumber::new(1));
    /// assert_eq!(players[3], PlayerNumber::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerNumber> {
        (1..=player_count as u8).map(PlayerNumber)
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant.
///
/// The roll limit is enforced by the game, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    number: PlayerNumber,
    score: u32,
    rolls_used: u32,
    wins: u32,
    losses: u32,
}

impl Player {
    #[must_use]
    pub fn new(number: PlayerNumber) -> Self {
        Self {
            number,
            score: 0,
            rolls_used: 0,
            wins: 0,
            losses: 0,
        }
    }

    #[must_use]
    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[must_use]
    pub fn rolls_used(&self) -> u32 {
        self.rolls_used
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Count one roll. Does not touch any dice.
    pub fn roll(&mut self) {
        self.rolls_used += 1;
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    /// Clear score and rolls. Wins and losses are kept.
    pub fn reset_for_new_round(&mut self) {
        self.score = 0;
        self.rolls_used = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: score {}, wins {}, losses {}",
            self.number, self.score, self.wins, self.losses
        )
    }
}
