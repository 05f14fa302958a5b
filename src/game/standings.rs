//! Round standings and the overall winner.
//!
//! Every player holding the round's high score is credited a win; all
//! others a loss. The listing is ordered by descending wins, ties kept
//! in player-number order.

use std::cmp::Reverse;

use crate::core::{Player, PlayerNumber};

/// Standings produced at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    high_score: u32,
    winners: Vec<PlayerNumber>,
    entries: Vec<Player>,
}

impl Standings {
    /// Credit wins and losses for the round, then list the players.
    ///
    /// Mutates every player's tally, so call once per completed round.
    /// Returns `None` for an empty player list.
    pub fn record_round(players: &mut [Player]) -> Option<Self> {
        let high_score = players.iter().map(Player::score).max()?;

        let mut winners = Vec::new();
        for player in players.iter_mut() {
            if player.score() == high_score {
                player.add_win();
                winners.push(player.number());
            } else {
                player.add_loss();
            }
        }

        let mut entries = players.to_vec();
        entries.sort_by_key(|p| Reverse(p.wins()));

        Some(Self {
            high_score,
            winners,
            entries,
        })
    }

    /// The round's highest score.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Players credited a win this round, in player-number order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerNumber] {
        &self.winners
    }

    /// Players in standings order.
    #[must_use]
    pub fn entries(&self) -> &[Player] {
        &self.entries
    }

    /// Player numbers in standings order.
    pub fn order(&self) -> impl Iterator<Item = PlayerNumber> + '_ {
        self.entries.iter().map(Player::number)
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in &self.entries {
            write!(f, "{}", player)?;
        }
        Ok(())
    }
}

/// Player with the most wins so far; the first one found on a tie.
#[must_use]
pub fn final_winner(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, player| match best {
        Some(b) if b.wins() >= player.wins() => Some(b),
        _ => Some(player),
    })
}
