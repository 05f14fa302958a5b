//! In-memory checkpoints of a game.
//!
//! A snapshot holds everything needed to continue a game exactly,
//! including the RNG stream position, so a restored game rolls the same
//! faces the checkpointed game would have.

use serde::{Deserialize, Serialize};

use super::engine::DicePool;
use super::phase::RoundPhase;
use crate::core::{DieId, GameConfig, GameError, GameRngState, Player, PlayerNumber, MAX_FACE};

/// Serializable game state. Produced by [`Game::snapshot`](super::Game::snapshot).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub dice: DicePool,
    pub rng: GameRngState,
    pub current: Option<PlayerNumber>,
    pub phase: RoundPhase,
    pub standings_recorded: bool,
}

impl GameSnapshot {
    /// Check the snapshot describes a game its config could have built.
    ///
    /// Faces must be 0 (unrolled) through 6, and the phase must agree
    /// with the current player.
    pub fn validate(&self) -> Result<(), GameError> {
        self.config.validate()?;

        let players_match = self.players.len() == self.config.player_count
            && self
                .players
                .iter()
                .zip(PlayerNumber::all(self.config.player_count))
                .all(|(p, n)| p.number() == n);
        let dice_match = self.dice.len() == self.config.dice_count
            && self
                .dice
                .iter()
                .enumerate()
                .all(|(i, d)| Some(d.id()) == DieId::from_index(i) && d.face_value() <= MAX_FACE);
        let current_valid = self
            .current
            .map_or(true, |n| n.get() >= 1 && n.index() < self.players.len());
        let last = PlayerNumber::new(self.config.player_count as u8);
        let phase_valid = match self.phase {
            RoundPhase::NotStarted => self.current.is_none(),
            RoundPhase::InTurn(p) | RoundPhase::TurnScored(p) => self.current == Some(p),
            RoundPhase::RoundOver => self.current == Some(last),
        };

        if players_match && dice_match && current_valid && phase_valid {
            Ok(())
        } else {
            Err(GameError::InvalidSnapshot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_restore_continues_rng() {
        let mut game = Game::create(3, 5, 5, 7).unwrap();
        game.start_new_round();
        game.roll_dice().unwrap();

        let snapshot = game.snapshot();
        let mut restored = Game::restore(snapshot).unwrap();

        game.roll_dice().unwrap();
        restored.roll_dice().unwrap();
        assert_eq!(game.dice(), restored.dice());
        assert_eq!(game.players(), restored.players());
        assert_eq!(game.phase(), restored.phase());
    }

    #[test]
    fn test_snapshot_serde() {
        let mut game = Game::create(4, 6, 3, 11).unwrap();
        game.start_new_round();
        game.roll_dice().unwrap();
        game.hold_die(DieId('D'));

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }

    #[test]
    fn test_mismatched_snapshot_rejected() {
        let game = Game::create(3, 5, 3, 1).unwrap();

        let mut snapshot = game.snapshot();
        snapshot.players.pop();
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.current = Some(PlayerNumber::new(9));
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.dice[2].set_face(9);
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.phase = RoundPhase::InTurn(PlayerNumber::new(1));
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.config.player_count = 2;
        assert!(matches!(
            Game::restore(snapshot).unwrap_err(),
            GameError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_phase_must_match_current_player() {
        let mut game = Game::create(3, 5, 3, 1).unwrap();
        game.start_new_round();
        game.next_player();

        let mut snapshot = game.snapshot();
        snapshot.phase = RoundPhase::TurnScored(PlayerNumber::new(3));
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.phase = RoundPhase::NotStarted;
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        let mut snapshot = game.snapshot();
        snapshot.phase = RoundPhase::RoundOver;
        assert_eq!(Game::restore(snapshot).unwrap_err(), GameError::InvalidSnapshot);

        while game.next_player() {}
        assert!(Game::restore(game.snapshot()).is_ok());
    }
}
