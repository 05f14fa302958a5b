//! Turn orchestration for the dice game.

use log::{debug, info, warn};
use smallvec::SmallVec;

use super::phase::RoundPhase;
use super::scoring::score_dice;
use super::snapshot::GameSnapshot;
use super::standings::{final_winner, Standings};
use crate::core::{
    Die, DieId, GameConfig, GameError, GameRng, Player, PlayerNumber, MAX_FACE, MIN_FACE,
};

/// Dice pool. Most games use five or six dice.
pub type DicePool = SmallVec<[Die; 8]>;

/// Faces [`Game::auto_hold_scoring_dice`] tries to secure, in order.
pub const AUTO_HOLD_ORDER: [u8; 3] = [6, 5, 4];

/// A game: players, shared dice, and the round in progress.
///
/// The driver calls operations strictly in sequence:
///
/// ```
/// use dice_game::{Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::default(), 42).unwrap();
/// game.start_new_round();
///
/// loop {
///     while game.can_current_player_roll() {
///         game.roll_dice().unwrap();
///         game.auto_hold_scoring_dice();
///     }
///     game.score_current_player().unwrap();
///     if !game.next_player() {
///         break;
///     }
/// }
///
/// let standings = game.game_results().unwrap();
/// assert_eq!(standings.entries().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    dice: DicePool,
    rng: GameRng,
    current: Option<PlayerNumber>,
    phase: RoundPhase,
    standings_recorded: bool,
}

impl Game {
    /// Create a game with a seeded RNG.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] for 2 or fewer players.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a game from raw counts.
    pub fn create(
        player_count: usize,
        dice_count: usize,
        max_rolls: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(GameConfig::new(player_count, dice_count, max_rolls), seed)
    }

    /// Create a game that rolls against the given RNG.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;

        let players = PlayerNumber::all(config.player_count).map(Player::new).collect();
        let dice = (0..config.dice_count)
            .filter_map(DieId::from_index)
            .map(Die::new)
            .collect();

        debug!(
            "created game: {} players, {} dice, {} rolls, seed {}",
            config.player_count,
            config.dice_count,
            config.max_rolls,
            rng.seed()
        );

        Ok(Self {
            config,
            players,
            dice,
            rng,
            current: None,
            phase: RoundPhase::NotStarted,
            standings_recorded: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Players in player-number order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Dice in creation order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn player(&self, number: PlayerNumber) -> Option<&Player> {
        if number.get() == 0 {
            return None;
        }
        self.players.get(number.index())
    }

    /// Mutable access for driver-managed score adjustments.
    pub fn player_mut(&mut self, number: PlayerNumber) -> Option<&mut Player> {
        if number.get() == 0 {
            return None;
        }
        self.players.get_mut(number.index())
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    // === Round lifecycle ===

    /// Reset players and dice and hand the first turn to player 1.
    pub fn start_new_round(&mut self) {
        self.reset_players();
        self.reset_dice();
        self.current = Some(PlayerNumber::FIRST);
        self.phase = RoundPhase::InTurn(PlayerNumber::FIRST);
        self.standings_recorded = false;
        info!("new round: {} players", self.players.len());
    }

    /// Release every held die. Faces are kept.
    pub fn reset_dice(&mut self) {
        self.dice.iter_mut().for_each(Die::reset);
    }

    /// Zero every player's score and rolls. Wins and losses are kept.
    pub fn reset_players(&mut self) {
        self.players.iter_mut().for_each(Player::reset_for_new_round);
    }

    /// Advance to the next player.
    ///
    /// Returns false once the last player has been reached, leaving the
    /// current player in place and ending the round.
    pub fn next_player(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        if current.index() + 1 < self.players.len() {
            let next = PlayerNumber::new(current.get() + 1);
            self.current = Some(next);
            self.phase = RoundPhase::InTurn(next);
            debug!("turn passes to {}", next);
            true
        } else {
            self.phase = RoundPhase::RoundOver;
            debug!("round over after {}", current);
            false
        }
    }

    // === Turn operations ===

    /// Are all dice held?
    #[must_use]
    pub fn all_dice_held(&self) -> bool {
        self.dice.iter().all(Die::is_held)
    }

    /// Can the current player roll again?
    ///
    /// False before the first round, once the roll limit is reached, or
    /// when every die is held.
    #[must_use]
    pub fn can_current_player_roll(&self) -> bool {
        match self.current_player() {
            Some(player) => player.rolls_used() < self.config.max_rolls && !self.all_dice_held(),
            None => false,
        }
    }

    /// Count a roll for the current player and roll every unheld die.
    pub fn roll_dice(&mut self) -> Result<(), GameError> {
        if let Err(err) = self.check_can_roll() {
            warn!("roll rejected: {}", err);
            return Err(err);
        }

        let index = self.current_index()?;
        self.players[index].roll();
        for die in self.dice.iter_mut() {
            die.roll(&mut self.rng);
        }
        if self.phase != RoundPhase::RoundOver {
            self.phase = RoundPhase::InTurn(self.players[index].number());
        }

        debug!(
            "{} roll {}: {}",
            self.players[index].number(),
            self.players[index].rolls_used(),
            self.dice_display()
        );
        Ok(())
    }

    fn check_can_roll(&self) -> Result<(), GameError> {
        let player = self.current_player().ok_or(GameError::RoundNotStarted)?;
        if player.rolls_used() >= self.config.max_rolls {
            return Err(GameError::NoRollsRemaining {
                player: player.number(),
                rolls_used: player.rolls_used(),
                max_rolls: self.config.max_rolls,
            });
        }
        if self.all_dice_held() {
            return Err(GameError::AllDiceHeld);
        }
        Ok(())
    }

    /// Hold the die with this id, held or not.
    ///
    /// Returns false if no die has the id.
    pub fn hold_die(&mut self, id: DieId) -> bool {
        match self.dice.iter_mut().find(|d| d.id() == id) {
            Some(die) => {
                die.hold();
                debug!("held die {}", id);
                true
            }
            None => {
                warn!("no die with id {}", id);
                false
            }
        }
    }

    /// Secure a die showing `face_value`.
    ///
    /// Succeeds without change if a held die already shows the face.
    /// Otherwise holds the first die (in creation order) showing it.
    /// Faces outside 1..=6 never match.
    /// Greedy: holding for one face never considers the other targets.
    pub fn auto_hold(&mut self, face_value: u8) -> bool {
        if !(MIN_FACE..=MAX_FACE).contains(&face_value) {
            return false;
        }

        if self
            .dice
            .iter()
            .any(|d| d.is_held() && d.face_value() == face_value)
        {
            return true;
        }

        match self.dice.iter_mut().find(|d| d.face_value() == face_value) {
            Some(die) => {
                die.hold();
                debug!("auto-held die {} showing {}", die.id(), face_value);
                true
            }
            None => false,
        }
    }

    /// Auto-hold 6, then 5, then 4. Returns how many are secured.
    pub fn auto_hold_scoring_dice(&mut self) -> usize {
        AUTO_HOLD_ORDER
            .iter()
            .filter(|&&face| self.auto_hold(face))
            .count()
    }

    /// Apply the 4-5-6 rule to the current player.
    ///
    /// Returns the points added, 0 if the dice do not score.
    pub fn score_current_player(&mut self) -> Result<u32, GameError> {
        let index = self.current_index()?;
        let points = score_dice(&self.dice).unwrap_or(0);

        let player = &mut self.players[index];
        player.set_score(player.score() + points);
        if self.phase != RoundPhase::RoundOver {
            self.phase = RoundPhase::TurnScored(player.number());
        }

        info!(
            "{} scored {} (total {})",
            player.number(),
            points,
            player.score()
        );
        Ok(points)
    }

    // === Queries ===

    fn current_index(&self) -> Result<usize, GameError> {
        self.current
            .map(PlayerNumber::index)
            .ok_or(GameError::RoundNotStarted)
    }

    /// The current player, once a round has started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|n| self.players.get(n.index()))
    }

    #[must_use]
    pub fn current_player_number(&self) -> Option<PlayerNumber> {
        self.current
    }

    #[must_use]
    pub fn current_player_score(&self) -> Option<u32> {
        self.current_player().map(Player::score)
    }

    #[must_use]
    pub fn current_player_rolls_used(&self) -> Option<u32> {
        self.current_player().map(Player::rolls_used)
    }

    /// Every die's display token, in creation order.
    #[must_use]
    pub fn dice_display(&self) -> String {
        self.dice.iter().map(ToString::to_string).collect()
    }

    // === Standings ===

    /// Credit the round's wins and losses and list the standings.
    ///
    /// Allowed once per round.
    pub fn game_results(&mut self) -> Result<Standings, GameError> {
        if !self.phase.is_started() {
            return Err(GameError::RoundNotStarted);
        }
        if self.standings_recorded {
            warn!("standings for this round were already recorded");
            return Err(GameError::StandingsAlreadyRecorded);
        }

        let standings =
            Standings::record_round(&mut self.players).ok_or(GameError::RoundNotStarted)?;
        self.standings_recorded = true;

        info!(
            "round won by {:?} with {}",
            standings.winners(),
            standings.high_score()
        );
        Ok(standings)
    }

    /// Player with the most wins so far.
    #[must_use]
    pub fn final_winner(&self) -> Option<&Player> {
        final_winner(&self.players)
    }

    /// [`final_winner`](Self::final_winner) as a display string.
    #[must_use]
    pub fn final_winner_display(&self) -> String {
        match self.final_winner() {
            Some(player) => format!("{} with {} wins", player.number(), player.wins()),
            None => "No winner".to_string(),
        }
    }

    // === Checkpointing ===

    /// Capture the full game state, RNG included.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            players: self.players.clone(),
            dice: self.dice.clone(),
            rng: self.rng.state(),
            current: self.current,
            phase: self.phase,
            standings_recorded: self.standings_recorded,
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The snapshot's config is validated and must match its player and
    /// dice counts.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, GameError> {
        snapshot.validate()?;
        Ok(Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            players: snapshot.players,
            dice: snapshot.dice,
            current: snapshot.current,
            phase: snapshot.phase,
            standings_recorded: snapshot.standings_recorded,
        })
    }

    /// Force die faces, in creation order.
    #[cfg(test)]
    pub(crate) fn set_faces(&mut self, faces: &[u8]) {
        for (die, &face) in self.dice.iter_mut().zip(faces) {
            die.set_face(face);
        }
    }
}
