//! Property tests for construction, rolling, scoring and turn order.

use dice_game::game::scoring::score_faces;
use dice_game::{ConfigError, DieId, Game, GameError, PlayerNumber};
use proptest::prelude::*;

fn faces_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..10)
}

proptest! {
    // 1. Valid games have the requested players and dice
    #[test]
    fn construction_counts(players in 3usize..40, dice in 1usize..=26, rolls in 0u32..6) {
        let game = Game::create(players, dice, rolls, 0).unwrap();
        prop_assert_eq!(game.players().len(), players);
        prop_assert_eq!(game.dice().len(), dice);
        for (player, number) in game.players().iter().zip(PlayerNumber::all(players)) {
            prop_assert_eq!(player.number(), number);
        }
    }

    // 2. Two or fewer players is always rejected
    #[test]
    fn too_few_players_rejected(players in 0usize..=2, dice in 1usize..=26) {
        prop_assert_eq!(
            Game::create(players, dice, 3, 0).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::TooFewPlayers(players))
        );
    }

    // 3. Rolling never moves a held die and counts exactly one roll
    #[test]
    fn roll_respects_holds(seed in any::<u64>(), mask in prop::collection::vec(any::<bool>(), 5)) {
        let mut game = Game::create(3, 5, 10, seed).unwrap();
        game.start_new_round();
        game.roll_dice().unwrap();

        for (i, &hold) in mask.iter().enumerate() {
            if hold {
                game.hold_die(DieId::from_index(i).unwrap());
            }
        }
        let before: Vec<_> = game.dice().iter().map(|d| d.face_value()).collect();

        if game.can_current_player_roll() {
            game.roll_dice().unwrap();
            prop_assert_eq!(game.current_player_rolls_used(), Some(2));
        } else {
            prop_assert!(mask.iter().all(|&h| h));
        }

        for (die, &face) in game.dice().iter().zip(&before) {
            prop_assert!((1..=6).contains(&die.face_value()));
            if die.is_held() {
                prop_assert_eq!(die.face_value(), face);
            }
        }
    }

    // 4. Rolling stops at the limit and stays stopped
    #[test]
    fn roll_limit_holds(seed in any::<u64>(), rolls in 0u32..6) {
        let mut game = Game::create(3, 5, rolls, seed).unwrap();
        game.start_new_round();

        let mut made = 0;
        while game.can_current_player_roll() {
            game.roll_dice().unwrap();
            made += 1;
        }
        prop_assert_eq!(made, rolls);
        prop_assert!(game.roll_dice().is_err());
        prop_assert!(!game.can_current_player_roll());
    }

    // 5. Scores iff 4, 5 and 6 are present; worth the sum minus 15
    #[test]
    fn scoring_rule(faces in faces_strategy()) {
        let has_run = [4, 5, 6].iter().all(|f| faces.contains(f));
        let sum: u32 = faces.iter().map(|&f| u32::from(f)).sum();
        match score_faces(&faces) {
            Some(points) => {
                prop_assert!(has_run);
                prop_assert_eq!(points, sum - 15);
            }
            None => prop_assert!(!has_run),
        }
    }

    // 6. next_player advances once per player except the last
    #[test]
    fn next_player_walks_in_order(players in 3usize..30) {
        let mut game = Game::create(players, 5, 3, 0).unwrap();
        game.start_new_round();

        for expected in 2..=players {
            prop_assert!(game.next_player());
            prop_assert_eq!(game.current_player_number(), Some(PlayerNumber::new(expected as u8)));
        }
        prop_assert!(!game.next_player());
        prop_assert_eq!(game.current_player_number(), Some(PlayerNumber::new(players as u8)));
    }

    // 7. Auto-holding a face nobody shows fails and holds nothing
    #[test]
    fn auto_hold_missing_face(seed in any::<u64>()) {
        let mut game = Game::create(3, 5, 3, seed).unwrap();
        game.start_new_round();
        game.roll_dice().unwrap();

        for face in 1u8..=6 {
            if game.dice().iter().all(|d| d.face_value() != face) {
                prop_assert!(!game.auto_hold(face));
                prop_assert!(game.dice().iter().all(|d| !d.is_held()));
            }
        }
    }
}
