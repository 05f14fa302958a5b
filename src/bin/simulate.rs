//! Headless auto-play: every player rolls until the limit, auto-holding
//! 6, 5 and 4 after each roll.
//!
//! Usage: `simulate [--players N] [--dice N] [--rolls N] [--rounds N] [--seed N]`
//!
//! Without `--seed` the RNG is seeded from the OS; the seed used is
//! printed so a run can be replayed. Set `RUST_LOG=debug` to trace
//! individual rolls.

use dice_game::{Game, GameConfig, GameError, GameRng};
use log::info;

struct Args {
    config: GameConfig,
    rounds: usize,
    seed: Option<u64>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(value) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, value);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config = GameConfig::default();
    let mut rounds = 10usize;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--players" => config.player_count = parse_value(flag, value),
            "--dice" => config.dice_count = parse_value(flag, value),
            "--rolls" => config.max_rolls = parse_value(flag, value),
            "--rounds" => rounds = parse_value(flag, value),
            "--seed" => seed = Some(parse_value(flag, value)),
            _ => {
                eprintln!("Unknown argument: {}", flag);
                std::process::exit(1);
            }
        }
        i += 2;
    }

    Args {
        config,
        rounds,
        seed,
    }
}

fn play_round(game: &mut Game) -> Result<(), GameError> {
    game.start_new_round();
    loop {
        game.reset_dice();
        while game.can_current_player_roll() {
            game.roll_dice()?;
            game.auto_hold_scoring_dice();
        }
        game.score_current_player()?;
        if !game.next_player() {
            return Ok(());
        }
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();
    let mut game = Game::with_rng(args.config, rng)?;
    info!("simulating {} rounds with seed {}", args.rounds, seed);
    println!("Seed: {}", seed);

    for round in 1..=args.rounds {
        play_round(&mut game)?;
        let standings = game.game_results()?;
        println!("Round {} (high score {}):", round, standings.high_score());
        print!("{}", standings);
    }

    println!("Final winner: {}", game.final_winner_display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(parse_args()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
