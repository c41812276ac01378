//! Plays one random legal game and prints its PGN.
//!
//! Usage:
//! `cargo run --bin random_game`
//! `cargo run --bin random_game -- --seed 42 --max-plies 300`

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_arbiter::game_state::chess_types::*;
use chess_arbiter::utils::pgn::{write_pgn, TranscriptHeaders};
use chess_arbiter::utils::random_playout::random_playout;

fn parse_arg<T: std::str::FromStr>(flag: &str) -> Result<Option<T>, String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag {
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            return value
                .parse::<T>()
                .map(Some)
                .map_err(|_| format!("invalid value for {flag}: {value}"));
        }
    }
    Ok(None)
}

fn main() -> Result<(), String> {
    let seed = match parse_arg::<u64>("--seed")? {
        Some(seed) => seed,
        None => rand::random(),
    };
    let max_plies = parse_arg::<usize>("--max-plies")?.unwrap_or(400);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let played = random_playout(&mut board, max_plies, &mut rng);

    let headers = TranscriptHeaders {
        event: "Random playout".to_owned(),
        white: "random".to_owned(),
        black: "random".to_owned(),
        round: seed.to_string(),
        ..TranscriptHeaders::default()
    };
    eprintln!("seed={seed} plies={} fen={}", played.len(), board.to_fen());
    print!("{}", write_pgn(&board, &headers));
    Ok(())
}
