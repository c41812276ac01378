//! Random self-play.
//!
//! Picks uniformly among legal moves until the game ends or a ply limit is
//! reached. Used by the `random_game` binary, the legal-move bench and the
//! execute/undo tests.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;

/// Plays up to `max_plies` random legal moves on `board` and returns them.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, max_plies: usize, rng: &mut R) -> Vec<ChessMove> {
    let mut played = Vec::new();

    while played.len() < max_plies && board.result() == GameResult::Ongoing {
        let moves = board.legal_moves();
        let Some(mv) = moves.as_slice().choose(rng).copied() else {
            break;
        };
        if !board.play(mv) {
            break;
        }
        played.push(mv);
    }

    played
}

#[cfg(test)]
mod tests {
    use super::random_playout;
    use crate::game_state::chess_types::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn playouts_unwind_to_the_start() {
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            let start = board.snapshot();

            let mut checkpoints = vec![board.snapshot()];
            let played = random_playout(&mut board, 60, &mut rng);
            assert_eq!(board.history_len(), played.len());

            // Replay to collect every intermediate state, then unwind.
            let mut replay = Board::new();
            for mv in &played {
                assert!(replay.play(*mv), "replayed move should stay legal");
                checkpoints.push(replay.snapshot());
            }
            assert_eq!(replay.movetext(), board.movetext());

            checkpoints.pop();
            while board.undo() {
                let expected = checkpoints.pop().expect("one checkpoint per undo");
                assert_eq!(board.snapshot(), expected);
            }
            assert_eq!(board.snapshot(), start);
        }
    }

    #[test]
    fn playout_stops_when_the_game_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(random_playout(&mut board, 10, &mut rng).is_empty());
    }
}
