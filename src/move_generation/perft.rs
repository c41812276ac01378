//! Perft node counting through the gatekeeper.
//!
//! Each interior node executes its moves and undoes them from history, so
//! the count also exercises snapshot restore on every edge of the tree.

use crate::game_state::chess_types::*;

/// Number of leaf nodes `depth` plies below `board`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        if !board.play(mv) {
            continue;
        }
        nodes += perft(board, depth - 1);
        board.undo();
    }
    nodes
}

/// Perft split by root move, keyed by long algebraic notation (`e2e4`).
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    for mv in board.legal_moves() {
        let mut name = format!(
            "{}{}{}{}",
            mv.from.file_char(),
            mv.from.rank_char(),
            mv.to.file_char(),
            mv.to.rank_char()
        );
        if let Some(choice) = mv.promotion {
            name.push_str(&choice.suffix()[1..].to_ascii_lowercase());
        }

        if !board.play(mv) {
            continue;
        }
        out.push((name, perft(board, depth - 1)));
        board.undo();
    }
    out
}
