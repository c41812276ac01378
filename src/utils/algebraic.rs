//! Square conversions for algebraic coordinates.
//!
//! Converts between two-character coordinates (e.g., `e4`) and board
//! squares. Ranks are counted from the eighth rank, so `a8` is rank index 0
//! and `a1` is rank index 7.

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ArbiterResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ArbiterError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ArbiterError::InvalidAlgebraic(format!(
            "bad file '{}' in {square}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ArbiterError::InvalidAlgebraic(format!(
            "bad rank '{}' in {square}",
            rank as char
        )));
    }

    Ok(Square {
        file: usize::from(file - b'a'),
        rank: usize::from(b'8' - rank),
    })
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_char())
}
