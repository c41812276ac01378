//! Standard algebraic notation for single moves.
//!
//! `MoveToken` collects the parts of one move as the board knows them before
//! it mutates the grid, plus the suffix it learns afterwards.

use std::fmt;

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToken {
    /// `O-O` or `O-O-O`; replaces the rest of the move when present.
    pub castle: Option<&'static str>,
    pub piece_letter: &'static str,
    pub disambiguation: String,
    /// Origin file of a capturing pawn.
    pub pawn_file: Option<char>,
    pub is_capture: bool,
    pub destination: Square,
    pub promotion: Option<PromotionChoice>,
    /// Check, mate or stalemate annotation.
    pub suffix: String,
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(castle) = self.castle {
            return write!(f, "{castle}{}", self.suffix);
        }

        f.write_str(self.piece_letter)?;
        f.write_str(&self.disambiguation)?;
        if let Some(file) = self.pawn_file {
            write!(f, "{file}")?;
        }
        if self.is_capture {
            f.write_str("x")?;
        }
        write!(
            f,
            "{}{}",
            self.destination.file_char(),
            self.destination.rank_char()
        )?;
        if let Some(choice) = self.promotion {
            f.write_str(choice.suffix())?;
        }
        f.write_str(&self.suffix)
    }
}

/// Origin file and/or rank needed to tell `piece` on `from` apart from other
/// pieces of the same kind and color that could also legally reach `to`.
///
/// Pawns and kings never need it. The file is preferred; the rank is used
/// when a rival shares the file; both when rivals share each.
pub fn disambiguation(board: &Board, piece: Piece, from: Square, to: Square) -> String {
    if matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
        return String::new();
    }

    let rivals: Vec<Square> = Square::all()
        .filter(|square| *square != from)
        .filter(|square| {
            matches!(
                board.piece_at(*square),
                Some(other) if other.kind == piece.kind && other.color == piece.color
            )
        })
        .filter(|square| board.is_legal(*square, to, None))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|square| square.file == from.file);
    let shares_rank = rivals.iter().any(|square| square.rank == from.rank);

    match (shares_file, shares_rank) {
        (false, _) => from.file_char().to_string(),
        (true, false) => from.rank_char().to_string(),
        (true, true) => format!("{}{}", from.file_char(), from.rank_char()),
    }
}
