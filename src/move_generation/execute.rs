//! Execution of moves the gatekeeper has accepted.
//!
//! Order matters: the snapshot is taken and the notation is computed before
//! the grid changes; status flags and the check/mate/stalemate suffix are
//! computed after.

use crate::game_state::chess_rules::{
    CHECKMATE_SUFFIX, CHECK_SUFFIX, KINGSIDE_CASTLE, QUEENSIDE_CASTLE, STALEMATE_COMMENT,
};
use crate::game_state::chess_types::*;
use crate::utils::movetext::{disambiguation, MoveToken};

impl Board {
    /// Applies a legal move. Callers go through `gatekeeper`.
    pub(crate) fn execute(&mut self, from: Square, to: Square, promotion: Option<PromotionChoice>) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        let mover = self.side_to_move;

        self.history.push(self.snapshot());

        let is_en_passant = self.is_en_passant_capture(piece, to);
        let is_capture = self.piece_at(to).is_some() || is_en_passant;
        let castle_step = if piece.kind == PieceKind::King && from.file.abs_diff(to.file) == 2 {
            Some(if to.file > from.file { 1i8 } else { -1i8 })
        } else {
            None
        };
        let promotion = promotion.filter(|_| {
            piece.kind == PieceKind::Pawn && to.rank == mover.promotion_rank()
        });

        let mut token = MoveToken {
            castle: castle_step.map(|step| if step > 0 { KINGSIDE_CASTLE } else { QUEENSIDE_CASTLE }),
            piece_letter: piece.kind.notation_letter(),
            disambiguation: disambiguation(self, piece, from, to),
            pawn_file: (piece.kind == PieceKind::Pawn && is_capture).then(|| from.file_char()),
            is_capture,
            destination: to,
            promotion,
            suffix: String::new(),
        };

        // Rook hop for castling: next to the king on the side it came from.
        if let Some(step) = castle_step {
            let rook_file = if step > 0 { 7 } else { 0 };
            let rook_to = (to.file as i8 - step) as usize;
            let rook = self.squares[from.rank][rook_file].take();
            self.squares[from.rank][rook_to] = rook.map(Piece::moved);
        }

        if is_en_passant {
            if let Some(victim) = self.en_passant_victim(to) {
                self.squares[victim.rank][victim.file] = None;
            }
        }

        self.squares[to.rank][to.file] = match promotion {
            Some(choice) => Some(Piece::new(choice.kind(), mover).moved()),
            None => Some(piece.moved()),
        };
        self.squares[from.rank][from.file] = None;

        self.en_passant = None;
        if piece.kind == PieceKind::Pawn && from.rank.abs_diff(to.rank) == 2 {
            self.en_passant = Square::new(from.file, (from.rank + to.rank) / 2);
        }

        let numbering = match mover {
            Color::Light => {
                self.move_count += 1;
                Some(format!("{}.", self.move_count))
            }
            Color::Dark if self.movetext.is_empty() => Some(format!("{}...", self.move_count)),
            Color::Dark => None,
        };

        self.side_to_move = mover.opposite();
        self.refresh_status();

        if self.is_checked && !self.has_moves {
            self.result = GameResult::win_for(mover);
            token.suffix = format!(
                "{CHECKMATE_SUFFIX} {{ {} wins by checkmate. }} {}",
                mover.name(),
                self.result.code()
            );
        } else if self.is_checked {
            token.suffix = CHECK_SUFFIX.to_owned();
        } else if !self.has_moves {
            self.result = GameResult::Draw;
            token.suffix = format!(" {STALEMATE_COMMENT} {}", self.result.code());
        }

        let text = match numbering {
            Some(number) => format!("{number} {token}"),
            None => token.to_string(),
        };
        self.append_movetext(&text);
    }
}
