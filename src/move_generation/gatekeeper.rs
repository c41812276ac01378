//! Move legality.
//!
//! `Board::gatekeeper` is the only entry point through which a move reaches
//! the grid. It runs the rule checks in a fixed order and stops at the first
//! failure; in review mode it answers without touching any state.

use crate::game_state::board::control_tables;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::pieces::rays::LaserMode;

impl Board {
    /// Validates `from -> to` and, unless `review_only`, executes it.
    ///
    /// Returns whether the move is legal. A rejected move leaves the board
    /// untouched, as does any call in review mode.
    pub fn gatekeeper(
        &mut self,
        from: Square,
        to: Square,
        review_only: bool,
        promotion: Option<PromotionChoice>,
    ) -> bool {
        if !self.is_legal(from, to, promotion) {
            return false;
        }
        if !review_only {
            self.execute(from, to, promotion);
        }
        true
    }

    /// Read-only legality test; the review half of `gatekeeper`.
    pub fn is_legal(&self, from: Square, to: Square, promotion: Option<PromotionChoice>) -> bool {
        let mover = self.side_to_move;

        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if piece.color != mover {
            return false;
        }

        let destination = self.piece_at(to);
        if matches!(destination, Some(target) if target.color == mover) {
            return false;
        }

        let is_en_passant = self.is_en_passant_capture(piece, to);
        let pattern_ok = if piece.kind == PieceKind::King
            && !self.is_checked
            && from.file.abs_diff(to.file) == 2
        {
            self.can_castle(from, to)
        } else if is_en_passant {
            piece.can_move(from, to, true)
        } else {
            piece.can_move(from, to, destination.is_some())
        };
        if !pattern_ok {
            return false;
        }

        if !matches!(piece.kind, PieceKind::Knight | PieceKind::King) && self.jumps(from, to) {
            return false;
        }

        let opponent = mover.opposite();
        if piece.kind == PieceKind::King && self.is_controlled_by(opponent, to) {
            return false;
        }

        if piece.kind != PieceKind::King {
            if self.breaks_pin(from, to) {
                return false;
            }
            if is_en_passant && self.en_passant_exposes_king(from, to) {
                return false;
            }
        }

        if piece.kind == PieceKind::Pawn && to.rank == mover.promotion_rank() && promotion.is_none()
        {
            return false;
        }

        if self.is_checked && !self.resolves_check(piece, to, is_en_passant) {
            return false;
        }

        true
    }

    pub(crate) fn is_en_passant_capture(&self, piece: Piece, to: Square) -> bool {
        piece.kind == PieceKind::Pawn && self.en_passant == Some(to)
    }

    /// Square of the pawn removed by an en-passant capture landing on `to`.
    pub(crate) fn en_passant_victim(&self, to: Square) -> Option<Square> {
        to.offset(0, -self.side_to_move.forward())
    }

    /// Castling eligibility for a king moving two files from `from` to `to`.
    pub fn can_castle(&self, from: Square, to: Square) -> bool {
        if from.rank != to.rank {
            return false;
        }

        let (rook_file, step) = if to.file > from.file {
            (KINGSIDE_ROOK_FILE, 1i8)
        } else {
            (QUEENSIDE_ROOK_FILE, -1i8)
        };
        let rook_square = Square {
            file: rook_file,
            rank: from.rank,
        };

        let Some(king) = self.piece_at(from) else {
            return false;
        };
        let Some(rook) = self.piece_at(rook_square) else {
            return false;
        };
        if rook.kind != PieceKind::Rook || rook.color != king.color {
            return false;
        }
        if king.has_moved || rook.has_moved {
            return false;
        }

        if self.jumps(from, rook_square) {
            return false;
        }

        let opponent = king.color.opposite();
        let mut cursor = Some(from);
        while let Some(square) = cursor {
            if self.is_controlled_by(opponent, square) {
                return false;
            }
            if square == to {
                break;
            }
            cursor = square.offset(step, 0);
        }

        true
    }

    /// Whether any square strictly between `from` and `to` is occupied.
    ///
    /// Only straight and diagonal lines are inspected; other displacements
    /// (knight jumps) have no in-between squares.
    pub fn jumps(&self, from: Square, to: Square) -> bool {
        let dx = to.file as i8 - from.file as i8;
        let dy = to.rank as i8 - from.rank as i8;
        if !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
            return false;
        }

        let step = (dx.signum(), dy.signum());
        let mut cursor = from.offset(step.0, step.1);
        while let Some(square) = cursor {
            if square == to {
                return false;
            }
            if self.piece_at(square).is_some() {
                return true;
            }
            cursor = square.offset(step.0, step.1);
        }
        false
    }

    /// Whether moving the piece on `from` to `to` leaves a pin line.
    fn breaks_pin(&self, from: Square, to: Square) -> bool {
        let opponent = self.side_to_move.opposite();
        Square::all().any(|square| match self.piece_at(square) {
            Some(piece) if piece.color == opponent && piece.kind.is_slider() => {
                let pin = piece.check_laser(&self.squares, square, LaserMode::Pin);
                pin.contains(&from) && !pin.contains(&to)
            }
            _ => false,
        })
    }

    /// Plays an en-passant capture on a scratch grid and reports whether the
    /// mover's king ends up attacked.
    ///
    /// The capture empties two squares of one rank at once, which a single
    /// pin laser can not see.
    fn en_passant_exposes_king(&self, from: Square, to: Square) -> bool {
        let Some(victim) = self.en_passant_victim(to) else {
            return false;
        };

        let mut scratch = self.squares;
        scratch[to.rank][to.file] = scratch[from.rank][from.file];
        scratch[from.rank][from.file] = None;
        scratch[victim.rank][victim.file] = None;

        let Some(king) = self.king_square(self.side_to_move) else {
            return false;
        };
        control_tables(&scratch)[self.side_to_move.opposite().index()][king.rank][king.file]
    }

    /// Check response for a non-castling move while in check.
    fn resolves_check(&self, piece: Piece, to: Square, is_en_passant: bool) -> bool {
        let opponent = self.side_to_move.opposite();
        if piece.kind == PieceKind::King {
            return !self.is_controlled_by(opponent, to);
        }

        let Some(king) = self.king_square(self.side_to_move) else {
            return false;
        };
        let attackers = self.attackers_of(king, opponent);
        let [attacker] = attackers.as_slice() else {
            return false;
        };

        if to == *attacker {
            return true;
        }
        if is_en_passant && self.en_passant_victim(to) == Some(*attacker) {
            return true;
        }

        self.check_block(*attacker).contains(&to)
    }

    /// Squares that block (or capture) the checking slider on `attacker`.
    pub fn check_block(&self, attacker: Square) -> Vec<Square> {
        match self.piece_at(attacker) {
            Some(piece) if piece.kind.is_slider() => {
                piece.check_laser(&self.squares, attacker, LaserMode::Check)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn load(fen: &str) -> Board {
        Board::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn rejects_wrong_owner_and_friendly_fire() {
        let board = Board::new();
        assert!(!board.is_legal(sq("e7"), sq("e5"), None), "not Dark's turn");
        assert!(!board.is_legal(sq("e4"), sq("e5"), None), "empty origin");
        assert!(!board.is_legal(sq("a1"), sq("a2"), None), "own piece on target");
        assert!(board.is_legal(sq("g1"), sq("f3"), None));
    }

    #[test]
    fn sliders_can_not_jump() {
        let board = Board::new();
        assert!(!board.is_legal(sq("a1"), sq("a3"), None));
        assert!(!board.is_legal(sq("f1"), sq("c4"), None));
        assert!(board.jumps(sq("a1"), sq("a3")));
        assert!(!board.jumps(sq("g1"), sq("f3")));
    }

    #[test]
    fn king_never_steps_onto_controlled_squares() {
        let board = load("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        assert!(!board.is_legal(sq("e1"), sq("e2"), None));
        assert!(!board.is_legal(sq("e1"), sq("d2"), None));
        assert!(board.is_legal(sq("e1"), sq("d1"), None));

        for to in Square::all() {
            if board.is_legal(sq("e1"), to, None) {
                assert!(!board.is_controlled_by(Color::Dark, to));
            }
        }
    }

    #[test]
    fn king_can_not_retreat_along_the_checking_ray() {
        let board = load("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(board.is_checked());
        assert!(!board.is_legal(sq("e1"), sq("f1"), None));
        assert!(board.is_legal(sq("e1"), sq("e2"), None));
    }

    #[test]
    fn pinned_piece_stays_on_the_line() {
        // Bishop on e2 is pinned by the rook on e8.
        let board = load("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
        assert!(!board.is_legal(sq("e2"), sq("d3"), None));
        assert!(!board.is_legal(sq("e2"), sq("f3"), None));

        // A rook pinned on the file may slide along it or take the pinner.
        let board = load("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
        assert!(board.is_legal(sq("e2"), sq("e5"), None));
        assert!(board.is_legal(sq("e2"), sq("e8"), None));
        assert!(!board.is_legal(sq("e2"), sq("d2"), None));
    }

    #[test]
    fn check_must_be_answered() {
        // Rook on e8 checks the king on e1; the knight may block or capture only.
        let board = load("4r1k1/8/8/8/8/5N2/8/4K3 w - - 0 1");
        assert!(board.is_checked());
        assert!(!board.is_legal(sq("f3"), sq("g5"), None));
        assert!(board.is_legal(sq("f3"), sq("e5"), None));
        assert!(board.is_legal(sq("e1"), sq("d2"), None));

        // Knight checks can not be blocked.
        let board = load("6k1/8/8/8/8/3n4/8/R3K3 w - - 0 1");
        assert!(board.is_checked());
        assert!(!board.is_legal(sq("a1"), sq("d1"), None));
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        let board = load("4r1k1/8/8/8/8/3n4/8/R3K2R w - - 0 1");
        assert!(board.is_checked());
        assert!(!board.is_legal(sq("a1"), sq("d1"), None));
        assert!(!board.is_legal(sq("h1"), sq("h8"), None));
        assert!(!board.is_legal(sq("e1"), sq("f2"), None), "knight covers f2");
        assert!(board.is_legal(sq("e1"), sq("d2"), None));
    }

    #[test]
    fn promotion_requires_a_choice() {
        let board = load("7k/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert!(!board.is_legal(sq("a7"), sq("a8"), None));
        assert!(board.is_legal(sq("a7"), sq("a8"), Some(PromotionChoice::Knight)));
    }

    #[test]
    fn castling_conditions() {
        let open = load("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(open.is_legal(sq("e1"), sq("g1"), None));
        assert!(open.is_legal(sq("e1"), sq("c1"), None));

        let blocked = load("r3k2r/8/8/8/8/8/8/R2QK1NR w KQkq - 0 1");
        assert!(!blocked.is_legal(sq("e1"), sq("g1"), None));
        assert!(!blocked.is_legal(sq("e1"), sq("c1"), None));

        let no_rights = load("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
        assert!(!no_rights.is_legal(sq("e1"), sq("g1"), None));
        assert!(!no_rights.is_legal(sq("e1"), sq("c1"), None));

        // Rook on f8 covers f1, the square the king passes through.
        let through_fire = load("k4r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!through_fire.is_legal(sq("e1"), sq("g1"), None));
        assert!(through_fire.is_legal(sq("e1"), sq("c1"), None));

        // Landing square attacked.
        let landing = load("k5r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!landing.is_legal(sq("e1"), sq("g1"), None));

        // No castling out of check.
        let in_check = load("k3r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!in_check.is_legal(sq("e1"), sq("g1"), None));
        assert!(!in_check.is_legal(sq("e1"), sq("c1"), None));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // Taking on c6 would empty both b5 and c5 and open the rank to h5.
        let board = load("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
        assert!(!board.is_legal(sq("b5"), sq("c6"), None));
        assert!(board.is_legal(sq("b5"), sq("b6"), None));
    }

    #[test]
    fn en_passant_can_remove_a_checking_pawn() {
        // Dark just played d7d5 giving check to the king on e4.
        let board = load("7k/8/8/3pP3/4K3/8/8/8 w - d6 0 1");
        assert!(board.is_checked());
        assert!(board.is_legal(sq("e5"), sq("d6"), None));
    }
}
