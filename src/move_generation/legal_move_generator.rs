//! Exhaustive legal move enumeration.
//!
//! Every origin/destination pair is offered to the gatekeeper in review
//! mode. Promotions are expanded into the four choices; a bare existence
//! check only needs the queen.

use crate::game_state::chess_types::*;

impl Board {
    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if !matches!(self.piece_at(from), Some(piece) if piece.color == self.side_to_move) {
                continue;
            }
            for to in Square::all() {
                if !self.is_legal(from, to, Some(PromotionChoice::Queen)) {
                    continue;
                }
                if self.is_promotion(from, to) {
                    moves.extend(PromotionChoice::ALL.iter().map(|choice| ChessMove {
                        from,
                        to,
                        promotion: Some(*choice),
                    }));
                } else {
                    moves.push(ChessMove {
                        from,
                        to,
                        promotion: None,
                    });
                }
            }
        }
        moves
    }

    /// Whether the side to move has any legal move; stops at the first one.
    pub fn has_legal_move(&self) -> bool {
        Square::all().any(|from| {
            Square::all().any(|to| self.is_legal(from, to, Some(PromotionChoice::Queen)))
        })
    }

    /// Legal destinations of the piece on `from`.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|to| self.is_legal(from, *to, Some(PromotionChoice::Queen)))
            .collect()
    }

    pub(crate) fn is_promotion(&self, from: Square, to: Square) -> bool {
        matches!(self.piece_at(from), Some(piece) if piece.kind == PieceKind::Pawn)
            && to.rank == self.side_to_move.promotion_rank()
    }

    /// Executes a move produced by `legal_moves`.
    pub fn play(&mut self, mv: ChessMove) -> bool {
        self.gatekeeper(mv.from, mv.to, false, mv.promotion)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 20);

        let knight_moves = moves
            .iter()
            .filter(|mv| board.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn promotions_expand_to_four_choices() {
        let board = Board::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let promotions: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == sq("a7"))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.to == sq("a8") && mv.promotion.is_some()));
    }

    #[test]
    fn legal_destinations_of_a_knight() {
        let board = Board::new();
        let mut targets = board.legal_destinations(sq("b1"));
        targets.sort_by_key(|s| s.file);
        assert_eq!(targets, vec![sq("a3"), sq("c3")]);
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(board.is_checked());
        assert!(!board.has_legal_move());
        assert!(board.legal_moves().is_empty());
        assert!(board.is_checkmate());
    }
}
