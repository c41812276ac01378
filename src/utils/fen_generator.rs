//! Board-to-FEN writer.
//!
//! Castling rights are read back from the `has_moved` flags of kings and
//! corner rooks. The board keeps no halfmove clock, so that field is 0.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let fullmove = match board.side_to_move() {
        Color::Light => board.move_count() + 1,
        Color::Dark => board.move_count().max(1),
    };

    format!(
        "{} {} {} {} 0 {}",
        generate_board_field(board.grid()),
        side_to_move,
        generate_castling_field(board),
        board
            .en_passant()
            .map(square_to_algebraic)
            .unwrap_or_else(|| "-".to_owned()),
        fullmove
    )
}

fn generate_board_field(grid: &Grid) -> String {
    let mut out = String::new();

    for (rank, row) in grid.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in row {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for (color, letters) in [(Color::Light, ['K', 'Q']), (Color::Dark, ['k', 'q'])] {
        if !board.king_unmoved(color) {
            continue;
        }
        for (rook_file, letter) in [KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE].into_iter().zip(letters) {
            let rook = board.grid()[color.back_rank()][rook_file];
            if matches!(
                rook,
                Some(Piece { kind: PieceKind::Rook, color: c, has_moved: false }) if c == color
            ) {
                out.push(letter);
            }
        }
    }

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn piece_to_fen_char(piece: &Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn starting_position_round_trips() {
        assert_eq!(generate_fen(&Board::new()), STARTING_POSITION_FEN);
    }

    #[test]
    fn tracks_en_passant_and_lost_rights() {
        let mut board = Board::new();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("e1", "e2")] {
            let from = algebraic_to_square(from).expect("square should parse");
            let to = algebraic_to_square(to).expect("square should parse");
            assert!(board.gatekeeper(from, to, false, None));
        }
        assert_eq!(
            generate_fen(&board),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPPKPPP/RNBQ1BNR b kq - 0 2"
        );

        board.undo();
        assert_eq!(
            generate_fen(&board),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );
    }
}
