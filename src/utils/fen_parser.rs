//! FEN-to-Board parser.
//!
//! Builds a fully-initialized board from a Forsyth-Edwards Notation string.
//! FEN carries castling rights where the board carries `has_moved` flags, so
//! kings and rooks start out as moved and only the pieces a right names are
//! marked unmoved. Pawns are unmoved exactly when they stand on their start
//! rank.

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_START_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

fn fen_error(msg: impl Into<String>) -> ArbiterError {
    ArbiterError::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str) -> ArbiterResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| fen_error("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| fen_error("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| fen_error("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| fen_error("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    let mut squares = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(castling_part, &mut squares)?;
    let en_passant = parse_en_passant_square(en_passant_part)?;
    halfmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid fullmove number: {fullmove_part}")))?;

    for color in [Color::Light, Color::Dark] {
        let kings = Square::all()
            .filter(|square| {
                matches!(
                    piece_at(&squares, *square),
                    Some(Piece { kind: PieceKind::King, color: c, .. }) if c == color
                )
            })
            .count();
        if kings != 1 {
            return Err(fen_error(format!(
                "{} must have exactly one king, found {kings}",
                color.name()
            )));
        }
    }

    let move_count = match side_to_move {
        Color::Light => fullmove.saturating_sub(1),
        Color::Dark => fullmove,
    };

    Ok(Board::from_parts(squares, side_to_move, en_passant, move_count))
}

fn parse_board(board_part: &str) -> ArbiterResult<Grid> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    let mut squares: Grid = [[None; 8]; 8];

    // FEN lists the eighth rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(fen_error(format!("invalid empty-square count '{ch}'")));
                }
                file += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| fen_error(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(fen_error("board rank has too many files"));
            }

            let mut piece = Piece::new(kind, color);
            piece.has_moved = match kind {
                PieceKind::Pawn => rank != color.pawn_rank(),
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            squares[rank][file] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(fen_error("board rank does not sum to 8 files"));
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> ArbiterResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(fen_error(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn apply_castling_rights(castling_part: &str, squares: &mut Grid) -> ArbiterResult<()> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_file) = match ch {
            'K' => (Color::Light, KINGSIDE_ROOK_FILE),
            'Q' => (Color::Light, QUEENSIDE_ROOK_FILE),
            'k' => (Color::Dark, KINGSIDE_ROOK_FILE),
            'q' => (Color::Dark, QUEENSIDE_ROOK_FILE),
            _ => return Err(fen_error(format!("invalid castling rights character: {ch}"))),
        };

        let rank = color.back_rank();
        for (file, kind) in [(KING_START_FILE, PieceKind::King), (rook_file, PieceKind::Rook)] {
            match squares[rank][file].as_mut() {
                Some(piece) if piece.kind == kind && piece.color == color => {
                    piece.has_moved = false;
                }
                _ => {
                    return Err(fen_error(format!(
                        "castling right '{ch}' without {kind:?} on its home square"
                    )))
                }
            }
        }
    }

    Ok(())
}

fn parse_en_passant_square(en_passant_part: &str) -> ArbiterResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| fen_error(format!("invalid en-passant square: {en_passant_part}")))?;
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_board;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(&board, Orientation::LightBottom));

        assert_eq!(board.side_to_move(), Color::Light);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.grid(), Board::new().grid());
    }

    #[test]
    fn castling_rights_drive_moved_flags() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let moved = |name: &str| board.piece_at(sq(name)).map(|p| p.has_moved);

        assert_eq!(moved("e1"), Some(false));
        assert_eq!(moved("h1"), Some(false));
        assert_eq!(moved("a1"), Some(true));
        assert_eq!(moved("e8"), Some(false));
        assert_eq!(moved("a8"), Some(false));
        assert_eq!(moved("h8"), Some(true));
    }

    #[test]
    fn pawns_off_their_start_rank_have_moved() {
        let board = parse_fen("4k3/8/8/8/4P3/8/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(board.piece_at(sq("d2")).map(|p| p.has_moved), Some(false));
        assert_eq!(board.piece_at(sq("e4")).map(|p| p.has_moved), Some(true));
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err(), "no kings");
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1").is_err(), "right without rook");
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - z9 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
    }

    #[test]
    fn dark_to_move_keeps_the_move_number() {
        let board = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 12").expect("FEN should parse");
        assert_eq!(board.side_to_move(), Color::Dark);
        assert_eq!(board.move_count(), 12);
    }
}
