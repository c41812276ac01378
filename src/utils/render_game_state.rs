//! Terminal-oriented Unicode board renderer.
//!
//! Draws `Board::square_view` as text for the hot-seat binary, tests and
//! diagnostics. Image renderers consume `square_view` directly.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board, orientation: Orientation) -> String {
    let view = board.square_view(orientation);
    let (files, ranks): (Vec<char>, Vec<char>) = match orientation {
        Orientation::LightBottom => (('a'..='h').collect(), ('1'..='8').rev().collect()),
        Orientation::DarkBottom => (('a'..='h').rev().collect(), ('1'..='8').collect()),
    };
    let file_line: String = files
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&file_line);
    out.push('\n');

    for (row, rank_char) in view.iter().zip(ranks.iter()) {
        out.push(*rank_char);
        out.push(' ');

        for (col, cell) in row.iter().enumerate() {
            match cell {
                Some(occupant) => out.push(occupant_to_unicode(*occupant)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(*rank_char);
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&file_line);

    out
}

fn occupant_to_unicode(occupant: Occupant) -> char {
    match (occupant.color, occupant.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
