//! Ray walking shared by the sliding pieces.
//!
//! Two walks exist. `project_controlled` marks threatened squares for the
//! control tables. `laser` returns the line between a slider and an enemy
//! king, either directly (check) or through exactly one enemy piece (pin).

use crate::game_state::chess_types::*;

/// Rook directions as `(d_file, d_rank)`.
pub const STRAIGHT: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop directions as `(d_file, d_rank)`.
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// How `laser` treats enemy pieces met along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaserMode {
    /// Returns the line to a king that is attacked with nothing in between.
    Check,
    /// Returns the line to a king that is shielded by exactly one enemy piece.
    Pin,
}

/// Marks every square reachable along `directions`.
///
/// A ray stops after marking the first occupied square, except that kings
/// are transparent: a king standing on the line can not step back along it
/// to escape the attack.
pub fn project_controlled(
    table: &mut ControlTable,
    grid: &Grid,
    origin: Square,
    directions: &[(i8, i8)],
) {
    for &(d_file, d_rank) in directions {
        let mut cursor = origin.offset(d_file, d_rank);
        while let Some(square) = cursor {
            table[square.rank][square.file] = true;
            match piece_at(grid, square) {
                Some(piece) if piece.kind != PieceKind::King => break,
                _ => {}
            }
            cursor = square.offset(d_file, d_rank);
        }
    }
}

/// Returns the ray from `origin` towards the enemy king along the first
/// direction that reaches it under `mode`, or an empty vector.
///
/// The ray always starts with `origin` itself, so capturing the slider is
/// a move "onto the laser". The king's own square is never included.
pub fn laser(
    grid: &Grid,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
    mode: LaserMode,
) -> Vec<Square> {
    for &(d_file, d_rank) in directions {
        let mut ray = vec![origin];
        let mut enemies_seen = 0usize;
        let mut cursor = origin.offset(d_file, d_rank);

        while let Some(square) = cursor {
            if let Some(piece) = piece_at(grid, square) {
                if piece.color == color {
                    break;
                }
                let is_king = piece.kind == PieceKind::King;
                match mode {
                    LaserMode::Check => {
                        if is_king {
                            return ray;
                        }
                        break;
                    }
                    LaserMode::Pin => {
                        if is_king && enemies_seen == 1 {
                            return ray;
                        }
                        if is_king || enemies_seen == 1 {
                            break;
                        }
                        enemies_seen += 1;
                    }
                }
            }
            ray.push(square);
            cursor = square.offset(d_file, d_rank);
        }
    }

    Vec::new()
}
