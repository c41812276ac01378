//! Movement and threat rules of the six piece kinds.
//!
//! `Piece` is a small `Copy` value. The three rule queries dispatch on
//! `PieceKind`:
//! - `can_move` is pure geometry and ignores occupancy along the path;
//! - `controlled` marks the squares the piece threatens on a grid;
//! - `check_laser` returns a slider's line to the enemy king.

use crate::game_state::chess_rules::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::game_state::chess_types::*;
use crate::pieces::rays::{laser, project_controlled, LaserMode, DIAGONAL, STRAIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn occupant(self) -> Occupant {
        Occupant {
            color: self.color,
            kind: self.kind,
        }
    }

    /// Geometric move test. `is_capture` only matters for pawns.
    pub fn can_move(&self, from: Square, to: Square, is_capture: bool) -> bool {
        let dx = from.file.abs_diff(to.file);
        let dy = from.rank.abs_diff(to.rank);

        match self.kind {
            PieceKind::King => dx <= 1 && dy <= 1 && (dx + dy) > 0,
            PieceKind::Queen => (dx == dy || dx == 0 || dy == 0) && (dx + dy) > 0,
            PieceKind::Rook => (dx == 0) != (dy == 0),
            PieceKind::Bishop => dx == dy && dx > 0,
            PieceKind::Knight => (dx == 2 && dy == 1) || (dx == 1 && dy == 2),
            PieceKind::Pawn => {
                let advance = (to.rank as i8 - from.rank as i8) * self.color.forward();
                match (dx, advance, is_capture) {
                    (0, 1, false) => true,
                    (1, 1, true) => true,
                    (0, 2, false) => !self.has_moved && from.rank == self.color.pawn_rank(),
                    _ => false,
                }
            }
        }
    }

    /// Marks every square this piece threatens from `square`.
    pub fn controlled(&self, table: &mut ControlTable, grid: &Grid, square: Square) {
        match self.kind {
            PieceKind::Rook => project_controlled(table, grid, square, &STRAIGHT),
            PieceKind::Bishop => project_controlled(table, grid, square, &DIAGONAL),
            PieceKind::Queen => {
                project_controlled(table, grid, square, &STRAIGHT);
                project_controlled(table, grid, square, &DIAGONAL);
            }
            PieceKind::Knight => mark_offsets(table, square, &KNIGHT_OFFSETS),
            PieceKind::King => mark_offsets(table, square, &KING_OFFSETS),
            PieceKind::Pawn => {
                if square.rank == self.color.promotion_rank() {
                    return;
                }
                let forward = self.color.forward();
                mark_offsets(table, square, &[(-1, forward), (1, forward)]);
            }
        }
    }

    /// Returns the slider's line to the enemy king, or an empty vector.
    ///
    /// Queens report a straight line first and only look diagonally when no
    /// straight line was found. Non-sliders never pin and always return empty.
    pub fn check_laser(&self, grid: &Grid, square: Square, mode: LaserMode) -> Vec<Square> {
        match self.kind {
            PieceKind::Rook => laser(grid, square, self.color, &STRAIGHT, mode),
            PieceKind::Bishop => laser(grid, square, self.color, &DIAGONAL, mode),
            PieceKind::Queen => {
                let straight = laser(grid, square, self.color, &STRAIGHT, mode);
                if straight.is_empty() {
                    laser(grid, square, self.color, &DIAGONAL, mode)
                } else {
                    straight
                }
            }
            PieceKind::Knight | PieceKind::Pawn | PieceKind::King => Vec::new(),
        }
    }
}

fn mark_offsets(table: &mut ControlTable, square: Square, offsets: &[(i8, i8)]) {
    for &(d_file, d_rank) in offsets {
        if let Some(target) = square.offset(d_file, d_rank) {
            table[target.rank][target.file] = true;
        }
    }
}
