//! Value types shared by the board, the pieces and the session layer.
//!
//! Squares use the display orientation of the grid: rank index 0 is the
//! eighth rank (Dark's back rank) and file index 0 is the `a` file, so
//! `grid[rank][file]` reads top to bottom from Light's point of view.

use crate::errors::{ArbiterError, ArbiterResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::snapshot::BoardSnapshot;
pub use crate::pieces::piece::Piece;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank index step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Rank index holding this color's pieces at the start.
    #[inline]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rank index holding this color's pawns at the start.
    #[inline]
    pub const fn pawn_rank(self) -> usize {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Rank index on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used in movetext; pawns have none.
    pub const fn notation_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// A board coordinate. `rank` 0 is the eighth rank, `file` 0 is the a-file.
///
/// Fields are crate-private so every square seen by `Board` is on the grid;
/// outside callers go through `new`, `offset` or the algebraic parser.
///
/// ```compile_fail
/// use chess_arbiter::game_state::chess_types::Square;
/// let _off_board = Square { file: 8, rank: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub(crate) file: usize,
    pub(crate) rank: usize,
}

impl Square {
    /// Builds a square, rejecting indices outside the 8x8 grid.
    #[inline]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> usize {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> usize {
        self.rank
    }

    /// Steps by `(d_file, d_rank)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as usize,
                rank: rank as usize,
            })
        } else {
            None
        }
    }

    /// Iterates all 64 squares rank by rank from the eighth rank down.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square { file, rank }))
    }

    pub fn file_char(self) -> char {
        char::from(b'a' + self.file as u8)
    }

    pub fn rank_char(self) -> char {
        char::from(b'8' - self.rank as u8)
    }
}

/// Per-color table of squares a side could move or capture onto.
pub type ControlTable = [[bool; 8]; 8];

/// Piece placement indexed `[rank][file]`.
pub type Grid = [[Option<Piece>; 8]; 8];

#[inline]
pub fn piece_at(grid: &Grid, square: Square) -> Option<Piece> {
    grid[square.rank][square.file]
}

/// Piece a pawn may become when it reaches the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    /// Parses the request names `queen`, `rook`, `bishop` and `knight`.
    pub fn from_name(name: &str) -> ArbiterResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "queen" => Ok(PromotionChoice::Queen),
            "rook" => Ok(PromotionChoice::Rook),
            "bishop" => Ok(PromotionChoice::Bishop),
            "knight" => Ok(PromotionChoice::Knight),
            _ => Err(ArbiterError::InvalidPromotion(name.to_owned())),
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            PromotionChoice::Queen => "=Q",
            PromotionChoice::Rook => "=R",
            PromotionChoice::Bishop => "=B",
            PromotionChoice::Knight => "=N",
        }
    }
}

/// Outcome code written into the PGN `Result` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    LightWins,
    DarkWins,
    Draw,
    #[default]
    Ongoing,
}

impl GameResult {
    pub const fn code(self) -> &'static str {
        match self {
            GameResult::LightWins => "1-0",
            GameResult::DarkWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::Light => GameResult::LightWins,
            Color::Dark => GameResult::DarkWins,
        }
    }
}

/// A move as origin, destination and optional promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionChoice>,
}

/// What the render collaborator needs to know about an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub color: Color,
    pub kind: PieceKind,
}

/// Which side sits at the bottom of a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    LightBottom,
    DarkBottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offsets_stay_on_board() {
        let a8 = Square::new(0, 0).expect("a8 is on the board");
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 1), Square::new(1, 1));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn checked_constructors_keep_squares_on_the_grid() {
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::new(usize::MAX, 3), None);

        let h1 = Square::new(7, 7).expect("h1 is on the board");
        assert_eq!((h1.file(), h1.rank()), (7, 7));
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, 1), None);

        assert!(Square::all().all(|square| square.file() < 8 && square.rank() < 8));
    }

    #[test]
    fn square_chars_follow_inverted_rank() {
        let e2 = Square::new(4, 6).expect("e2 is on the board");
        assert_eq!(e2.file_char(), 'e');
        assert_eq!(e2.rank_char(), '2');
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn promotion_names_parse() {
        assert_eq!(PromotionChoice::from_name("queen"), Ok(PromotionChoice::Queen));
        assert_eq!(PromotionChoice::from_name("Knight"), Ok(PromotionChoice::Knight));
        assert!(PromotionChoice::from_name("king").is_err());
    }

    #[test]
    fn pawn_geometry_is_mirrored() {
        assert_eq!(Color::Light.forward(), -1);
        assert_eq!(Color::Dark.forward(), 1);
        assert_eq!(Color::Light.promotion_rank(), Color::Dark.back_rank());
    }
}
