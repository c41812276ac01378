//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry and the movetext annotations the
//! board appends when a game ends.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// File index of the king at the start of the game.
pub const KING_START_FILE: usize = 4;
/// File index of the kingside rook.
pub const KINGSIDE_ROOK_FILE: usize = 7;
/// File index of the queenside rook.
pub const QUEENSIDE_ROOK_FILE: usize = 0;

pub const KINGSIDE_CASTLE: &str = "O-O";
pub const QUEENSIDE_CASTLE: &str = "O-O-O";

pub const CHECK_SUFFIX: &str = "+";
pub const CHECKMATE_SUFFIX: &str = "#";
pub const STALEMATE_COMMENT: &str = "{ Draw by stalemate. }";
pub const DRAW_AGREED_COMMENT: &str = "{ A draw was agreed. }";

/// Knight jumps as `(d_file, d_rank)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King steps as `(d_file, d_rank)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
