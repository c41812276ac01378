use crate::game_state::chess_types::*;

/// Full copy of the mutable board state, pushed before every executed move.
///
/// Control tables are not stored; they are recomputed from `squares` after
/// a snapshot is restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub squares: Grid,
    pub side_to_move: Color,
    pub en_passant: Option<Square>,
    pub move_count: u16,
    pub is_checked: bool,
    pub has_moves: bool,
    pub movetext: String,
    pub result: GameResult,
}
