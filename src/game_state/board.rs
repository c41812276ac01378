//! Central board state machine.
//!
//! `Board` owns the 8x8 grid, the per-color control tables, turn and
//! en-passant state, the accumulated movetext and a stack of full snapshots
//! for undo. Legality lives in `move_generation::gatekeeper` and execution
//! in `move_generation::execute`; both are `impl Board` blocks.

use crate::errors::ArbiterResult;
use crate::game_state::chess_rules::{DRAW_AGREED_COMMENT, KING_START_FILE};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) squares: Grid,
    // [color]
    pub(crate) controlled: [ControlTable; 2],

    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) is_checked: bool,
    pub(crate) has_moves: bool,

    // Number of Light moves started; drives movetext numbering.
    pub(crate) move_count: u16,
    pub(crate) movetext: String,
    pub(crate) result: GameResult,

    pub(crate) history: Vec<BoardSnapshot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position, Light to move.
    pub fn new() -> Self {
        let mut squares: Grid = [[None; 8]; 8];
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK_ORDER.iter().enumerate() {
                squares[color.back_rank()][file] = Some(Piece::new(*kind, color));
                squares[color.pawn_rank()][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        Self::from_parts(squares, Color::Light, None, 0)
    }

    /// Board from a Forsyth-Edwards Notation record.
    pub fn from_fen(fen: &str) -> ArbiterResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assembles a board and computes its derived tables and flags.
    pub(crate) fn from_parts(
        squares: Grid,
        side_to_move: Color,
        en_passant: Option<Square>,
        move_count: u16,
    ) -> Self {
        let mut board = Self {
            squares,
            controlled: [[[false; 8]; 8]; 2],
            side_to_move,
            en_passant,
            is_checked: false,
            has_moves: true,
            move_count,
            movetext: String::new(),
            result: GameResult::Ongoing,
            history: Vec::new(),
        };
        board.refresh_status();
        if board.is_checkmate() {
            board.result = GameResult::win_for(side_to_move.opposite());
        } else if board.is_stalemate() {
            board.result = GameResult::Draw;
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(&self.squares, square)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Whether the side to move has at least one legal move.
    #[inline]
    pub fn has_moves(&self) -> bool {
        self.has_moves
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checked && !self.has_moves
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        !self.is_checked && !self.has_moves
    }

    #[inline]
    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub fn movetext(&self) -> &str {
        &self.movetext
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Number of moves that can still be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Control table of `color`, indexed `[rank][file]`.
    #[inline]
    pub fn controlled_by(&self, color: Color) -> &ControlTable {
        &self.controlled[color.index()]
    }

    #[inline]
    pub fn is_controlled_by(&self, color: Color, square: Square) -> bool {
        self.controlled[color.index()][square.rank][square.file]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|square| {
            matches!(
                self.piece_at(*square),
                Some(Piece { kind: PieceKind::King, color: c, .. }) if c == color
            )
        })
    }

    /// Squares of `attacker_color` pieces whose threats reach `target`.
    pub fn attackers_of(&self, target: Square, attacker_color: Color) -> Vec<Square> {
        Square::all()
            .filter(|square| match self.piece_at(*square) {
                Some(piece) if piece.color == attacker_color => {
                    let mut table: ControlTable = [[false; 8]; 8];
                    piece.controlled(&mut table, &self.squares, *square);
                    table[target.rank][target.file]
                }
                _ => false,
            })
            .collect()
    }

    /// Rebuilds both control tables from the grid.
    pub(crate) fn update_controlled(&mut self) {
        self.controlled = control_tables(&self.squares);
    }

    /// Recomputes control tables, the check flag and the has-moves flag.
    pub(crate) fn refresh_status(&mut self) {
        self.update_controlled();
        self.is_checked = self.compute_check();
        self.has_moves = self.has_legal_move();
    }

    fn compute_check(&self) -> bool {
        self.king_square(self.side_to_move)
            .map(|king| self.is_controlled_by(self.side_to_move.opposite(), king))
            .unwrap_or(false)
    }

    pub(crate) fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            squares: self.squares,
            side_to_move: self.side_to_move,
            en_passant: self.en_passant,
            move_count: self.move_count,
            is_checked: self.is_checked,
            has_moves: self.has_moves,
            movetext: self.movetext.clone(),
            result: self.result,
        }
    }

    fn restore(&mut self, snapshot: BoardSnapshot) {
        self.squares = snapshot.squares;
        self.side_to_move = snapshot.side_to_move;
        self.en_passant = snapshot.en_passant;
        self.move_count = snapshot.move_count;
        self.is_checked = snapshot.is_checked;
        self.has_moves = snapshot.has_moves;
        self.movetext = snapshot.movetext;
        self.result = snapshot.result;
        self.update_controlled();
    }

    /// Pops the latest snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Appends a draw-by-agreement annotation and sets the result.
    pub fn record_draw_agreement(&mut self) {
        self.result = GameResult::Draw;
        self.append_movetext(&format!("{} {}", DRAW_AGREED_COMMENT, self.result.code()));
    }

    /// Appends a resignation annotation for `color` and awards the game to
    /// the opponent.
    pub fn record_resignation(&mut self, color: Color) {
        self.result = GameResult::win_for(color.opposite());
        self.append_movetext(&format!("{{ {} resigns. }} {}", color.name(), self.result.code()));
    }

    pub(crate) fn append_movetext(&mut self, token: &str) {
        if !self.movetext.is_empty() {
            self.movetext.push(' ');
        }
        self.movetext.push_str(token);
    }

    /// Occupants in display order, top row first.
    ///
    /// `LightBottom` puts the eighth rank on top with the a-file on the left;
    /// `DarkBottom` is the same picture rotated by 180 degrees.
    pub fn square_view(&self, orientation: Orientation) -> [[Option<Occupant>; 8]; 8] {
        let mut view = [[None; 8]; 8];
        for square in Square::all() {
            let (row, col) = match orientation {
                Orientation::LightBottom => (square.rank, square.file),
                Orientation::DarkBottom => (7 - square.rank, 7 - square.file),
            };
            view[row][col] = self.piece_at(square).map(Piece::occupant);
        }
        view
    }

    /// Whether `color` still has an unmoved king on its home square.
    pub(crate) fn king_unmoved(&self, color: Color) -> bool {
        matches!(
            self.squares[color.back_rank()][KING_START_FILE],
            Some(Piece { kind: PieceKind::King, color: c, has_moved: false }) if c == color
        )
    }
}

/// Control tables for both colors over an arbitrary grid.
pub(crate) fn control_tables(grid: &Grid) -> [ControlTable; 2] {
    let mut tables = [[[false; 8]; 8]; 2];
    for square in Square::all() {
        if let Some(piece) = piece_at(grid, square) {
            piece.controlled(&mut tables[piece.color.index()], grid, square);
        }
    }
    tables
}
