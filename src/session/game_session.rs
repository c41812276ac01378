//! Two-player game session around a `Board`.
//!
//! The session owns player identities, translates coordinate strings,
//! enforces turn ownership and runs the two-party draw and takeback
//! agreements. All rule decisions are delegated to the board.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::pgn::{write_pgn, TranscriptHeaders};

/// Identity of a participant as assigned by the surrounding application.
pub type PlayerId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: Option<u32>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: u32) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Answer to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The requester is not the side to move (or not in this game).
    NotYourTurn,
    /// A coordinate was not a two-character square such as `e2`.
    MalformedCoordinates,
    /// The gatekeeper rejected the move.
    IllegalMove,
    /// The move was played.
    Executed,
    /// The game already ended; nothing was changed.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub game_over: bool,
    pub drawn: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    light: Player,
    dark: Player,
    board: Board,
    headers: TranscriptHeaders,
    // [color]
    draw_offers: [bool; 2],
    takeback_requests: [bool; 2],
    game_over: bool,
}

impl GameSession {
    pub fn new(light: Player, dark: Player) -> Self {
        Self::with_board(light, dark, Board::new())
    }

    /// Session starting from an arbitrary position.
    pub fn with_board(light: Player, dark: Player, board: Board) -> Self {
        let game_over = board.result() != GameResult::Ongoing;
        Self {
            light,
            dark,
            board,
            headers: TranscriptHeaders::default(),
            draw_offers: [false; 2],
            takeback_requests: [false; 2],
            game_over,
        }
    }

    /// Replaces the transcript tags. Player names and ratings always come
    /// from the session's players.
    pub fn with_headers(mut self, headers: TranscriptHeaders) -> Self {
        self.headers = headers;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Light => &self.light,
            Color::Dark => &self.dark,
        }
    }

    /// Color played by `player`, if they take part in this game. A player
    /// holding both sides resolves to the side to move.
    pub fn color_of(&self, player: PlayerId) -> Option<Color> {
        let to_move = self.board.side_to_move();
        [to_move, to_move.opposite()]
            .into_iter()
            .find(|color| self.player(*color).id == player)
    }

    fn colors_of(&self, player: PlayerId) -> impl Iterator<Item = Color> + '_ {
        [Color::Light, Color::Dark]
            .into_iter()
            .filter(move |color| self.player(*color).id == player)
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> &Player {
        self.player(self.board.side_to_move())
    }

    /// Validates and plays `from -> to` on behalf of `player`.
    ///
    /// `promotion` is one of `queen`, `rook`, `bishop` or `knight`; any other
    /// text counts as no choice and only matters when a pawn promotes.
    pub fn try_move(&mut self, player: PlayerId, from: &str, to: &str, promotion: Option<&str>) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::GameOver;
        }
        if self.color_of(player) != Some(self.board.side_to_move()) {
            return MoveOutcome::NotYourTurn;
        }

        let (Ok(from), Ok(to)) = (algebraic_to_square(from), algebraic_to_square(to)) else {
            return MoveOutcome::MalformedCoordinates;
        };
        let promotion = promotion.and_then(|name| PromotionChoice::from_name(name).ok());

        if !self.board.gatekeeper(from, to, false, promotion) {
            return MoveOutcome::IllegalMove;
        }

        self.takeback_requests = [false; 2];
        self.draw_offers = [false; 2];
        if !self.board.has_moves() {
            self.game_over = true;
        }
        MoveOutcome::Executed
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            game_over: self.game_over,
            drawn: self.game_over && self.board.result() == GameResult::Draw,
        }
    }

    /// Player declared the winner, if the game ended decisively.
    pub fn winner(&self) -> Option<&Player> {
        match self.board.result() {
            GameResult::LightWins => Some(&self.light),
            GameResult::DarkWins => Some(&self.dark),
            GameResult::Draw | GameResult::Ongoing => None,
        }
    }

    /// Ends the game in the opponent's favour and returns the winner's id.
    pub fn resign(&mut self, player: PlayerId) -> Option<PlayerId> {
        if self.game_over {
            return None;
        }
        let color = self.color_of(player)?;
        self.board.record_resignation(color);
        self.game_over = true;
        Some(self.player(color.opposite()).id)
    }

    /// Records a draw offer; returns true once both sides have offered in
    /// the current position and the draw is final.
    pub fn offer_draw(&mut self, player: PlayerId) -> bool {
        if self.game_over {
            return false;
        }
        let colors: Vec<Color> = self.colors_of(player).collect();
        if colors.is_empty() {
            return false;
        }

        for color in colors {
            self.draw_offers[color.index()] = true;
        }
        if self.draw_offers.iter().all(|offered| *offered) {
            self.draw_offers = [false; 2];
            self.board.record_draw_agreement();
            self.game_over = true;
            return true;
        }
        false
    }

    /// Records a takeback request; returns true once both sides have asked
    /// and the latest move was undone.
    pub fn request_takeback(&mut self, player: PlayerId) -> bool {
        if self.game_over || self.board.history_len() == 0 {
            return false;
        }
        let colors: Vec<Color> = self.colors_of(player).collect();
        if colors.is_empty() {
            return false;
        }

        for color in colors {
            self.takeback_requests[color.index()] = true;
        }
        if self.takeback_requests.iter().all(|requested| *requested) {
            self.takeback_requests = [false; 2];
            self.draw_offers = [false; 2];
            return self.board.undo();
        }
        false
    }

    pub fn transcript_headers(&self) -> TranscriptHeaders {
        TranscriptHeaders {
            white: self.light.name.clone(),
            black: self.dark.name.clone(),
            white_elo: self.light.rating,
            black_elo: self.dark.rating,
            ..self.headers.clone()
        }
    }

    /// PGN text of the game so far.
    pub fn transcript(&self) -> String {
        write_pgn(&self.board, &self.transcript_headers())
    }
}
