//! Crate root module declarations for the chess arbiter.
//!
//! This file exposes the rules engine (board state, pieces, legality and
//! execution), the two-player session layer and the notation helpers so
//! binaries, benches and host applications can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod snapshot;
}

pub mod pieces {
    pub mod piece;
    pub mod rays;
}

pub mod move_generation {
    pub mod execute;
    pub mod gatekeeper;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod movetext;
    pub mod pgn;
    pub mod random_playout;
    pub mod render_game_state;
}
