//! PGN transcript export.
//!
//! Writes the tag section from `TranscriptHeaders` and appends the movetext
//! the board accumulated while executing moves. The board already writes
//! the final result code when a game ends; an unfinished game gets `*`.

use chrono::{Local, NaiveDate};

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptHeaders {
    pub event: String,
    pub site: String,
    pub date: NaiveDate,
    pub round: String,
    pub white: String,
    pub black: String,
    pub white_elo: Option<u32>,
    pub black_elo: Option<u32>,
}

impl Default for TranscriptHeaders {
    fn default() -> Self {
        Self {
            event: "Casual Chess game".to_owned(),
            site: "Local".to_owned(),
            date: Local::now().date_naive(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
            white_elo: None,
            black_elo: None,
        }
    }
}

pub fn write_pgn(board: &Board, headers: &TranscriptHeaders) -> String {
    let elo = |rating: Option<u32>| rating.map(|x| x.to_string()).unwrap_or_else(|| "-".to_owned());

    let tags = [
        ("Event", headers.event.clone()),
        ("Site", headers.site.clone()),
        ("Date", headers.date.format("%Y.%m.%d").to_string()),
        ("Round", headers.round.clone()),
        ("White", headers.white.clone()),
        ("Black", headers.black.clone()),
        ("Result", board.result().code().to_owned()),
        ("WhiteElo", elo(headers.white_elo)),
        ("BlackElo", elo(headers.black_elo)),
        ("Variant", "Standard".to_owned()),
    ];

    let mut out = String::new();
    for (key, value) in tags {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(&value)));
    }
    out.push('\n');

    out.push_str(board.movetext());
    if board.result() == GameResult::Ongoing {
        if !board.movetext().is_empty() {
            out.push(' ');
        }
        out.push_str(GameResult::Ongoing.code());
    }
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
