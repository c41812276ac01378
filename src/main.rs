//! Hot-seat terminal game.
//!
//! Usage:
//! `cargo run -- [white_name] [black_name]`
//!
//! Commands, one per line:
//! `e2 e4 [queen|rook|bishop|knight]`, `resign [white|black]`,
//! `draw white|black`, `takeback white|black`, `board`, `fen`, `pgn`, `quit`.

use std::io::{self, BufRead, Write};

use chess_arbiter::game_state::chess_types::*;
use chess_arbiter::session::game_session::{GameSession, MoveOutcome, Player};
use chess_arbiter::utils::render_game_state::render_board;

const LIGHT_ID: u64 = 1;
const DARK_ID: u64 = 2;

fn main() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    let white = args.next().unwrap_or_else(|| "White".to_owned());
    let black = args.next().unwrap_or_else(|| "Black".to_owned());

    let mut hot_seat = HotSeat::new(white, black);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    hot_seat.print_position(&mut stdout)?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = hot_seat.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct HotSeat {
    session: GameSession,
}

impl HotSeat {
    fn new(white: String, black: String) -> Self {
        Self {
            session: GameSession::new(Player::new(LIGHT_ID, white), Player::new(DARK_ID, black)),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            ["quit"] | ["exit"] => return Ok(true),
            ["board"] => self.print_position(out)?,
            ["fen"] => writeln!(out, "{}", self.session.board().to_fen())?,
            ["pgn"] => write!(out, "{}", self.session.transcript())?,
            ["resign", rest @ ..] => {
                let Some(color) = self.color_arg(rest.first().copied(), out)? else {
                    return Ok(false);
                };
                match self.session.resign(player_id(color)) {
                    Some(winner) => {
                        writeln!(out, "{} resigns.", color.name())?;
                        self.announce_winner(winner, out)?;
                    }
                    None => writeln!(out, "The game is already over.")?,
                }
            }
            ["draw", side] => {
                let Some(color) = self.color_arg(Some(*side), out)? else {
                    return Ok(false);
                };
                if self.session.offer_draw(player_id(color)) {
                    writeln!(out, "Draw agreed.")?;
                    write!(out, "{}", self.session.transcript())?;
                } else if self.session.status().game_over {
                    writeln!(out, "The game is already over.")?;
                } else {
                    writeln!(out, "{} offers a draw.", color.name())?;
                }
            }
            ["takeback", side] => {
                let Some(color) = self.color_arg(Some(*side), out)? else {
                    return Ok(false);
                };
                if self.session.request_takeback(player_id(color)) {
                    writeln!(out, "Move taken back.")?;
                    self.print_position(out)?;
                } else {
                    writeln!(out, "{} requests a takeback.", color.name())?;
                }
            }
            [from, to] => self.handle_move(from, to, None, out)?,
            [from, to, promotion] => self.handle_move(from, to, Some(*promotion), out)?,
            _ => writeln!(out, "Unrecognized command: {}", trimmed)?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, from: &str, to: &str, promotion: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let mover = self.session.to_move().id;
        match self.session.try_move(mover, from, to, promotion) {
            MoveOutcome::Executed => {
                self.print_position(out)?;
                let status = self.session.status();
                if status.game_over {
                    match self.session.winner() {
                        Some(winner) => {
                            let id = winner.id;
                            self.announce_winner(id, out)?;
                        }
                        None => writeln!(out, "Draw.")?,
                    }
                    write!(out, "{}", self.session.transcript())?;
                }
            }
            MoveOutcome::MalformedCoordinates => writeln!(out, "Squares look like e2 or g8.")?,
            MoveOutcome::IllegalMove => writeln!(out, "Illegal move.")?,
            MoveOutcome::GameOver => writeln!(out, "The game is already over.")?,
            MoveOutcome::NotYourTurn => writeln!(out, "Not your turn.")?,
        }
        Ok(())
    }

    fn color_arg(&self, arg: Option<&str>, out: &mut impl Write) -> io::Result<Option<Color>> {
        match arg.map(|s| s.to_ascii_lowercase()) {
            None => Ok(Some(self.session.board().side_to_move())),
            Some(side) if side == "white" => Ok(Some(Color::Light)),
            Some(side) if side == "black" => Ok(Some(Color::Dark)),
            Some(side) => {
                writeln!(out, "Expected white or black, got {}", side)?;
                Ok(None)
            }
        }
    }

    fn announce_winner(&self, winner: u64, out: &mut impl Write) -> io::Result<()> {
        let color = if winner == LIGHT_ID { Color::Light } else { Color::Dark };
        writeln!(out, "{} ({}) wins.", self.session.player(color).name, color.name())
    }

    fn print_position(&self, out: &mut impl Write) -> io::Result<()> {
        let board = self.session.board();
        let orientation = match board.side_to_move() {
            Color::Light => Orientation::LightBottom,
            Color::Dark => Orientation::DarkBottom,
        };
        writeln!(out, "{}", render_board(board, orientation))?;
        if !self.session.status().game_over {
            let check = if board.is_checked() { " (check)" } else { "" };
            writeln!(out, "{} to move{}.", board.side_to_move().name(), check)?;
        }
        Ok(())
    }
}

fn player_id(color: Color) -> u64 {
    match color {
        Color::Light => LIGHT_ID,
        Color::Dark => DARK_ID,
    }
}
