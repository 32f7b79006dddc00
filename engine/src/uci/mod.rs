/*
  Rookery, a UCI-compatible chess engine.
  Copyright (C) 2024 The Rookery Authors (see AUTHORS.md file)

  Rookery is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Rookery is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The UCI protocol adapter: a stdin/stdout loop over [`parse::UciCommand`]
//! and [`send::UciMessage`].

mod parse;
mod send;

pub use parse::{parse_line, UciCommand};
pub use send::UciMessage;

use std::io::{self, BufRead, Write};

use rookery_base::{algebraic, fen, perft::perft, Position};

use crate::cli::print_board;
use crate::limit::SearchLimits;
use crate::search::search_root;

const ENGINE_NAME: &str = "Rookery 0.1.0";
const ENGINE_AUTHOR: &str = "The Rookery Authors";

/// Run the UCI main loop, reading commands from stdin and writing responses
/// to stdout until `quit` or end of input. Diagnostics that are not part of
/// the UCI protocol itself (malformed input lines) go to stderr, never
/// stdout, so they cannot be mistaken by the GUI for a protocol response.
pub fn run_loop() {
    let stdin = io::stdin();
    let mut pos = Position::start_position();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(command) => {
                if !dispatch(command, &mut pos) {
                    break;
                }
            }
            Err(message) => eprintln!("info string {message}"),
        }
    }
}

/// Handle one parsed command against `pos`. Returns `false` if the loop
/// should stop (i.e. the command was `quit`).
fn dispatch(command: UciCommand, pos: &mut Position) -> bool {
    match command {
        UciCommand::Uci => {
            println!(
                "{}",
                UciMessage::Id {
                    name: ENGINE_NAME,
                    author: ENGINE_AUTHOR,
                }
            );
            println!("{}", UciMessage::UciOk);
        }
        UciCommand::IsReady => {
            println!("{}", UciMessage::ReadyOk);
        }
        UciCommand::NewGame => {
            *pos = Position::start_position();
        }
        UciCommand::Position { fen: fen_str, moves } => match apply_position(fen_str, &moves) {
            Ok(new_pos) => *pos = new_pos,
            Err(message) => eprintln!("info string {message}"),
        },
        UciCommand::Go {
            depth,
            movetime_ms,
            nodes,
        } => {
            let mut limits = SearchLimits::new();
            if let Some(d) = depth {
                limits.max_depth = d;
            }
            limits.time_ms = movetime_ms;
            limits.node_limit = nodes;

            let result = search_root(pos, &limits);
            match result.best_move {
                Some(mv) => println!("{}", UciMessage::BestMove { mv: &algebraic::to_uci(&mv) }),
                None => println!("{}", UciMessage::BestMove { mv: "0000" }),
            }
        }
        UciCommand::Perft(depth) => {
            println!("{}", perft(pos, depth));
        }
        UciCommand::Display => print_board(pos),
        UciCommand::Quit => return false,
    }
    let _ = io::stdout().flush();
    true
}

/// Rebuild a position from `fen_str` (or the starting position if `None`)
/// and replay `moves` against it.
fn apply_position(fen_str: Option<String>, moves: &[String]) -> Result<Position, String> {
    let mut pos = match fen_str {
        Some(f) => fen::parse_fen(&f).map_err(|e| e.to_string())?,
        None => Position::start_position(),
    };

    for mv_str in moves {
        let mv = algebraic::from_uci(&pos, mv_str).map_err(|e| e.to_string())?;
        rookery_base::makemove::make(&mut pos, &mv);
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_position_replays_moves_from_startpos() {
        let pos = apply_position(None, &["e2e4".to_string(), "e7e5".to_string()]).unwrap();
        assert_eq!(pos.side, rookery_base::Side::White);
        assert!(pos.piece_at(rookery_base::Square::E4).is_some());
        assert!(pos.piece_at(rookery_base::Square::E5).is_some());
    }

    #[test]
    fn apply_position_rejects_bad_fen() {
        assert!(apply_position(Some("not a fen".to_string()), &[]).is_err());
    }

    #[test]
    fn apply_position_rejects_illegal_move() {
        assert!(apply_position(None, &["e2e5".to_string()]).is_err());
    }
}
