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

//! Messages sent from the engine back to the GUI, one per line on stdout.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A message the engine can send to the GUI. `Display` renders it in the
/// exact text form the UCI protocol expects.
pub enum UciMessage<'a> {
    /// Reply to `uci`: engine identification.
    Id { name: &'a str, author: &'a str },
    /// Reply to `uci`, sent after `Id` and any options: engine is ready to
    /// be configured.
    UciOk,
    /// Reply to `isready`.
    ReadyOk,
    /// Reply to `go`: the chosen move, in UCI long algebraic notation.
    BestMove { mv: &'a str },
    /// A free-form informational string, sent unconditionally (this engine
    /// has no `debug` toggle to gate it behind).
    Info(&'a str),
}

impl<'a> Display for UciMessage<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UciMessage::Id { name, author } => {
                writeln!(f, "id name {name}")?;
                write!(f, "id author {author}")
            }
            UciMessage::UciOk => write!(f, "uciok"),
            UciMessage::ReadyOk => write!(f, "readyok"),
            UciMessage::BestMove { mv } => write!(f, "bestmove {mv}"),
            UciMessage::Info(s) => write!(f, "info string {s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_message_has_two_lines() {
        let msg = UciMessage::Id {
            name: "Rookery 0.1.0",
            author: "The Rookery Authors",
        };
        assert_eq!(msg.to_string(), "id name Rookery 0.1.0\nid author The Rookery Authors");
    }

    #[test]
    fn bestmove_message_renders_move() {
        let msg = UciMessage::BestMove { mv: "e2e4" };
        assert_eq!(msg.to_string(), "bestmove e2e4");
    }
}
