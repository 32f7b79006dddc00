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

//! Parsing a single line of the UCI protocol into a [`UciCommand`].

#[derive(Debug, Clone, PartialEq, Eq)]
/// One command the GUI can send over the UCI protocol. Only the subset this
/// engine supports is represented; anything else is a parse error.
pub enum UciCommand {
    /// `uci`: identify the engine and report supported options.
    Uci,
    /// `isready`: the GUI wants to know the engine is alive.
    IsReady,
    /// `ucinewgame`: the next `position` command starts a new game.
    NewGame,
    /// `position startpos|fen <FEN> [moves <uci> ...]`.
    Position {
        /// `None` means start from the standard starting position.
        fen: Option<String>,
        /// UCI long-algebraic moves to play after setting up the position.
        moves: Vec<String>,
    },
    /// `go [depth N] [movetime MS] [nodes N]`.
    Go {
        depth: Option<u32>,
        movetime_ms: Option<u64>,
        nodes: Option<u64>,
    },
    /// `perft N`: run perft from the current position and print the count.
    /// Not part of standard UCI, but a conventional engine-testing
    /// extension most UCI engines (and most UCI GUIs) recognize.
    Perft(u32),
    /// `d`: print the current position as an ASCII board plus its FEN.
    Display,
    /// `quit`: exit the process.
    Quit,
}

/// Parse one line of UCI input.
///
/// # Errors
///
/// Returns `Err` with a human-readable message if the line's first token is
/// not a recognized command, or a recognized command is missing a required
/// argument.
pub fn parse_line(line: &str) -> Result<UciCommand, String> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or("empty line")?;

    match command {
        "uci" => Ok(UciCommand::Uci),
        "isready" => Ok(UciCommand::IsReady),
        "ucinewgame" => Ok(UciCommand::NewGame),
        "d" => Ok(UciCommand::Display),
        "quit" => Ok(UciCommand::Quit),
        "position" => parse_position(tokens),
        "go" => parse_go(tokens),
        "perft" => {
            let depth = tokens
                .next()
                .ok_or("perft requires a depth argument")?
                .parse()
                .map_err(|_| "perft depth must be a non-negative integer")?;
            Ok(UciCommand::Perft(depth))
        }
        other => Err(format!("unrecognized command: {other}")),
    }
}

fn parse_position<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<UciCommand, String> {
    let kind = tokens.next().ok_or("position requires 'startpos' or 'fen'")?;
    let fen = match kind {
        "startpos" => None,
        "fen" => {
            let fen_tokens: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
            if fen_tokens.len() < 4 {
                return Err("fen field for position must have at least 4 tokens".to_string());
            }
            Some(fen_tokens.join(" "))
        }
        other => return Err(format!("unrecognized position kind: {other}")),
    };

    // if `kind` was "fen", the `moves` keyword (if any) was already
    // consumed by `take_while` above; if it was "startpos" we still need to
    // look for it ourselves.
    let moves: Vec<String> = if kind == "startpos" {
        match tokens.next() {
            Some("moves") => tokens.map(String::from).collect(),
            Some(other) => return Err(format!("unexpected token after startpos: {other}")),
            None => Vec::new(),
        }
    } else {
        tokens.map(String::from).collect()
    };

    Ok(UciCommand::Position { fen, moves })
}

fn parse_go<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<UciCommand, String> {
    let mut depth = None;
    let mut movetime_ms = None;
    let mut nodes = None;

    while let Some(token) = tokens.next() {
        match token {
            "depth" => {
                depth = Some(
                    tokens
                        .next()
                        .ok_or("go depth requires a number")?
                        .parse()
                        .map_err(|_| "go depth must be a non-negative integer")?,
                );
            }
            "movetime" => {
                movetime_ms = Some(
                    tokens
                        .next()
                        .ok_or("go movetime requires a number")?
                        .parse()
                        .map_err(|_| "go movetime must be a non-negative integer")?,
                );
            }
            "nodes" => {
                nodes = Some(
                    tokens
                        .next()
                        .ok_or("go nodes requires a number")?
                        .parse()
                        .map_err(|_| "go nodes must be a non-negative integer")?,
                );
            }
            other => return Err(format!("unrecognized go option: {other}")),
        }
    }

    Ok(UciCommand::Go {
        depth,
        movetime_ms,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_line("uci"), Ok(UciCommand::Uci));
        assert_eq!(parse_line("isready"), Ok(UciCommand::IsReady));
        assert_eq!(parse_line("ucinewgame"), Ok(UciCommand::NewGame));
        assert_eq!(parse_line("d"), Ok(UciCommand::Display));
        assert_eq!(parse_line("quit"), Ok(UciCommand::Quit));
    }

    #[test]
    fn parses_position_startpos_with_moves() {
        assert_eq!(
            parse_line("position startpos moves e2e4 e7e5"),
            Ok(UciCommand::Position {
                fen: None,
                moves: vec!["e2e4".to_string(), "e7e5".to_string()],
            })
        );
    }

    #[test]
    fn parses_position_fen_without_moves() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            parse_line(&format!("position fen {fen}")),
            Ok(UciCommand::Position {
                fen: Some(fen.to_string()),
                moves: Vec::new(),
            })
        );
    }

    #[test]
    fn parses_go_with_multiple_options() {
        assert_eq!(
            parse_line("go depth 6 nodes 100000"),
            Ok(UciCommand::Go {
                depth: Some(6),
                movetime_ms: None,
                nodes: Some(100_000),
            })
        );
    }

    #[test]
    fn parses_perft() {
        assert_eq!(parse_line("perft 4"), Ok(UciCommand::Perft(4)));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
    }
}
