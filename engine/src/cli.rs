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

//! The command-line front end: flag parsing, perft/search one-shot runs,
//! and an ASCII board printer. Hand-rolled, the same way the teacher's own
//! command line tooling matches flags by hand rather than pulling in an
//! argument-parsing crate.

use crate::limit::SearchLimits;
use crate::search::search_root;

use rookery_base::{algebraic::to_uci, fen::parse_fen, Piece, Position, Square};

const HELP_TEXT: &str = "\
rookery_engine - a small UCI-compatible chess engine

USAGE:
    rookery_engine [OPTIONS]

OPTIONS:
    --help             Print this message and exit.
    --fen <FEN>         Start from the given FEN instead of the starting position.
    --perft <N>        Run perft to depth N from the starting position and print the node count.
    --search <N>       Search to depth N and print the best move found.
    --search-time <MS> Search for at most MS milliseconds and print the best move found.
    --uci              Run the UCI protocol loop on stdin/stdout instead of a one-shot command.
";

/// Run the CLI with `args` (not including the program name). Returns the
/// process exit code: `0` on success, `1` if `args` could not be parsed.
#[must_use]
pub fn run(args: &[String]) -> i32 {
    let mut fen: Option<&str> = None;
    let mut perft_depth: Option<u32> = None;
    let mut search_depth: Option<u32> = None;
    let mut search_time_ms: Option<u64> = None;
    let mut uci_mode = false;
    let mut show_help = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => show_help = true,
            "--fen" => {
                i += 1;
                match args.get(i) {
                    Some(f) => fen = Some(f),
                    None => return unrecognized("--fen requires a FEN argument"),
                }
            }
            "--perft" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => perft_depth = Some(n),
                    None => return unrecognized("--perft requires a numeric depth argument"),
                }
            }
            "--search" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => search_depth = Some(n),
                    None => return unrecognized("--search requires a numeric depth argument"),
                }
            }
            "--search-time" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(ms) => search_time_ms = Some(ms),
                    None => return unrecognized("--search-time requires a numeric millisecond argument"),
                }
            }
            "--uci" => uci_mode = true,
            other => return unrecognized(&format!("unrecognized argument: {other}")),
        }
        i += 1;
    }

    if show_help {
        println!("{HELP_TEXT}");
        return 0;
    }

    if uci_mode {
        crate::uci::run_loop();
        return 0;
    }

    let pos = match fen.map(parse_fen) {
        Some(Ok(pos)) => pos,
        Some(Err(e)) => return unrecognized(&format!("bad FEN: {e}")),
        None => Position::start_position(),
    };

    if let Some(depth) = perft_depth {
        let count = rookery_base::perft::perft(&pos, depth);
        println!("{count}");
    }

    if search_depth.is_some() || search_time_ms.is_some() {
        let mut limits = SearchLimits::new();
        if let Some(d) = search_depth {
            limits.max_depth = d;
        }
        limits.time_ms = search_time_ms;
        let result = search_root(&pos, &limits);
        match result.best_move {
            Some(mv) => println!("bestmove {} score {} depth {} nodes {}", to_uci(&mv), result.score, result.depth_reached, result.nodes),
            None => println!("bestmove (none) score {}", result.score),
        }
    }

    if perft_depth.is_none() && search_depth.is_none() && search_time_ms.is_none() {
        print_board(&pos);
    }

    0
}

fn unrecognized(message: &str) -> i32 {
    eprintln!("{message}");
    1
}

/// Print an 8x8 ASCII board, rank 8 at the top, with rank and file labels.
/// Shared by `--fen`'s default printout and the UCI `d` command.
pub fn print_board(pos: &Position) {
    for rank in (0..8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8 {
            let sq = Square::new(rank, file).unwrap();
            let c = pos.piece_at(sq).map_or('.', Piece::fen_letter);
            print!("{c} ");
        }
        println!();
    }
    println!("  a b c d e f g h");
    println!("{}", rookery_base::fen::to_fen(pos));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_flag_succeeds() {
        assert_eq!(run(&["--help".to_string()]), 0);
    }

    #[test]
    fn unrecognized_flag_fails() {
        assert_eq!(run(&["--bogus".to_string()]), 1);
    }

    #[test]
    fn perft_flag_succeeds() {
        assert_eq!(run(&["--perft".to_string(), "2".to_string()]), 0);
    }

    #[test]
    fn missing_perft_argument_fails() {
        assert_eq!(run(&["--perft".to_string()]), 1);
    }

    #[test]
    fn bad_fen_fails() {
        assert_eq!(run(&["--fen".to_string(), "not a fen".to_string()]), 1);
    }
}
