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

//! Filtering pseudo-legal moves down to legal ones.
//!
//! A pseudo-legal move is legal unless it leaves the mover's own king in
//! check. Rather than track pins, this is tested directly: make the move,
//! check whether the mover's king is attacked, then unmake it.

use super::{makemove, movegen, MoveList, Position};

#[must_use]
/// Every legal move available to the side to move in `pos`.
pub fn generate_legal(pos: &Position) -> MoveList {
    let mover = pos.side;
    let mut legal = movegen::generate_pseudo_legal(pos);
    let mut scratch = *pos;
    legal.retain(|mv| {
        let undo = makemove::make(&mut scratch, mv);
        let left_king_safe = !scratch.in_check(mover);
        makemove::unmake(&mut scratch, mv, &undo);
        left_king_safe
    });
    legal
}

#[must_use]
/// Is the side to move in `pos` checkmated?
pub fn is_checkmate(pos: &Position) -> bool {
    pos.in_check(pos.side) && generate_legal(pos).is_empty()
}

#[must_use]
/// Is the side to move in `pos` stalemated?
pub fn is_stalemate(pos: &Position) -> bool {
    !pos.in_check(pos.side) && generate_legal(pos).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::parse_fen;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let pos = Position::start_position();
        assert_eq!(generate_legal(&pos).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_move_off_the_pin_line() {
        // White king on e1, white rook on e2 pinned by black rook on e8.
        let pos = parse_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let legal = generate_legal(&pos);
        assert!(!legal.iter().any(|m| m.from == crate::Square::E2 && m.to.file() != 4));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let pos = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(is_checkmate(&pos));
    }

    #[test]
    fn stalemate_position_has_no_legal_moves_and_no_check() {
        let pos = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(is_stalemate(&pos));
    }
}
