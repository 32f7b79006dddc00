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

//! Material evaluation, from the perspective of the side to move.
//!
//! Every piece is assigned a fixed value in centipawns. There is no
//! positional term: a knight on the rim is worth exactly as much as a
//! knight in the center.

use rookery_base::{Piece, PieceType, Position, Side};

/// A centipawn score. Positive favors the side to move.
pub type Centipawns = i32;

/// The score awarded for checkmating the opponent on the very next ply.
/// Mates further from the root are reported as `MATE - plies_from_root`, so
/// shallower mates always outrank deeper ones.
pub const MATE: Centipawns = 20_000;

/// The score of a drawn position (stalemate, or any position this engine
/// cannot otherwise distinguish from a draw).
pub const DRAW: Centipawns = 0;

#[must_use]
/// The material value of one piece type, in centipawns. Kings have no
/// material value: they are never captured, so it would never be added to
/// or subtracted from a score.
pub const fn piece_value(piece_type: PieceType) -> Centipawns {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 0,
    }
}

#[must_use]
/// Evaluate `pos` by material alone, from the perspective of the side to
/// move: positive means the side to move is ahead on material.
pub fn evaluate(pos: &Position) -> Centipawns {
    let mut score: Centipawns = 0;
    for piece in Piece::ALL {
        let count = pos.bitboard(piece).popcount() as Centipawns;
        let value = count * piece_value(piece.piece_type());
        score += match piece.side() {
            Side::White => value,
            Side::Black => -value,
        };
    }
    match pos.side {
        Side::White => score,
        Side::Black => -score,
    }
}
