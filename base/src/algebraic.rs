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

//! The UCI long algebraic move string, e.g. `"e2e4"` or `"e7e8q"`.
//!
//! This is not full SAN: no disambiguation, no check/mate markers, no piece
//! letters for non-pawn moves. It is exactly the format UCI uses on the wire
//! and the only move notation this crate needs to speak externally.

use super::{legal, Piece, PieceType, Position, Side, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Why a move string could not be resolved against a position.
pub enum MoveStringError {
    /// The string is not 4 or 5 ASCII characters shaped like a move.
    Malformed,
    /// The string names squares and (if present) a legal promotion letter,
    /// but no legal move in the position matches it.
    NoSuchLegalMove,
}

impl Display for MoveStringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MoveStringError::Malformed => "move string is not a 4- or 5-character UCI move",
            MoveStringError::NoSuchLegalMove => "no legal move matches this move string",
        };
        write!(f, "{msg}")
    }
}

#[must_use]
/// Render `mv` as its UCI long algebraic string.
pub fn to_uci(mv: &super::Move) -> String {
    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(promo) = mv.promo {
        s.push(promo.piece_type().fen_letter().to_ascii_lowercase());
    }
    s
}

/// Parse a UCI long algebraic move string and resolve it against the legal
/// moves available in `pos`.
///
/// # Errors
///
/// Returns [`MoveStringError::Malformed`] if `s` is not shaped like a move,
/// or [`MoveStringError::NoSuchLegalMove`] if it is well-formed but does not
/// match any legal move in `pos`.
pub fn from_uci(pos: &Position, s: &str) -> Result<super::Move, MoveStringError> {
    let bytes = s.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(MoveStringError::Malformed);
    }
    let from = Square::from_algebraic(&s[0..2]).map_err(|_| MoveStringError::Malformed)?;
    let to = Square::from_algebraic(&s[2..4]).map_err(|_| MoveStringError::Malformed)?;
    let promo_type = if bytes.len() == 5 {
        Some(match bytes[4] {
            b'q' => PieceType::Queen,
            b'r' => PieceType::Rook,
            b'b' => PieceType::Bishop,
            b'n' => PieceType::Knight,
            _ => return Err(MoveStringError::Malformed),
        })
    } else {
        None
    };

    let side = pos.side;
    let wanted_promo = promo_type.map(|pt| Piece::new(side, pt));

    legal::generate_legal(pos)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promo == wanted_promo)
        .ok_or(MoveStringError::NoSuchLegalMove)
}
