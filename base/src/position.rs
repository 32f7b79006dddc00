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

//! The chess position: piece placement, side to move, and the ancillary
//! state (castling rights, en passant target, move clocks) needed to
//! generate and make moves.

use super::{Bitboard, CastlingRights, Piece, PieceType, Side, Square};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A complete chess position.
///
/// `bb` is indexed by `Piece as usize`; `occ_white`, `occ_black`, and
/// `occ_all` are unions kept in sync with `bb` by every mutating method on
/// this type, so callers never need to recompute them by hand.
pub struct Position {
    bb: [Bitboard; 12],
    pub occ_white: Bitboard,
    pub occ_black: Bitboard,
    pub occ_all: Bitboard,
    pub side: Side,
    pub castling: CastlingRights,
    pub ep_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Position {
    #[must_use]
    /// The standard chess starting position.
    pub fn start_position() -> Position {
        // Safe to unwrap: this FEN is a compile-time constant known to be
        // well-formed.
        super::fen::parse_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap()
    }

    #[must_use]
    /// Build an empty position (no pieces, White to move, no castling
    /// rights, no en passant target, both clocks zeroed). Used by the FEN
    /// parser to assemble a position piece by piece.
    pub fn empty() -> Position {
        Position {
            bb: [Bitboard::EMPTY; 12],
            occ_white: Bitboard::EMPTY,
            occ_black: Bitboard::EMPTY,
            occ_all: Bitboard::EMPTY,
            side: Side::White,
            castling: CastlingRights::NONE,
            ep_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// The bitboard of all squares occupied by `piece`.
    pub const fn bitboard(&self, piece: Piece) -> Bitboard {
        self.bb[piece as usize]
    }

    #[inline(always)]
    #[must_use]
    /// The union of every piece type belonging to `side`.
    pub const fn occupancy(&self, side: Side) -> Bitboard {
        match side {
            Side::White => self.occ_white,
            Side::Black => self.occ_black,
        }
    }

    #[must_use]
    /// The piece occupying `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&piece| self.bitboard(piece).contains(sq))
    }

    #[inline]
    /// Place `piece` on `sq`. `sq` must currently be empty; this does not
    /// check for or displace an existing occupant.
    pub fn put_piece(&mut self, piece: Piece, sq: Square) {
        self.bb[piece as usize].insert(sq);
        self.recompute_occupancy(piece.side());
    }

    #[inline]
    /// Remove `piece` from `sq`. A no-op if `piece` was not on `sq`.
    pub fn remove_piece(&mut self, piece: Piece, sq: Square) {
        self.bb[piece as usize].remove(sq);
        self.recompute_occupancy(piece.side());
    }

    fn recompute_occupancy(&mut self, side: Side) {
        let mut union = Bitboard::EMPTY;
        for piece_type in PieceType::ALL {
            union |= self.bb[Piece::new(side, piece_type) as usize];
        }
        match side {
            Side::White => self.occ_white = union,
            Side::Black => self.occ_black = union,
        }
        self.occ_all = self.occ_white | self.occ_black;
    }

    #[must_use]
    /// The square of `side`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `side` has no king on the board; every reachable position
    /// this crate constructs has exactly one king per side.
    pub fn king_square(&self, side: Side) -> Square {
        self.bitboard(Piece::new(side, PieceType::King))
            .lsb_checked()
            .expect("position has no king for side")
    }

    #[must_use]
    /// Is `side`'s king currently attacked?
    pub fn in_check(&self, side: Side) -> bool {
        super::attacks::attacked_by(self, self.king_square(side), !side)
    }
}
