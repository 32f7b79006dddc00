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

//! Pieces, piece types, and the two sides of the board.

use std::{
    fmt::{Display, Formatter},
    ops::Not,
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// The color of a piece or the player to move. `Black` is `0` and `White` is
/// `1`, so negating a `Side` with `!` toggles it.
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    /// Both sides, Black first.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];
}

impl Not for Side {
    type Output = Side;

    #[inline(always)]
    fn not(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if *self == Side::White { "white" } else { "black" })
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// A piece type, independent of color. The discriminant doubles as the
/// offset used to index into [`Piece::ALL_TYPES`] and a `Position`'s
/// per-type bitboard pairs.
pub enum PieceType {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// All six piece types, in the canonical order used for type indexing.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    #[must_use]
    /// The FEN letter for this piece type in White's case (uppercase).
    pub const fn fen_letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// A single colored piece, one of the 12 kinds on a chessboard. The
/// discriminant is chosen so that `piece as u8 % 6` recovers the
/// [`PieceType`] index (`Pawn`'s position in [`PieceType::ALL`], and so on),
/// with all six White pieces numbered before the Black ones.
pub enum Piece {
    WP = 0,
    WR = 1,
    WN = 2,
    WB = 3,
    WQ = 4,
    WK = 5,
    BP = 6,
    BR = 7,
    BN = 8,
    BB = 9,
    BQ = 10,
    BK = 11,
}

impl Piece {
    /// All 12 pieces, White first, each in [`PieceType::ALL`] order.
    pub const ALL: [Piece; 12] = [
        Piece::WP,
        Piece::WR,
        Piece::WN,
        Piece::WB,
        Piece::WQ,
        Piece::WK,
        Piece::BP,
        Piece::BR,
        Piece::BN,
        Piece::BB,
        Piece::BQ,
        Piece::BK,
    ];

    #[inline(always)]
    #[must_use]
    /// Construct a piece from its side and type.
    pub const fn new(side: Side, piece_type: PieceType) -> Piece {
        let offset = match side {
            Side::White => 0,
            Side::Black => 6,
        };
        // SAFETY: `piece_type as u8 + offset` is always one of the 12 valid
        // `Piece` discriminants (offset is 0 or 6, piece_type is 0..=5).
        unsafe { std::mem::transmute::<u8, Piece>(piece_type as u8 + offset) }
    }

    #[inline(always)]
    #[must_use]
    /// The type of this piece, independent of color.
    pub const fn piece_type(self) -> PieceType {
        PieceType::ALL[self as usize % 6]
    }

    #[inline(always)]
    #[must_use]
    /// The color of this piece.
    pub const fn side(self) -> Side {
        if (self as u8) < 6 {
            Side::White
        } else {
            Side::Black
        }
    }

    #[must_use]
    /// The FEN letter for this piece: uppercase for White, lowercase for
    /// Black.
    pub fn fen_letter(self) -> char {
        let upper = self.piece_type().fen_letter();
        match self.side() {
            Side::White => upper,
            Side::Black => upper.to_ascii_lowercase(),
        }
    }

    /// Parse a single FEN piece letter such as `'N'` or `'q'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `c` is not one of the 12 recognized piece letters.
    pub fn from_fen_letter(c: char) -> Result<Piece, &'static str> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'R' => PieceType::Rook,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return Err("unrecognized piece letter"),
        };
        Ok(Piece::new(side, piece_type))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_values_and_negation() {
        assert_eq!(Side::Black as u8, 0);
        assert_eq!(Side::White as u8, 1);
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn piece_type_index_matches_modulus() {
        for piece in Piece::ALL {
            let expected = PieceType::ALL[piece as usize % 6];
            assert_eq!(piece.piece_type(), expected);
        }
    }

    #[test]
    fn white_pieces_precede_black() {
        for i in 0..6 {
            assert_eq!(Piece::ALL[i].side(), Side::White);
            assert_eq!(Piece::ALL[i + 6].side(), Side::Black);
        }
    }

    #[test]
    fn new_round_trips_with_accessors() {
        for side in Side::ALL {
            for piece_type in PieceType::ALL {
                let piece = Piece::new(side, piece_type);
                assert_eq!(piece.side(), side);
                assert_eq!(piece.piece_type(), piece_type);
            }
        }
    }

    #[test]
    fn fen_letters_round_trip() {
        for piece in Piece::ALL {
            let letter = piece.fen_letter();
            assert_eq!(Piece::from_fen_letter(letter), Ok(piece));
        }
    }

    #[test]
    fn bad_fen_letter_rejected() {
        assert!(Piece::from_fen_letter('x').is_err());
    }
}
