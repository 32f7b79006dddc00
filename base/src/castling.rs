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

//! Castling rights, tracked as a small bitset.

use super::Side;

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// White may castle kingside.
pub const WHITE_KINGSIDE: u8 = 1;
/// White may castle queenside.
pub const WHITE_QUEENSIDE: u8 = 2;
/// Black may castle kingside.
pub const BLACK_KINGSIDE: u8 = 4;
/// Black may castle queenside.
pub const BLACK_QUEENSIDE: u8 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
/// The set of castling moves still available to either side. Bits only ever
/// get cleared over a game: once a king or rook has moved or been captured,
/// the corresponding bit is cleared and never set again.
pub struct CastlingRights(pub u8);

impl CastlingRights {
    /// No castling rights remain for either side.
    pub const NONE: CastlingRights = CastlingRights(0);
    /// All four castling rights, as at the start of a game.
    pub const ALL: CastlingRights = CastlingRights(
        WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE,
    );

    #[inline(always)]
    #[must_use]
    /// Does this set contain `right` (one of the `*_KINGSIDE`/`*_QUEENSIDE`
    /// constants, or any combination of them)?
    pub const fn has(self, right: u8) -> bool {
        self.0 & right == right
    }

    #[inline(always)]
    /// Clear `right` from this set.
    pub fn clear(&mut self, right: u8) {
        self.0 &= !right;
    }

    #[inline(always)]
    #[must_use]
    /// Does `side` retain its kingside right?
    pub const fn kingside(self, side: Side) -> bool {
        match side {
            Side::White => self.has(WHITE_KINGSIDE),
            Side::Black => self.has(BLACK_KINGSIDE),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Does `side` retain its queenside right?
    pub const fn queenside(self, side: Side) -> bool {
        match side {
            Side::White => self.has(WHITE_QUEENSIDE),
            Side::Black => self.has(BLACK_QUEENSIDE),
        }
    }

    #[inline(always)]
    /// Clear both of `side`'s castling rights, as happens when its king
    /// moves (including by castling).
    pub fn clear_side(&mut self, side: Side) {
        match side {
            Side::White => self.clear(WHITE_KINGSIDE | WHITE_QUEENSIDE),
            Side::Black => self.clear(BLACK_KINGSIDE | BLACK_QUEENSIDE),
        }
    }

    /// Render as the FEN castling-availability field, e.g. `"KQkq"`, or `"-"`
    /// if no rights remain.
    #[must_use]
    pub fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.has(WHITE_KINGSIDE) {
            s.push('K');
        }
        if self.has(WHITE_QUEENSIDE) {
            s.push('Q');
        }
        if self.has(BLACK_KINGSIDE) {
            s.push('k');
        }
        if self.has(BLACK_QUEENSIDE) {
            s.push('q');
        }
        s
    }

    /// Parse a FEN castling-availability field such as `"KQkq"` or `"-"`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `s` contains any character other than `K`, `Q`, `k`,
    /// `q`, or the sole sentinel `-`.
    pub fn from_fen_field(s: &str) -> Result<CastlingRights, &'static str> {
        if s == "-" {
            return Ok(CastlingRights::NONE);
        }
        let mut rights = CastlingRights::NONE;
        for c in s.chars() {
            let bit = match c {
                'K' => WHITE_KINGSIDE,
                'Q' => WHITE_QUEENSIDE,
                'k' => BLACK_KINGSIDE,
                'q' => BLACK_QUEENSIDE,
                _ => return Err("illegal character in castling availability field"),
            };
            rights.0 |= bit;
        }
        Ok(rights)
    }
}

impl BitAnd for CastlingRights {
    type Output = CastlingRights;
    fn bitand(self, rhs: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & rhs.0)
    }
}

impl BitOr for CastlingRights {
    type Output = CastlingRights;
    fn bitor(self, rhs: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | rhs.0)
    }
}

impl BitOrAssign for CastlingRights {
    fn bitor_assign(&mut self, rhs: CastlingRights) {
        self.0 |= rhs.0;
    }
}

impl Not for CastlingRights {
    type Output = CastlingRights;
    fn not(self) -> CastlingRights {
        CastlingRights(!self.0 & CastlingRights::ALL.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values_match_layout() {
        assert_eq!(WHITE_KINGSIDE, 1);
        assert_eq!(WHITE_QUEENSIDE, 2);
        assert_eq!(BLACK_KINGSIDE, 4);
        assert_eq!(BLACK_QUEENSIDE, 8);
    }

    #[test]
    fn clear_side_only_affects_that_side() {
        let mut rights = CastlingRights::ALL;
        rights.clear_side(Side::White);
        assert!(!rights.kingside(Side::White));
        assert!(!rights.queenside(Side::White));
        assert!(rights.kingside(Side::Black));
        assert!(rights.queenside(Side::Black));
    }

    #[test]
    fn fen_field_round_trip() {
        for s in ["KQkq", "Kk", "-", "Qq"] {
            let rights = CastlingRights::from_fen_field(s).unwrap();
            assert_eq!(rights.to_fen_field(), s);
        }
    }

    #[test]
    fn bad_fen_field_rejected() {
        assert!(CastlingRights::from_fen_field("KQkqx").is_err());
    }
}
