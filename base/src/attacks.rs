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

//! Attack generation: which squares a piece threatens, given the occupancy
//! of the board.
//!
//! Sliding attacks are computed by walking each ray one square at a time and
//! stopping at the first blocker, rather than by magic-bitboard lookup. That
//! trades some speed for a generator simple enough to read straight off the
//! rules of chess.

use super::{Bitboard, Position, Side, Square};

use once_cell::sync::Lazy;

#[must_use]
fn knight_steps_from(sq: Square) -> Bitboard {
    let (rank, file) = (sq.rank() as i32, sq.file() as i32);
    const DELTAS: [(i32, i32); 8] = [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ];
    let mut bb = Bitboard::EMPTY;
    for (dr, df) in DELTAS {
        let (r, f) = (rank + dr, file + df);
        if (0..8).contains(&r) && (0..8).contains(&f) {
            bb.insert(Square::new(r as usize, f as usize).unwrap());
        }
    }
    bb
}

#[must_use]
fn king_steps_from(sq: Square) -> Bitboard {
    let (rank, file) = (sq.rank() as i32, sq.file() as i32);
    let mut bb = Bitboard::EMPTY;
    for dr in -1..=1 {
        for df in -1..=1 {
            if dr == 0 && df == 0 {
                continue;
            }
            let (r, f) = (rank + dr, file + df);
            if (0..8).contains(&r) && (0..8).contains(&f) {
                bb.insert(Square::new(r as usize, f as usize).unwrap());
            }
        }
    }
    bb
}

static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::ALL {
        table[sq as usize] = knight_steps_from(sq);
    }
    table
});

static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::ALL {
        table[sq as usize] = king_steps_from(sq);
    }
    table
});

#[inline]
#[must_use]
/// The squares a knight on `sq` attacks.
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline]
#[must_use]
/// The squares a king on `sq` attacks (not including castling).
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

#[must_use]
/// The squares a pawn of `side` standing on `sq` attacks (diagonal captures
/// only, not its push square).
pub fn pawn_attacks(side: Side, sq: Square) -> Bitboard {
    let bb = Bitboard::from(sq);
    match side {
        Side::White => bb.shift_northeast() | bb.shift_northwest(),
        Side::Black => bb.shift_southeast() | bb.shift_southwest(),
    }
}

/// One step along each of the four orthogonal directions.
const ROOK_STEPS: [fn(Bitboard) -> Bitboard; 4] = [
    Bitboard::shift_north,
    Bitboard::shift_south,
    Bitboard::shift_east,
    Bitboard::shift_west,
];

/// One step along each of the four diagonal directions.
const BISHOP_STEPS: [fn(Bitboard) -> Bitboard; 4] = [
    Bitboard::shift_northeast,
    Bitboard::shift_northwest,
    Bitboard::shift_southeast,
    Bitboard::shift_southwest,
];

#[must_use]
fn ray_attacks(sq: Square, occupied: Bitboard, steps: &[fn(Bitboard) -> Bitboard; 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for step in steps {
        let mut sliding = Bitboard::from(sq);
        loop {
            sliding = step(sliding);
            if sliding.is_empty() {
                break;
            }
            attacks |= sliding;
            if !(sliding & occupied).is_empty() {
                break;
            }
        }
    }
    attacks
}

#[must_use]
/// The squares a rook on `sq` attacks given the board's full occupancy,
/// including the square of the first blocker met in each direction.
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_STEPS)
}

#[must_use]
/// The squares a bishop on `sq` attacks given the board's full occupancy.
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_STEPS)
}

#[must_use]
/// The squares a queen on `sq` attacks given the board's full occupancy.
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[must_use]
/// Is `sq` attacked by any piece belonging to `by`, given `pos`'s current
/// occupancy?
pub fn attacked_by(pos: &Position, sq: Square, by: Side) -> bool {
    use super::{Piece, PieceType};

    let occ = pos.occ_all;

    if !(pawn_attacks(!by, sq) & pos.bitboard(Piece::new(by, PieceType::Pawn))).is_empty() {
        return true;
    }
    if !(knight_attacks(sq) & pos.bitboard(Piece::new(by, PieceType::Knight))).is_empty() {
        return true;
    }
    if !(king_attacks(sq) & pos.bitboard(Piece::new(by, PieceType::King))).is_empty() {
        return true;
    }
    let diagonal_attackers =
        pos.bitboard(Piece::new(by, PieceType::Bishop)) | pos.bitboard(Piece::new(by, PieceType::Queen));
    if !(bishop_attacks(sq, occ) & diagonal_attackers).is_empty() {
        return true;
    }
    let orthogonal_attackers =
        pos.bitboard(Piece::new(by, PieceType::Rook)) | pos.bitboard(Piece::new(by, PieceType::Queen));
    if !(rook_attacks(sq, occ) & orthogonal_attackers).is_empty() {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_from_center_has_eight_targets() {
        assert_eq!(knight_attacks(Square::E4).popcount(), 8);
    }

    #[test]
    fn knight_from_corner_has_two_targets() {
        assert_eq!(knight_attacks(Square::A1).popcount(), 2);
    }

    #[test]
    fn king_from_center_has_eight_targets() {
        assert_eq!(king_attacks(Square::E4).popcount(), 8);
    }

    #[test]
    fn king_from_corner_has_three_targets() {
        assert_eq!(king_attacks(Square::A1).popcount(), 3);
    }

    #[test]
    fn white_pawn_attacks_diagonally_forward() {
        let attacks = pawn_attacks(Side::White, Square::E4);
        assert!(attacks.contains(Square::D5));
        assert!(attacks.contains(Square::F5));
        assert_eq!(attacks.popcount(), 2);
    }

    #[test]
    fn black_pawn_attacks_diagonally_backward() {
        let attacks = pawn_attacks(Side::Black, Square::E4);
        assert!(attacks.contains(Square::D3));
        assert!(attacks.contains(Square::F3));
    }

    #[test]
    fn rook_attacks_stop_at_blocker() {
        let occ = Bitboard::from(Square::E6);
        let attacks = rook_attacks(Square::E4, occ);
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::E6));
        assert!(!attacks.contains(Square::E7));
        assert!(attacks.contains(Square::A4));
        assert!(attacks.contains(Square::H4));
    }

    #[test]
    fn bishop_attacks_stop_at_blocker() {
        let occ = Bitboard::from(Square::G6);
        let attacks = bishop_attacks(Square::E4, occ);
        assert!(attacks.contains(Square::F5));
        assert!(attacks.contains(Square::G6));
        assert!(!attacks.contains(Square::H7));
    }

    #[test]
    fn empty_board_rook_attacks_span_whole_rank_and_file() {
        let attacks = rook_attacks(Square::A1, Bitboard::EMPTY);
        assert_eq!(attacks.popcount(), 14);
    }
}
