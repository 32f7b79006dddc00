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

//! Pseudo-legal move generation.
//!
//! Moves are emitted in a fixed order — pawn pushes, then double pushes,
//! then promotions, then captures (plain, then promoting), then en passant,
//! then knight/bishop/rook/queen/king steps, then castles — so that two
//! generator calls on the same position always produce the same sequence.
//! "Pseudo-legal" means every rule is enforced except one: a move that
//! leaves the mover's own king in check is still emitted here and must be
//! filtered out by [`crate::legal`].

use super::{
    attacks, new_move_list, rank_mask, Bitboard, Move, MoveList, Piece, PieceType, Position, Side,
    Square, CAPTURE, CASTLE, DOUBLE, ENPASSANT, PROMO, QUIET,
};

const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Generate every pseudo-legal move available to the side to move in `pos`.
#[must_use]
pub fn generate_pseudo_legal(pos: &Position) -> MoveList {
    let mut moves = new_move_list();
    generate_pawn_moves(pos, &mut moves);
    generate_piece_moves(pos, PieceType::Knight, &mut moves);
    generate_piece_moves(pos, PieceType::Bishop, &mut moves);
    generate_piece_moves(pos, PieceType::Rook, &mut moves);
    generate_piece_moves(pos, PieceType::Queen, &mut moves);
    generate_king_moves(pos, &mut moves);
    generate_castling(pos, &mut moves);
    moves
}

fn generate_pawn_moves(pos: &Position, moves: &mut MoveList) {
    let side = pos.side;
    let pawn = Piece::new(side, PieceType::Pawn);
    let own_pawns = pos.bitboard(pawn);
    let empty = !pos.occ_all;
    let enemy = pos.occupancy(!side);

    let (push, promo_rank, double_start_rank) = match side {
        Side::White => (Bitboard::shift_north, rank_mask(8), rank_mask(2)),
        Side::Black => (Bitboard::shift_south, rank_mask(1), rank_mask(7)),
    };

    // Single pushes, non-promoting.
    let mut sources = own_pawns;
    while let Some(from) = sources.pop_lsb() {
        let one_step = push(Bitboard::from(from)) & empty;
        if one_step.is_empty() {
            continue;
        }
        let to = one_step.lsb();
        if (Bitboard::from(to) & promo_rank).is_empty() {
            moves.push(Move {
                from,
                to,
                piece: pawn,
                promo: None,
                captured: None,
                flags: QUIET,
            });
        }
    }

    // Double pushes: from the pawn's start rank, through an empty square,
    // onto an empty square.
    let mut double_sources = own_pawns & double_start_rank;
    while let Some(from) = double_sources.pop_lsb() {
        let mid = push(Bitboard::from(from));
        if (mid & pos.occ_all).is_empty() {
            let dest = push(mid);
            if !(dest & pos.occ_all).is_empty() {
                continue;
            }
            moves.push(Move {
                from,
                to: dest.lsb(),
                piece: pawn,
                promo: None,
                captured: None,
                flags: QUIET | DOUBLE,
            });
        }
    }

    // Push promotions.
    let mut promo_sources = own_pawns;
    while let Some(from) = promo_sources.pop_lsb() {
        let one_step = push(Bitboard::from(from)) & empty & promo_rank;
        if one_step.is_empty() {
            continue;
        }
        let to = one_step.lsb();
        for &pt in &PROMOTION_TYPES {
            moves.push(Move {
                from,
                to,
                piece: pawn,
                promo: Some(Piece::new(side, pt)),
                captured: None,
                flags: PROMO,
            });
        }
    }

    // Captures (left then right from the mover's perspective), non-promoting
    // and promoting.
    let (capture_west, capture_east): (fn(Bitboard) -> Bitboard, fn(Bitboard) -> Bitboard) =
        match side {
            Side::White => (Bitboard::shift_northwest, Bitboard::shift_northeast),
            Side::Black => (Bitboard::shift_southwest, Bitboard::shift_southeast),
        };

    // Plain captures, left then right, as one contiguous block.
    for capture_step in [capture_west, capture_east] {
        let mut sources = own_pawns;
        while let Some(from) = sources.pop_lsb() {
            let target = capture_step(Bitboard::from(from)) & enemy & !promo_rank;
            if target.is_empty() {
                continue;
            }
            let to = target.lsb();
            moves.push(Move {
                from,
                to,
                piece: pawn,
                promo: None,
                captured: pos.piece_at(to),
                flags: CAPTURE,
            });
        }
    }

    // Capture-promotions, Q/R/B/N each for left then right, as a second,
    // separate block.
    for capture_step in [capture_west, capture_east] {
        let mut sources = own_pawns;
        while let Some(from) = sources.pop_lsb() {
            let target = capture_step(Bitboard::from(from)) & enemy & promo_rank;
            if target.is_empty() {
                continue;
            }
            let to = target.lsb();
            let captured = pos.piece_at(to);
            for &pt in &PROMOTION_TYPES {
                moves.push(Move {
                    from,
                    to,
                    piece: pawn,
                    promo: Some(Piece::new(side, pt)),
                    captured,
                    flags: CAPTURE | PROMO,
                });
            }
        }
    }

    // En passant.
    if let Some(ep) = pos.ep_square {
        for capture_step in [capture_west, capture_east] {
            let mut sources = own_pawns;
            while let Some(from) = sources.pop_lsb() {
                let target = capture_step(Bitboard::from(from));
                if target.contains(ep) {
                    let captured_sq = match side {
                        Side::White => ep_captured_square_white(ep),
                        Side::Black => ep_captured_square_black(ep),
                    };
                    let captured = pos.piece_at(captured_sq);
                    moves.push(Move {
                        from,
                        to: ep,
                        piece: pawn,
                        promo: None,
                        captured,
                        flags: CAPTURE | ENPASSANT,
                    });
                }
            }
        }
    }
}

/// The square of the pawn actually captured by an en passant move landing on
/// `ep` (White capturing): one rank south of the target square.
fn ep_captured_square_white(ep: Square) -> Square {
    Square::new(ep.rank() - 1, ep.file()).expect("en passant target has a valid capture square")
}

/// As [`ep_captured_square_white`], but for a Black pawn capturing (one rank
/// north of the target square).
fn ep_captured_square_black(ep: Square) -> Square {
    Square::new(ep.rank() + 1, ep.file()).expect("en passant target has a valid capture square")
}

fn generate_piece_moves(pos: &Position, piece_type: PieceType, moves: &mut MoveList) {
    let side = pos.side;
    let piece = Piece::new(side, piece_type);
    let own = pos.occupancy(side);
    let enemy = pos.occupancy(!side);
    let occ = pos.occ_all;

    let mut sources = pos.bitboard(piece);
    while let Some(from) = sources.pop_lsb() {
        let attack = match piece_type {
            PieceType::Knight => attacks::knight_attacks(from),
            PieceType::Bishop => attacks::bishop_attacks(from, occ),
            PieceType::Rook => attacks::rook_attacks(from, occ),
            PieceType::Queen => attacks::queen_attacks(from, occ),
            _ => unreachable!("generate_piece_moves only called for sliding/knight types"),
        };
        let mut targets = attack & !own;
        while let Some(to) = targets.pop_lsb() {
            let captured = pos.piece_at(to);
            let flags = if (Bitboard::from(to) & enemy).is_empty() {
                QUIET
            } else {
                CAPTURE
            };
            moves.push(Move {
                from,
                to,
                piece,
                promo: None,
                captured,
                flags,
            });
        }
    }
}

fn generate_king_moves(pos: &Position, moves: &mut MoveList) {
    let side = pos.side;
    let king = Piece::new(side, PieceType::King);
    let from = pos.king_square(side);
    let own = pos.occupancy(side);
    let enemy = pos.occupancy(!side);

    let mut targets = attacks::king_attacks(from) & !own;
    while let Some(to) = targets.pop_lsb() {
        let captured = pos.piece_at(to);
        let flags = if (Bitboard::from(to) & enemy).is_empty() {
            QUIET
        } else {
            CAPTURE
        };
        moves.push(Move {
            from,
            to,
            piece: king,
            promo: None,
            captured,
            flags,
        });
    }
}

fn generate_castling(pos: &Position, moves: &mut MoveList) {
    let side = pos.side;
    let king = Piece::new(side, PieceType::King);
    let (home_rank, king_from) = match side {
        Side::White => (0usize, Square::E1),
        Side::Black => (7usize, Square::E8),
    };
    if pos.king_square(side) != king_from {
        return;
    }
    if pos.in_check(side) {
        return;
    }

    if pos.castling.kingside(side) {
        let f = Square::new(home_rank, 5).unwrap();
        let g = Square::new(home_rank, 6).unwrap();
        let h = Square::new(home_rank, 7).unwrap();
        if pos.piece_at(f).is_none()
            && pos.piece_at(g).is_none()
            && pos.piece_at(h) == Some(Piece::new(side, PieceType::Rook))
            && !attacks::attacked_by(pos, f, !side)
            && !attacks::attacked_by(pos, g, !side)
        {
            moves.push(Move {
                from: king_from,
                to: g,
                piece: king,
                promo: None,
                captured: None,
                flags: CASTLE,
            });
        }
    }

    if pos.castling.queenside(side) {
        let d = Square::new(home_rank, 3).unwrap();
        let c = Square::new(home_rank, 2).unwrap();
        let b = Square::new(home_rank, 1).unwrap();
        let a = Square::new(home_rank, 0).unwrap();
        if pos.piece_at(d).is_none()
            && pos.piece_at(c).is_none()
            && pos.piece_at(b).is_none()
            && pos.piece_at(a) == Some(Piece::new(side, PieceType::Rook))
            && !attacks::attacked_by(pos, d, !side)
            && !attacks::attacked_by(pos, c, !side)
        {
            moves.push(Move {
                from: king_from,
                to: c,
                piece: king,
                promo: None,
                captured: None,
                flags: CASTLE,
            });
        }
    }
}
