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

//! Applying and reverting moves on a [`Position`].
//!
//! `make` and `unmake` are meant to be used in strict pairs: every call to
//! `make` must be followed, after whatever work happens at the deeper ply,
//! by exactly one call to `unmake` with the same move and the [`Undo`] it
//! returned.

use super::{castling, Piece, PieceType, Position, Side, Square, Undo, CASTLE, DOUBLE, ENPASSANT, PROMO};
use crate::moves::Move;

/// Apply `mv` to `pos`, mutating it in place, and return the [`Undo`] record
/// needed to reverse it later.
pub fn make(pos: &mut Position, mv: &Move) -> Undo {
    let undo = Undo {
        castling: pos.castling,
        ep_square: pos.ep_square,
        halfmove_clock: pos.halfmove_clock,
        fullmove_number: pos.fullmove_number,
        captured: mv.captured,
    };

    let mover = pos.side;

    pos.remove_piece(mv.piece, mv.from);

    if mv.flags & ENPASSANT != 0 {
        let captured_sq = match mover {
            Side::White => Square::new(mv.to.rank() - 1, mv.to.file()).unwrap(),
            Side::Black => Square::new(mv.to.rank() + 1, mv.to.file()).unwrap(),
        };
        pos.remove_piece(mv.captured.expect("en passant move always captures"), captured_sq);
    } else if let Some(captured) = mv.captured {
        pos.remove_piece(captured, mv.to);
    }

    let placed = if mv.flags & PROMO != 0 {
        mv.promo.expect("promotion move always names the resulting piece")
    } else {
        mv.piece
    };
    pos.put_piece(placed, mv.to);

    if mv.flags & CASTLE != 0 {
        let home_rank = mv.from.rank();
        let (rook_from_file, rook_to_file) = if mv.to.file() == 6 { (7, 5) } else { (0, 3) };
        let rook = Piece::new(mover, PieceType::Rook);
        let rook_from = Square::new(home_rank, rook_from_file).unwrap();
        let rook_to = Square::new(home_rank, rook_to_file).unwrap();
        pos.remove_piece(rook, rook_from);
        pos.put_piece(rook, rook_to);
    }

    update_castling_rights(pos, mv, mover);

    pos.ep_square = if mv.flags & DOUBLE != 0 {
        Some(match mover {
            Side::White => Square::new(mv.to.rank() - 1, mv.to.file()).unwrap(),
            Side::Black => Square::new(mv.to.rank() + 1, mv.to.file()).unwrap(),
        })
    } else {
        None
    };

    pos.halfmove_clock = if mv.piece.piece_type() == PieceType::Pawn || mv.captured.is_some() {
        0
    } else {
        pos.halfmove_clock + 1
    };

    if mover == Side::Black {
        pos.fullmove_number += 1;
    }

    pos.side = !mover;

    undo
}

fn update_castling_rights(pos: &mut Position, mv: &Move, mover: Side) {
    if mv.piece.piece_type() == PieceType::King {
        pos.castling.clear_side(mover);
    }

    let clear_if_from_or_to = |pos: &mut Position, sq: Square, right: u8| {
        if mv.from == sq || mv.to == sq {
            pos.castling.clear(right);
        }
    };
    clear_if_from_or_to(pos, Square::A1, castling::WHITE_QUEENSIDE);
    clear_if_from_or_to(pos, Square::H1, castling::WHITE_KINGSIDE);
    clear_if_from_or_to(pos, Square::A8, castling::BLACK_QUEENSIDE);
    clear_if_from_or_to(pos, Square::H8, castling::BLACK_KINGSIDE);
}

/// Reverse `mv`, restoring `pos` to exactly the state it was in before
/// `make` was called, using the [`Undo`] that call returned.
pub fn unmake(pos: &mut Position, mv: &Move, undo: &Undo) {
    let mover = !pos.side;
    pos.side = mover;

    if mv.flags & CASTLE != 0 {
        let home_rank = mv.from.rank();
        let (rook_from_file, rook_to_file) = if mv.to.file() == 6 { (7, 5) } else { (0, 3) };
        let rook = Piece::new(mover, PieceType::Rook);
        let rook_from = Square::new(home_rank, rook_from_file).unwrap();
        let rook_to = Square::new(home_rank, rook_to_file).unwrap();
        pos.remove_piece(rook, rook_to);
        pos.put_piece(rook, rook_from);
    }

    let placed = if mv.flags & PROMO != 0 {
        mv.promo.expect("promotion move always names the resulting piece")
    } else {
        mv.piece
    };
    pos.remove_piece(placed, mv.to);
    pos.put_piece(mv.piece, mv.from);

    if mv.flags & ENPASSANT != 0 {
        let captured_sq = match mover {
            Side::White => Square::new(mv.to.rank() - 1, mv.to.file()).unwrap(),
            Side::Black => Square::new(mv.to.rank() + 1, mv.to.file()).unwrap(),
        };
        pos.put_piece(undo.captured.expect("en passant move always captures"), captured_sq);
    } else if let Some(captured) = undo.captured {
        pos.put_piece(captured, mv.to);
    }

    pos.castling = undo.castling;
    pos.ep_square = undo.ep_square;
    pos.halfmove_clock = undo.halfmove_clock;
    pos.fullmove_number = undo.fullmove_number;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::{parse_fen, to_fen};
    use crate::movegen::generate_pseudo_legal;

    #[test]
    fn make_unmake_restores_start_position() {
        let mut pos = Position::start_position();
        let before = to_fen(&pos);
        let moves = generate_pseudo_legal(&pos);
        for mv in &moves {
            let undo = make(&mut pos, mv);
            unmake(&mut pos, mv, &undo);
            assert_eq!(to_fen(&pos), before);
        }
    }

    #[test]
    fn castling_moves_the_rook_too() {
        let mut pos = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = generate_pseudo_legal(&pos);
        let castle = moves.iter().find(|m| m.is_castle() && m.to == Square::G1).unwrap().clone();
        make(&mut pos, &castle);
        assert_eq!(pos.piece_at(Square::F1), Some(Piece::WR));
        assert_eq!(pos.piece_at(Square::H1), None);
        assert_eq!(pos.piece_at(Square::G1), Some(Piece::WK));
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let mut pos = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        let moves = generate_pseudo_legal(&pos);
        let ep = moves.iter().find(|m| m.is_en_passant()).unwrap().clone();
        make(&mut pos, &ep);
        assert_eq!(pos.piece_at(Square::D5), None);
        assert_eq!(pos.piece_at(Square::D6), Some(Piece::WP));
    }

    #[test]
    fn king_move_clears_both_castling_rights() {
        let mut pos = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = generate_pseudo_legal(&pos);
        let king_step = moves
            .iter()
            .find(|m| m.piece == Piece::WK && !m.is_castle())
            .unwrap()
            .clone();
        make(&mut pos, &king_step);
        assert!(!pos.castling.kingside(Side::White));
        assert!(!pos.castling.queenside(Side::White));
    }

    #[test]
    fn undo_snapshot_carries_captured_piece_for_unmake() {
        let mut pos = parse_fen("4k3/8/8/8/3q4/8/8/3RK3 w - - 0 1").unwrap();
        let moves = generate_pseudo_legal(&pos);
        let capture = moves
            .iter()
            .find(|m| m.from == Square::D1 && m.to == Square::D4)
            .unwrap()
            .clone();
        let undo = make(&mut pos, &capture);
        assert_eq!(undo.captured, Some(Piece::BQ));
        unmake(&mut pos, &capture, &undo);
        assert_eq!(pos.piece_at(Square::D4), Some(Piece::BQ));
        assert_eq!(pos.piece_at(Square::D1), Some(Piece::WR));
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_move_and_capture() {
        let mut pos = Position::start_position();
        let moves = generate_pseudo_legal(&pos);
        let pawn_move = moves.iter().find(|m| m.piece == Piece::WP).unwrap().clone();
        make(&mut pos, &pawn_move);
        assert_eq!(pos.halfmove_clock, 0);
    }
}
