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

//! The core of the Rookery chess engine: bitboard position representation,
//! move generation, make/unmake, and perft. No I/O, no global mutable
//! state; every operation is a pure function of its explicit arguments.

pub mod algebraic;
pub mod attacks;
pub mod castling;
pub mod fen;
pub mod legal;
pub mod makemove;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod position;
pub mod square;

pub use algebraic::{from_uci, to_uci, MoveStringError};
pub use bitboard::{rank_mask, Bitboard, FILE_A, FILE_H};
pub use castling::CastlingRights;
pub use fen::{parse_fen, to_fen, write_fen_to_buf, FenError};
pub use legal::{generate_legal, is_checkmate, is_stalemate};
pub use movegen::generate_pseudo_legal;
pub use moves::{
    new_move_list, Move, MoveList, Undo, CAPTURE, CASTLE, DOUBLE, ENPASSANT, MOVE_LIST_CAPACITY,
    PROMO, QUIET,
};
pub use piece::{Piece, PieceType, Side};
pub use position::Position;
pub use square::Square;

mod bitboard;
