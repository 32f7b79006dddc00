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

//! Forsyth-Edwards Notation: the text format used to describe a position in
//! full.

use super::{CastlingRights, Piece, Position, Side, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Why a FEN string failed to parse. On any variant, the [`Position`] being
/// built is discarded wholesale: `parse_fen` never hands back a partially
/// constructed position.
pub enum FenError {
    /// The record does not have at least the four mandatory
    /// whitespace-separated fields (placement, side to move, castling
    /// availability, en passant target). The halfmove clock and fullmove
    /// number fields are optional and default to `0` and `1`.
    WrongFieldCount,
    /// The piece-placement field does not describe exactly 8 ranks of
    /// exactly 8 squares each.
    BadPlacement,
    /// The side-to-move field is neither `w` nor `b`.
    BadSideToMove,
    /// The castling-availability field contains a character other than
    /// `K`, `Q`, `k`, `q`, or the lone sentinel `-`.
    BadCastling,
    /// The en passant field is neither `-` nor a valid algebraic square.
    BadEnPassant,
    /// The halfmove clock field is not a non-negative integer.
    BadHalfmoveClock,
    /// The fullmove number field is not a positive integer.
    BadFullmoveNumber,
}

impl Display for FenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FenError::WrongFieldCount => "FEN record must have at least 4 fields",
            FenError::BadPlacement => "malformed piece placement field",
            FenError::BadSideToMove => "side to move must be 'w' or 'b'",
            FenError::BadCastling => "malformed castling availability field",
            FenError::BadEnPassant => "malformed en passant target field",
            FenError::BadHalfmoveClock => "halfmove clock must be a non-negative integer",
            FenError::BadFullmoveNumber => "fullmove number must be a positive integer",
        };
        write!(f, "{msg}")
    }
}

/// Parse a full FEN record into a [`Position`].
///
/// The halfmove clock and fullmove number fields may be omitted from the
/// end of the record, in which case they default to `0` and `1`
/// respectively.
///
/// # Errors
///
/// Returns the specific [`FenError`] describing the first field found to be
/// malformed. No partially-built position is ever returned on failure.
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(FenError::WrongFieldCount);
    }

    let mut pos = Position::empty();
    parse_placement(&mut pos, fields[0])?;

    pos.side = match fields[1] {
        "w" => Side::White,
        "b" => Side::Black,
        _ => return Err(FenError::BadSideToMove),
    };

    pos.castling = CastlingRights::from_fen_field(fields[2]).map_err(|_| FenError::BadCastling)?;

    pos.ep_square = match fields[3] {
        "-" => None,
        s => Some(Square::from_algebraic(s).map_err(|_| FenError::BadEnPassant)?),
    };

    pos.halfmove_clock = fields
        .get(4)
        .copied()
        .unwrap_or("0")
        .parse()
        .map_err(|_| FenError::BadHalfmoveClock)?;

    let fullmove: u16 = fields
        .get(5)
        .copied()
        .unwrap_or("1")
        .parse()
        .map_err(|_| FenError::BadFullmoveNumber)?;
    if fullmove == 0 {
        return Err(FenError::BadFullmoveNumber);
    }
    pos.fullmove_number = fullmove;

    Ok(pos)
}

fn parse_placement(pos: &mut Position, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadPlacement);
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if file >= 8 {
                return Err(FenError::BadPlacement);
            }
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(FenError::BadPlacement);
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_letter(c).map_err(|_| FenError::BadPlacement)?;
                let sq = Square::new(rank, file).ok_or(FenError::BadPlacement)?;
                pos.put_piece(piece, sq);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadPlacement);
        }
    }
    Ok(())
}

#[must_use]
/// Render `pos` as a full FEN record.
pub fn to_fen(pos: &Position) -> String {
    let mut s = String::with_capacity(90);
    write_placement(pos, &mut s);
    s.push(' ');
    s.push(if pos.side == Side::White { 'w' } else { 'b' });
    s.push(' ');
    s.push_str(&pos.castling.to_fen_field());
    s.push(' ');
    match pos.ep_square {
        Some(sq) => s.push_str(&sq.to_string()),
        None => s.push('-'),
    }
    s.push(' ');
    s.push_str(&pos.halfmove_clock.to_string());
    s.push(' ');
    s.push_str(&pos.fullmove_number.to_string());
    s
}

fn write_placement(pos: &Position, out: &mut String) {
    for rank_from_top in 0..8 {
        let rank = 7 - rank_from_top;
        let mut empty_run = 0u32;
        for file in 0..8 {
            let sq = Square::new(rank, file).unwrap();
            match pos.piece_at(sq) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece.fen_letter());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if rank_from_top != 7 {
            out.push('/');
        }
    }
}

#[must_use]
/// Render `pos` as a FEN record into `buf`, returning `true` and writing the
/// record's length in bytes to `*written` on success.
///
/// If `buf` is too small to hold the record, `buf` is left untouched past
/// whatever partial content it had before the call, and this returns
/// `false`: callers never observe a truncated FEN string.
pub fn write_fen_to_buf(pos: &Position, buf: &mut [u8], written: &mut usize) -> bool {
    let rendered = to_fen(pos);
    if rendered.len() > buf.len() {
        return false;
    }
    buf[..rendered.len()].copy_from_slice(rendered.as_bytes());
    *written = rendered.len();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn start_position_round_trips() {
        let pos = parse_fen(START_FEN).unwrap();
        assert_eq!(to_fen(&pos), START_FEN);
    }

    #[test]
    fn kiwipete_round_trips() {
        let pos = parse_fen(KIWIPETE_FEN).unwrap();
        assert_eq!(to_fen(&pos), KIWIPETE_FEN);
    }

    #[test]
    fn ep_square_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let pos = parse_fen(fen).unwrap();
        assert_eq!(pos.ep_square, Some(Square::D6));
        assert_eq!(to_fen(&pos), fen);
    }

    #[test]
    fn too_few_fields_rejected() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq"),
            Err(FenError::WrongFieldCount)
        );
    }

    #[test]
    fn missing_clocks_default_to_zero_and_one() {
        let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
        assert_eq!(pos.halfmove_clock, 0);
        assert_eq!(pos.fullmove_number, 1);
        assert_eq!(to_fen(&pos), START_FEN);
    }

    #[test]
    fn missing_fullmove_defaults_to_one() {
        let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 5").unwrap();
        assert_eq!(pos.halfmove_clock, 5);
        assert_eq!(pos.fullmove_number, 1);
    }

    #[test]
    fn bad_rank_count_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1";
        assert_eq!(parse_fen(fen), Err(FenError::BadPlacement));
    }

    #[test]
    fn bad_rank_length_rejected() {
        let fen = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(parse_fen(fen), Err(FenError::BadPlacement));
    }

    #[test]
    fn bad_side_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1";
        assert_eq!(parse_fen(fen), Err(FenError::BadSideToMove));
    }

    #[test]
    fn bad_castling_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XYZ - 0 1";
        assert_eq!(parse_fen(fen), Err(FenError::BadCastling));
    }

    #[test]
    fn bad_en_passant_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1";
        assert_eq!(parse_fen(fen), Err(FenError::BadEnPassant));
    }

    #[test]
    fn small_buffer_write_fails_without_truncating() {
        let pos = parse_fen(START_FEN).unwrap();
        let mut buf = [0u8; 4];
        let mut written = 0;
        assert!(!write_fen_to_buf(&pos, &mut buf, &mut written));
        assert_eq!(written, 0);
    }

    #[test]
    fn adequate_buffer_write_succeeds() {
        let pos = parse_fen(START_FEN).unwrap();
        let mut buf = [0u8; 128];
        let mut written = 0;
        assert!(write_fen_to_buf(&pos, &mut buf, &mut written));
        assert_eq!(&buf[..written], START_FEN.as_bytes());
    }
}
