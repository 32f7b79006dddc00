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

//! Node-count oracles for move generation, legality filtering, and
//! make/unmake, run against well-known perft positions.

use rookery_base::fen::parse_fen;
use rookery_base::perft::perft;
use rookery_base::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn start_position_perft_one_through_three() {
    let pos = Position::start_position();
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(perft(&pos, 3), 8_902);
}

#[test]
fn start_position_perft_four() {
    let pos = Position::start_position();
    assert_eq!(perft(&pos, 4), 197_281);
}

#[test]
#[ignore = "several seconds in debug builds; run with --ignored for full coverage"]
fn start_position_perft_five() {
    let pos = Position::start_position();
    assert_eq!(perft(&pos, 5), 4_865_609);
}

#[test]
fn kiwipete_perft_four() {
    let pos = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&pos, 4), 4_085_603);
}

#[test]
#[ignore = "several seconds in debug builds; run with --ignored for full coverage"]
fn position_3_perft_five() {
    let pos = parse_fen(POSITION_3).unwrap();
    assert_eq!(perft(&pos, 5), 674_624);
}
