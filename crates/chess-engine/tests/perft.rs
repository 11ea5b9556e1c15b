//! Perft: leaf-node counts of the legal move tree, compared against
//! well-known reference values.
//!
//! The positions and depths are chosen so that no pawn reaches the last
//! rank, which keeps the reference counts valid here.

use chess_core::{Layout, Orientation, Square};
use chess_engine::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";

/// Counts the leaf nodes at the given depth, applying and undoing every
/// legal move of the side to move.
fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let color = pos.side_to_move();
    let squares: Vec<Square> = Square::all()
        .filter(|&sq| pos.piece_at(sq).is_some_and(|p| p.color() == color))
        .collect();

    let mut nodes = 0u64;
    for from in squares {
        let targets = pos.legal_moves(from).unwrap();
        if depth == 1 {
            nodes += targets.len() as u64;
            continue;
        }
        for to in targets {
            pos.apply(from, to).unwrap();
            nodes += perft(pos, depth - 1);
            pos.undo().unwrap();
        }
    }
    nodes
}

fn position(placement: &str) -> Position {
    Position::from_layout(&Layout::parse(placement).unwrap(), Orientation::WhiteBottom)
}

#[test]
fn perft_startpos_depth_1() {
    let mut pos = Position::startpos(Orientation::WhiteBottom);
    assert_eq!(perft(&mut pos, 1), 20);
}

#[test]
fn perft_startpos_depth_2() {
    let mut pos = Position::startpos(Orientation::WhiteBottom);
    assert_eq!(perft(&mut pos, 2), 400);
}

#[test]
fn perft_startpos_depth_3() {
    for orientation in [Orientation::WhiteBottom, Orientation::BlackBottom] {
        let mut pos = Position::startpos(orientation);
        let before = pos.clone();
        assert_eq!(perft(&mut pos, 3), 8902, "{:?}", orientation);
        assert_eq!(pos, before);
    }
}

// Kiwipete: castling both ways, pins and en passant
#[test]
fn perft_kiwipete_depth_1() {
    assert_eq!(perft(&mut position(KIWIPETE), 1), 48);
}

#[test]
fn perft_kiwipete_depth_2() {
    assert_eq!(perft(&mut position(KIWIPETE), 2), 2039);
}

#[test]
fn perft_kiwipete_depth_3() {
    let mut pos = position(KIWIPETE);
    let before = pos.clone();
    assert_eq!(perft(&mut pos, 3), 97862);
    assert_eq!(pos, before);
}

// Position 3: check evasion and en passant along a pinned rank
#[test]
fn perft_position3_depth_1() {
    assert_eq!(perft(&mut position(POSITION_3), 1), 14);
}

#[test]
fn perft_position3_depth_2() {
    assert_eq!(perft(&mut position(POSITION_3), 2), 191);
}

#[test]
fn perft_position3_depth_3() {
    assert_eq!(perft(&mut position(POSITION_3), 3), 2812);
}

#[test]
fn perft_position3_depth_4() {
    assert_eq!(perft(&mut position(POSITION_3), 4), 43238);
}
