//! Board layout parsing.
//!
//! A layout is the piece-placement field of FEN: eight ranks from rank 8
//! down to rank 1, separated by `/`, with digits for runs of empty squares.

use crate::{Color, File, PieceKind, Rank};
use thiserror::Error;

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },
}

/// One piece placed by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub file: File,
    pub rank: Rank,
    pub kind: PieceKind,
    pub color: Color,
    /// True when the piece stands where it would start a game, meaning it
    /// still has its first move (pawn double step, castling).
    pub unmoved: bool,
}

/// A parsed board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Returns the standard starting layout.
    pub fn standard() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }

    /// Parses a layout string.
    pub fn parse(placement: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut placements = Vec::with_capacity(32);
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank_number = 8 - i as u8;
            let rank = Rank::from_index(rank_number - 1).expect("rank index in 0-7");
            let mut squares = 0u32;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += digit;
                } else if let Some((kind, color)) = PieceKind::from_char(c) {
                    if let Some(file) = File::from_index(squares as u8) {
                        placements.push(Placement {
                            file,
                            rank,
                            kind,
                            color,
                            unmoved: is_home_square(kind, color, file, rank),
                        });
                    }
                    squares += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter {
                        ch: c,
                        rank: rank_number,
                    });
                }
            }

            if squares != 8 {
                return Err(LayoutError::InvalidRankLength {
                    rank: rank_number,
                    squares,
                });
            }
        }

        for color in Color::ALL {
            let count = placements
                .iter()
                .filter(|p| p.kind == PieceKind::King && p.color == color)
                .count();
            if count != 1 {
                return Err(LayoutError::KingCount { color, count });
            }
        }

        Ok(Layout { placements })
    }

    /// Returns every placed piece, rank 8 first.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Returns true if `kind` of `color` starts the game on this square.
fn is_home_square(kind: PieceKind, color: Color, file: File, rank: Rank) -> bool {
    let (back, pawns) = match color {
        Color::White => (Rank::R1, Rank::R2),
        Color::Black => (Rank::R8, Rank::R7),
    };
    match kind {
        PieceKind::Pawn => rank == pawns,
        PieceKind::King => rank == back && file == File::E,
        PieceKind::Rook => rank == back && (file == File::A || file == File::H),
        _ => false,
    }
}
