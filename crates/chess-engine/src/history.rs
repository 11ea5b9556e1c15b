//! Move history.
//!
//! Every applied move leaves a [`MoveRecord`] holding just enough to put
//! the board back exactly as it was. The history is a stack: records are
//! pushed, peeked and popped, never addressed by position.

use crate::{PieceId, SquareSet};
use chess_core::{Color, Square};

/// What else happened on the board when a piece moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// Nothing besides the mover changed square.
    Quiet,
    /// The piece on the destination square was taken.
    Capture { piece: PieceId, square: Square },
    /// A pawn was taken en passant from the square beside the mover.
    EnPassant { piece: PieceId, square: Square },
    /// The king castled and the rook jumped over it.
    Castle {
        rook: PieceId,
        rook_from: Square,
        rook_to: Square,
        rook_was_first_move: bool,
    },
}

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    /// The mover's first-move flag before the move.
    pub was_first_move: bool,
    pub effect: MoveEffect,
}

impl MoveRecord {
    /// Returns the captured piece and the square it was taken on.
    pub fn captured(&self) -> Option<(PieceId, Square)> {
        match self.effect {
            MoveEffect::Capture { piece, square } | MoveEffect::EnPassant { piece, square } => {
                Some((piece, square))
            }
            MoveEffect::Quiet | MoveEffect::Castle { .. } => None,
        }
    }

    /// Returns every square whose contents this move changed.
    pub fn touched(&self) -> SquareSet {
        let mut touched = SquareSet::from_square(self.from) | SquareSet::from_square(self.to);
        match self.effect {
            MoveEffect::Quiet => {}
            MoveEffect::Capture { square, .. } | MoveEffect::EnPassant { square, .. } => {
                touched.insert(square);
            }
            MoveEffect::Castle {
                rook_from, rook_to, ..
            } => {
                touched.insert(rook_from);
                touched.insert(rook_to);
            }
        }
        touched
    }
}

/// Stack of applied moves, most recent on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Returns the most recent record.
    pub fn peek(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The color to move: White after an even number of moves.
    pub fn side_to_move(&self) -> Color {
        if self.records.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}
