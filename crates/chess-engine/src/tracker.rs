//! Position tracking: kings, alive pieces, and check detection.

use crate::{Board, MoveHistory, PieceId, SquareSet};
use chess_core::{Color, PieceKind};
use std::collections::BTreeSet;

/// Bookkeeping over the board: where each king is and which pieces of
/// each color are still alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTracker {
    kings: [PieceId; 2],
    alive: [BTreeSet<PieceId>; 2],
}

impl PositionTracker {
    /// Builds the tracker from the pieces on the board.
    ///
    /// Returns `None` unless each color has exactly one king.
    pub fn from_board(board: &Board) -> Option<Self> {
        let mut alive: [BTreeSet<PieceId>; 2] = Default::default();
        let mut kings: [Option<PieceId>; 2] = [None, None];

        for piece in board.pieces() {
            let color = piece.color().index();
            alive[color].insert(piece.id());
            if piece.kind() == PieceKind::King {
                if kings[color].is_some() {
                    return None;
                }
                kings[color] = Some(piece.id());
            }
        }

        Some(PositionTracker {
            kings: [kings[0]?, kings[1]?],
            alive,
        })
    }

    /// Returns the king of the given color.
    #[inline]
    pub fn king(&self, color: Color) -> PieceId {
        self.kings[color.index()]
    }

    /// Returns the pieces of the given color still on the board.
    #[inline]
    pub fn alive(&self, color: Color) -> &BTreeSet<PieceId> {
        &self.alive[color.index()]
    }

    pub(crate) fn remove(&mut self, color: Color, id: PieceId) {
        debug_assert_ne!(self.king(color), id, "kings are never captured");
        self.alive[color.index()].remove(&id);
    }

    pub(crate) fn restore(&mut self, color: Color, id: PieceId) {
        self.alive[color.index()].insert(id);
    }

    /// Returns true if any enemy piece could move onto the king of `color`.
    pub fn king_in_check(&self, color: Color, board: &Board, history: &MoveHistory) -> bool {
        let king_square = board.piece(self.king(color)).square();
        self.alive(color.opposite())
            .iter()
            .any(|&id| board.piece(id).pseudo_legal_moves(board, history).contains(king_square))
    }

    /// Union of the pseudo-legal moves of every alive enemy of `color`.
    pub fn all_enemy_moves(&self, color: Color, board: &Board, history: &MoveHistory) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &id in self.alive(color.opposite()) {
            moves |= board.piece(id).pseudo_legal_moves(board, history);
        }
        moves
    }

    /// Union of the squares threatened by every alive piece of `by`.
    pub fn attacked_squares(&self, by: Color, board: &Board) -> SquareSet {
        let mut attacked = SquareSet::EMPTY;
        for &id in self.alive(by) {
            attacked |= board.piece(id).attacks(board);
        }
        attacked
    }

    /// Total value of the alive pieces of `color`, king excluded.
    pub fn material(&self, color: Color, board: &Board) -> u32 {
        self.alive(color)
            .iter()
            .map(|&id| board.piece(id))
            .filter(|piece| piece.kind() != PieceKind::King)
            .map(|piece| piece.value())
            .sum()
    }
}
