//! Legality filter: pseudo-legal moves that keep the mover's king safe.
//!
//! Each candidate is tried on the position itself and then taken back, so
//! these queries take `&mut self` even though the position is unchanged
//! when they return.

use crate::{EngineError, Piece, Position, SquareSet};
use chess_core::{Color, PieceKind, Square};
use tracing::trace;

/// Where a game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    InProgress,
    /// The side to move is in check but can get out of it.
    Check,
    /// The side to move is in check with no legal move.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Position {
    /// Legal destinations of the piece on `sq`, whichever color it is.
    pub fn legal_moves(&mut self, sq: Square) -> Result<SquareSet, EngineError> {
        let piece = *self.board.piece_at(sq).ok_or(EngineError::EmptySquare(sq))?;
        let candidates = piece.pseudo_legal_moves(&self.board, &self.history);

        let mut legal = SquareSet::EMPTY;
        for to in candidates {
            // Kings are never taken; a king that can be reached is in check.
            if self
                .board
                .piece_at(to)
                .is_some_and(|target| target.kind == PieceKind::King)
            {
                continue;
            }
            if is_castling(&piece, to) && !self.castling_path_safe(&piece, to) {
                trace!(from = sq.index(), to = to.index(), "castling path attacked");
                continue;
            }
            if self.leaves_king_safe(piece.color, sq, to)? {
                legal.insert(to);
            } else {
                trace!(from = sq.index(), to = to.index(), "move exposes king");
            }
        }
        Ok(legal)
    }

    /// Returns true if some piece of `color` has a legal move.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let squares: Vec<Square> = self
            .tracker
            .alive(color)
            .iter()
            .map(|&id| self.board.piece(id).square())
            .collect();
        squares
            .into_iter()
            .any(|sq| self.legal_moves(sq).is_ok_and(|moves| !moves.is_empty()))
    }

    /// In check with no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.king_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, but no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.king_in_check(color) && !self.has_legal_move(color)
    }

    /// Status of the side to move.
    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move();
        let in_check = self.king_in_check(color);
        match (in_check, self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Plays `from` -> `to`, checks the mover's king and takes the move
    /// back.
    fn leaves_king_safe(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<bool, EngineError> {
        self.apply(from, to)?;
        let safe = !self.king_in_check(color);
        self.undo()?;
        Ok(safe)
    }

    /// The king may not castle out of, through or into an attacked square.
    fn castling_path_safe(&self, king: &Piece, to: Square) -> bool {
        let threats = self.attacked_squares(king.color.opposite());
        let dir: i8 = if to.column() > king.square.column() { 1 } else { -1 };
        [Some(king.square), king.square.offset(0, dir), Some(to)]
            .into_iter()
            .flatten()
            .all(|sq| !threats.contains(sq))
    }
}

fn is_castling(piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::King
        && piece.first_move
        && piece.square.row() == to.row()
        && piece.square.column().abs_diff(to.column()) == 2
}
