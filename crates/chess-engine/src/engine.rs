//! Move engine: applying and reversing moves.
//!
//! [`Position::apply`] does not check legality; callers that take input
//! from players go through [`Game`](crate::Game), which checks the move
//! against the legal set first.

use crate::piece::castling_rook_square;
use crate::{EngineError, MoveEffect, MoveRecord, Position};
use chess_core::{PieceKind, Square};
use tracing::debug;

impl Position {
    /// Applies the move `from` -> `to` and records it.
    ///
    /// Works out what the move does besides moving the piece: a capture on
    /// `to`, an en passant capture beside `from`, or the rook half of a
    /// castling move.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<MoveRecord, EngineError> {
        let id = self.board.id_at(from).ok_or(EngineError::EmptySquare(from))?;
        let mover = *self.board.piece(id);
        let effect = self.resolve_effect(from, to);

        let record = MoveRecord {
            piece: id,
            from,
            to,
            was_first_move: mover.first_move,
            effect,
        };
        self.history.push(record);
        self.board.piece_mut(id).first_move = false;

        match effect {
            MoveEffect::Quiet => {}
            MoveEffect::Capture { piece, square } | MoveEffect::EnPassant { piece, square } => {
                let color = self.board.piece(piece).color;
                self.board.lift(square);
                self.tracker.remove(color, piece);
            }
            MoveEffect::Castle { rook, rook_to, .. } => {
                self.board.relocate(rook, rook_to);
                self.board.piece_mut(rook).first_move = false;
            }
        }
        self.board.relocate(id, to);

        debug!(
            piece = %mover.kind,
            color = %mover.color,
            from = from.index(),
            to = to.index(),
            effect = ?effect,
            "applied move"
        );
        Ok(record)
    }

    fn resolve_effect(&self, from: Square, to: Square) -> MoveEffect {
        let Some(mover) = self.board.piece_at(from) else {
            return MoveEffect::Quiet;
        };

        match mover.kind {
            PieceKind::Pawn if from.column() != to.column() && self.board.is_empty(to) => {
                let beside = Square::from_row_col(from.row(), to.column());
                if let Some((piece, square)) =
                    beside.and_then(|sq| self.board.id_at(sq).map(|id| (id, sq)))
                {
                    return MoveEffect::EnPassant { piece, square };
                }
            }
            PieceKind::King
                if mover.first_move
                    && from.row() == to.row()
                    && from.column().abs_diff(to.column()) == 2 =>
            {
                let dir: i8 = if to.column() > from.column() { 1 } else { -1 };
                let rook = castling_rook_square(from, dir).and_then(|sq| {
                    self.board
                        .piece_at(sq)
                        .filter(|p| p.kind == PieceKind::Rook && p.color == mover.color)
                });
                if let (Some(rook), Some(rook_to)) = (rook, to.offset(0, -dir)) {
                    return MoveEffect::Castle {
                        rook: rook.id,
                        rook_from: rook.square,
                        rook_to,
                        rook_was_first_move: rook.first_move,
                    };
                }
            }
            _ => {}
        }

        match self.board.id_at(to) {
            Some(piece) => MoveEffect::Capture { piece, square: to },
            None => MoveEffect::Quiet,
        }
    }

    /// Reverses the most recent move exactly.
    ///
    /// The mover returns to its origin with its old first-move flag; a
    /// captured piece reappears on the square it was taken from (beside
    /// the mover for en passant); a castling rook returns to its corner.
    pub fn undo(&mut self) -> Result<MoveRecord, EngineError> {
        let record = self.history.pop().ok_or(EngineError::EmptyHistory)?;

        self.board.relocate(record.piece, record.from);
        self.board.piece_mut(record.piece).first_move = record.was_first_move;

        match record.effect {
            MoveEffect::Quiet => {}
            MoveEffect::Capture { piece, square } | MoveEffect::EnPassant { piece, square } => {
                let color = self.board.piece(piece).color;
                self.board.place(piece, square);
                self.tracker.restore(color, piece);
            }
            MoveEffect::Castle {
                rook,
                rook_from,
                rook_was_first_move,
                ..
            } => {
                self.board.relocate(rook, rook_from);
                self.board.piece_mut(rook).first_move = rook_was_first_move;
            }
        }

        debug!(
            from = record.from.index(),
            to = record.to.index(),
            "undid move"
        );
        Ok(record)
    }
}
