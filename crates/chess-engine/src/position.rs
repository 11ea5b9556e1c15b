//! Chess position: board, move history and tracker as one unit.

use crate::{Board, MoveHistory, MoveRecord, Piece, PositionTracker, SquareSet};
use chess_core::{Color, Layout, Orientation, Square};
use thiserror::Error;

/// Errors raised by the move engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No piece stands on the given square.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// There is no move to undo.
    #[error("no move to undo")]
    EmptyHistory,
}

/// Complete game state.
///
/// The board, the history and the tracker only change together: every
/// mutation goes through [`Position::apply`] and [`Position::undo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) history: MoveHistory,
    pub(crate) tracker: PositionTracker,
}

impl Position {
    /// Creates the standard starting position.
    pub fn startpos(orientation: Orientation) -> Self {
        Self::from_layout(&Layout::standard(), orientation)
    }

    /// Creates a position from a layout.
    pub fn from_layout(layout: &Layout, orientation: Orientation) -> Self {
        let board = Board::from_layout(layout, orientation);
        // `Layout::parse` rejects anything else with `LayoutError::KingCount`.
        let tracker =
            PositionTracker::from_board(&board).expect("layout guarantees one king per color");
        Position {
            board,
            history: MoveHistory::new(),
            tracker,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.peek()
    }

    /// The color to move, from the parity of the history.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.history.side_to_move()
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.piece_at(sq)
    }

    /// Pseudo-legal destinations of the piece on `sq`.
    pub fn pseudo_legal_moves(&self, sq: Square) -> Result<SquareSet, EngineError> {
        let piece = self.board.piece_at(sq).ok_or(EngineError::EmptySquare(sq))?;
        Ok(piece.pseudo_legal_moves(&self.board, &self.history))
    }

    /// Returns true if the king of `color` is attacked.
    pub fn king_in_check(&self, color: Color) -> bool {
        self.tracker
            .king_in_check(color, &self.board, &self.history)
    }

    /// Union of the pseudo-legal moves of every enemy of `color`.
    pub fn all_enemy_moves(&self, color: Color) -> SquareSet {
        self.tracker
            .all_enemy_moves(color, &self.board, &self.history)
    }

    /// Squares threatened by the pieces of `by`.
    pub fn attacked_squares(&self, by: Color) -> SquareSet {
        self.tracker.attacked_squares(by, &self.board)
    }

    /// Total material of `color`, king excluded.
    pub fn material(&self, color: Color) -> u32 {
        self.tracker.material(color, &self.board)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos(Orientation::WhiteBottom)
    }
}
