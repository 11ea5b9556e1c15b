//! Board representation.

use crate::piece::{Piece, PieceId};
use chess_core::{Color, Layout, Orientation, PieceKind, Square};

/// The 64 squares and the pieces that have been set on them.
///
/// Pieces live in an arena indexed by [`PieceId`]; a square holds at most
/// one id. A captured piece stays in the arena (so it can be restored) but
/// no square refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<PieceId>; Square::COUNT],
    pieces: Vec<Piece>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
            pieces: Vec::with_capacity(32),
        }
    }

    /// Sets up a board from a layout, seen from the given orientation.
    pub fn from_layout(layout: &Layout, orientation: Orientation) -> Self {
        let mut board = Board::empty();
        for p in layout.placements() {
            let square = orientation.square(p.file, p.rank);
            board.add_piece(p.kind, p.color, orientation, square, p.unmoved);
        }
        board
    }

    fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        orientation: Orientation,
        square: Square,
        first_move: bool,
    ) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece {
            id,
            kind,
            color,
            side: orientation.side_of(color),
            square,
            first_move,
        });
        self.squares[square.index() as usize] = Some(id);
        id
    }

    /// Returns the id of the piece on the given square, if any.
    #[inline]
    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.id_at(sq).map(|id| &self.pieces[id.index()])
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.id_at(sq).is_none()
    }

    /// Returns a piece by id, on the board or captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// Iterates over every piece still standing on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .map(move |id| &self.pieces[id.index()])
    }

    /// Takes whatever stands on the square off the board.
    ///
    /// The piece remembers the square it was lifted from.
    pub(crate) fn lift(&mut self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index() as usize].take()
    }

    /// Puts a piece (back) on an empty square.
    pub(crate) fn place(&mut self, id: PieceId, sq: Square) {
        debug_assert!(self.is_empty(sq), "placing onto occupied square {}", sq);
        self.squares[sq.index() as usize] = Some(id);
        self.pieces[id.index()].square = sq;
    }

    /// Moves a piece from wherever it stands to an empty square, keeping
    /// the square and the piece's own position in step.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.pieces[id.index()].square;
        if self.id_at(from) == Some(id) {
            self.squares[from.index() as usize] = None;
        }
        self.place(id, to);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_layout(&Layout::standard(), Orientation::WhiteBottom)
    }
}
