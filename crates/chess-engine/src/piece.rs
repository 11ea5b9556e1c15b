//! Live pieces and their pseudo-legal move generation.
//!
//! Each piece kind's movement pattern is a table of (row, column) steps.
//! Sliding pieces repeat a step until they leave the board or hit a piece;
//! leaping pieces take each step once. Pawns and the king's castling have
//! their own rules.

use crate::{Board, MoveHistory, SquareSet};
use chess_core::{BoardSide, Color, PieceKind, Square};

/// Stable handle of a piece on a [`Board`].
///
/// A captured piece keeps its id, so the move history can put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A piece on (or captured from) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) side: BoardSide,
    pub(crate) square: Square,
    pub(crate) first_move: bool,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The board side this piece was set up on.
    pub fn side(&self) -> BoardSide {
        self.side
    }

    /// Current square, or the square it was captured on.
    pub fn square(&self) -> Square {
        self.square
    }

    /// True until the piece moves for the first time.
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// Destinations this piece may move to, ignoring whether the move
    /// would leave its own king in check.
    pub fn pseudo_legal_moves(&self, board: &Board, history: &MoveHistory) -> SquareSet {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board, history),
            PieceKind::Knight => self.step_moves(board, &KNIGHT_STEPS),
            PieceKind::Bishop => self.ray_moves(board, &BISHOP_RAYS),
            PieceKind::Rook => self.ray_moves(board, &ROOK_RAYS),
            PieceKind::Queen => {
                self.ray_moves(board, &ROOK_RAYS) | self.ray_moves(board, &BISHOP_RAYS)
            }
            PieceKind::King => self.step_moves(board, &KING_STEPS) | self.castling_moves(board),
        }
    }

    /// Squares this piece threatens.
    ///
    /// Same as the pseudo-legal moves except that a pawn threatens both
    /// forward diagonals whatever stands there, and never its push
    /// squares, and a king never threatens by castling.
    pub fn attacks(&self, board: &Board) -> SquareSet {
        match self.kind {
            PieceKind::Pawn => {
                let forward = self.side.forward();
                [-1, 1]
                    .into_iter()
                    .filter_map(|d_col| self.square.offset(forward, d_col))
                    .collect()
            }
            PieceKind::King => self.step_moves(board, &KING_STEPS),
            PieceKind::Knight => self.step_moves(board, &KNIGHT_STEPS),
            PieceKind::Bishop => self.ray_moves(board, &BISHOP_RAYS),
            PieceKind::Rook => self.ray_moves(board, &ROOK_RAYS),
            PieceKind::Queen => {
                self.ray_moves(board, &ROOK_RAYS) | self.ray_moves(board, &BISHOP_RAYS)
            }
        }
    }

    fn is_enemy_at(&self, board: &Board, sq: Square) -> bool {
        board.piece_at(sq).is_some_and(|p| p.color != self.color)
    }

    /// One step per entry; empty or enemy-held destinations only.
    fn step_moves(&self, board: &Board, steps: &[(i8, i8)]) -> SquareSet {
        steps
            .iter()
            .filter_map(|&(d_row, d_col)| self.square.offset(d_row, d_col))
            .filter(|&to| board.is_empty(to) || self.is_enemy_at(board, to))
            .collect()
    }

    /// Walks each ray until the board edge or the first occupied square,
    /// which is included only when it holds an enemy.
    fn ray_moves(&self, board: &Board, rays: &[(i8, i8)]) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(d_row, d_col) in rays {
            let mut current = self.square;
            while let Some(next) = current.offset(d_row, d_col) {
                if board.is_empty(next) {
                    moves.insert(next);
                    current = next;
                    continue;
                }
                if self.is_enemy_at(board, next) {
                    moves.insert(next);
                }
                break;
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board, history: &MoveHistory) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let forward = self.side.forward();

        if let Some(one) = self.square.offset(forward, 0) {
            if board.is_empty(one) {
                moves.insert(one);
                if self.first_move {
                    if let Some(two) = self.square.offset(2 * forward, 0) {
                        if board.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(diagonal) = self.square.offset(forward, d_col) else {
                continue;
            };
            if self.is_enemy_at(board, diagonal) || self.can_take_en_passant(board, history, d_col)
            {
                moves.insert(diagonal);
            }
        }

        moves
    }

    /// True if the enemy pawn beside this one (towards `d_col`) advanced
    /// two rows on the very last move.
    fn can_take_en_passant(&self, board: &Board, history: &MoveHistory, d_col: i8) -> bool {
        if self.square.row() != self.side.en_passant_row() {
            return false;
        }
        let Some(last) = history.peek() else {
            return false;
        };
        let Some(beside) = self.square.offset(0, d_col) else {
            return false;
        };
        let victim = board.piece(last.piece);
        victim.kind == PieceKind::Pawn
            && victim.color != self.color
            && last.to == beside
            && last.from.row().abs_diff(last.to.row()) == 2
            && board.id_at(beside) == Some(last.piece)
    }

    /// Two-column king moves towards an unmoved rook of the same color
    /// with nothing in between. Attack safety is checked by the legality
    /// filter, not here.
    fn castling_moves(&self, board: &Board) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        if self.kind != PieceKind::King || !self.first_move {
            return moves;
        }
        for dir in [-1i8, 1] {
            let Some(rook_square) = castling_rook_square(self.square, dir) else {
                continue;
            };
            let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == self.color && rook.first_move
            });
            if !rook_ready {
                continue;
            }
            let (low, high) = if dir < 0 {
                (rook_square.column() + 1, self.square.column())
            } else {
                (self.square.column() + 1, rook_square.column())
            };
            let path_clear = (low..high)
                .filter_map(|col| Square::from_row_col(self.square.row(), col))
                .all(|sq| board.is_empty(sq));
            if path_clear {
                if let Some(to) = self.square.offset(0, 2 * dir) {
                    moves.insert(to);
                }
            }
        }
        moves
    }
}

/// Corner square on the king's row in direction `dir` (-1 left, +1 right).
pub(crate) fn castling_rook_square(king_square: Square, dir: i8) -> Option<Square> {
    let col = if dir < 0 { 0 } else { 7 };
    Square::from_row_col(king_square.row(), col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Layout, Orientation};

    fn board(placement: &str) -> Board {
        Board::from_layout(&Layout::parse(placement).unwrap(), Orientation::WhiteBottom)
    }

    fn sq(name: &str) -> Square {
        Orientation::WhiteBottom.parse_square(name).unwrap()
    }

    fn squares(names: &[&str]) -> SquareSet {
        names.iter().map(|n| sq(n)).collect()
    }

    fn moves_of(board: &Board, name: &str) -> SquareSet {
        board
            .piece_at(sq(name))
            .unwrap()
            .pseudo_legal_moves(board, &MoveHistory::new())
    }

    #[test]
    fn knight_in_corner() {
        let b = board("4k3/8/8/8/8/8/8/N3K3");
        assert_eq!(moves_of(&b, "a1"), squares(&["b3", "c2"]));
    }

    #[test]
    fn knight_on_h_file_does_not_wrap() {
        let b = board("4k3/8/8/7N/8/8/8/4K3");
        assert_eq!(moves_of(&b, "h5"), squares(&["g7", "f6", "f4", "g3"]));
    }

    #[test]
    fn rook_stops_at_pieces() {
        let b = board("4k3/8/8/8/R2p4/8/P7/4K3");
        let moves = moves_of(&b, "a4");
        assert!(moves.contains(sq("d4")));
        assert!(!moves.contains(sq("e4")));
        assert!(moves.contains(sq("a3")));
        assert!(!moves.contains(sq("a2")));
        assert!(moves.contains(sq("a8")));
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn bishop_on_edge_does_not_wrap() {
        let b = board("4k3/8/8/7B/8/8/8/4K3");
        assert_eq!(
            moves_of(&b, "h5"),
            squares(&["g6", "f7", "e8", "g4", "f3", "e2", "d1"])
        );
    }

    #[test]
    fn queen_combines_rays() {
        let b = board("4k3/8/8/8/3Q4/8/8/4K3");
        assert_eq!(moves_of(&b, "d4").len(), 27);
    }

    #[test]
    fn pawn_single_and_double_step() {
        let b = board(Layout::STANDARD);
        assert_eq!(moves_of(&b, "e2"), squares(&["e3", "e4"]));
        assert_eq!(moves_of(&b, "d7"), squares(&["d6", "d5"]));
    }

    #[test]
    fn pawn_blocked() {
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(moves_of(&b, "e2").is_empty());
        let b = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(moves_of(&b, "e2"), squares(&["e3"]));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let b = board("4k3/8/8/8/8/3p1N2/4P3/4K3");
        assert_eq!(moves_of(&b, "e2"), squares(&["e3", "e4", "d3"]));
    }

    #[test]
    fn moved_pawn_has_no_double_step() {
        let b = board("4k3/8/8/8/8/4P3/8/4K3");
        assert_eq!(moves_of(&b, "e3"), squares(&["e4"]));
    }

    #[test]
    fn pawn_attacks_both_diagonals() {
        let b = board("4k3/8/8/8/8/8/P3P3/4K3");
        let pawn = b.piece_at(sq("e2")).unwrap();
        assert_eq!(pawn.attacks(&b), squares(&["d3", "f3"]));
        let edge = b.piece_at(sq("a2")).unwrap();
        assert_eq!(edge.attacks(&b), squares(&["b3"]));
    }

    #[test]
    fn king_castling_candidates() {
        let b = board("4k3/8/8/8/8/8/8/R3K2R");
        let moves = moves_of(&b, "e1");
        assert!(moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn castling_blocked_by_piece() {
        let b = board("4k3/8/8/8/8/8/8/RN2K1NR");
        let moves = moves_of(&b, "e1");
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }

    #[test]
    fn king_attacks_exclude_castling() {
        let b = board("4k3/8/8/8/8/8/8/R3K2R");
        let king = b.piece_at(sq("e1")).unwrap();
        assert!(!king.attacks(&b).contains(sq("g1")));
    }

    #[test]
    fn castling_in_black_bottom_orientation() {
        let o = Orientation::BlackBottom;
        let b = Board::from_layout(&Layout::parse("r3k2r/8/8/8/8/8/8/4K3").unwrap(), o);
        let king = b.piece_at(o.parse_square("e8").unwrap()).unwrap();
        let moves = king.pseudo_legal_moves(&b, &MoveHistory::new());
        assert!(moves.contains(o.parse_square("g8").unwrap()));
        assert!(moves.contains(o.parse_square("c8").unwrap()));
    }

    #[test]
    fn castling_rook_corner() {
        let e1 = sq("e1");
        assert_eq!(castling_rook_square(e1, 1), Some(sq("h1")));
        assert_eq!(castling_rook_square(e1, -1), Some(sq("a1")));
    }
}
