//! Game management: the command surface a presentation layer drives.
//!
//! [`Game`] wraps a [`Position`] and checks every request against the
//! rules before the position is touched: a move is applied only if it is
//! the mover's turn and the destination is in the piece's legal set.

use crate::{GameStatus, Piece, Position, SquareSet};
use chess_core::{Color, Layout, Move, Orientation, Square};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No piece stands on the selected square.
    #[error("no piece on square {0}")]
    IllegalSelection(Square),

    /// The move is not legal in the current position.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// The coordinate text could not be parsed.
    #[error("invalid move notation: {0:?}")]
    InvalidNotation(String),
}

/// A chess game between two players on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    orientation: Orientation,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Orientation::WhiteBottom)
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new(orientation: Orientation) -> Self {
        Self::from_layout(&Layout::standard(), orientation)
    }

    /// Creates a game from a custom layout. White moves first.
    pub fn from_layout(layout: &Layout, orientation: Orientation) -> Self {
        Game {
            position: Position::from_layout(layout, orientation),
            orientation,
        }
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Resolves an algebraic square name ("e4") for this board.
    pub fn square(&self, name: &str) -> Option<Square> {
        self.orientation.parse_square(name)
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.position.piece_at(sq)
    }

    /// The color to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.position.history().len()
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.position
            .last_move()
            .map(|record| Move::new(record.from, record.to))
    }

    /// Legal destinations for the piece on `sq`.
    pub fn legal_moves(&mut self, sq: Square) -> Result<SquareSet, GameError> {
        self.position
            .legal_moves(sq)
            .map_err(|_| GameError::IllegalSelection(sq))
    }

    /// Applies a move and returns the squares whose contents changed.
    ///
    /// Nothing changes if the move is rejected.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<SquareSet, GameError> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or(GameError::IllegalSelection(from))?;
        if piece.color() != self.side_to_move() {
            return Err(GameError::IllegalMove { from, to });
        }
        if !self.legal_moves(from)?.contains(to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let record = self
            .position
            .apply(from, to)
            .map_err(|_| GameError::IllegalSelection(from))?;
        info!(
            mv = %Move::new(from, to).to_coords(self.orientation),
            ply = self.ply_count(),
            "move played"
        );
        Ok(record.touched())
    }

    /// Applies a move given as coordinates, such as "e2e4".
    pub fn apply_uci(&mut self, coords: &str) -> Result<SquareSet, GameError> {
        let mv = Move::parse(coords, self.orientation)
            .ok_or_else(|| GameError::InvalidNotation(coords.to_string()))?;
        self.apply_move(mv.from(), mv.to())
    }

    /// Takes back the last move and returns the squares it had changed.
    ///
    /// Returns `None`, changing nothing, if no move has been played.
    pub fn undo_last_move(&mut self) -> Option<SquareSet> {
        match self.position.undo() {
            Ok(record) => Some(record.touched()),
            Err(e) => {
                debug!("undo ignored: {}", e);
                None
            }
        }
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.king_in_check(color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.position.is_checkmate(color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        self.position.is_stalemate(color)
    }

    /// Status of the side to move.
    pub fn status(&mut self) -> GameStatus {
        self.position.status()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&mut self) -> bool {
        self.status().is_over()
    }

    /// Material of `color` still on the board, king excluded.
    pub fn material(&self, color: Color) -> u32 {
        self.position.material(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[&str]) {
        for mv in moves {
            game.apply_uci(mv).unwrap();
        }
    }

    #[test]
    fn new_game() {
        let mut game = Game::default();
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert!(game.last_move().is_none());
    }

    #[test]
    fn apply_uci() {
        let mut game = Game::default();
        let touched = game.apply_uci("e2e4").unwrap();
        assert_eq!(touched.len(), 2);
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.side_to_move(), Color::Black);
        let e4 = game.square("e4").unwrap();
        assert_eq!(game.last_move().map(|m| m.to()), Some(e4));
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = Game::default();
        let before = game.clone();
        let e2 = game.square("e2").unwrap();
        let e5 = game.square("e5").unwrap();
        assert_eq!(
            game.apply_uci("e2e5"),
            Err(GameError::IllegalMove { from: e2, to: e5 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn moving_out_of_turn() {
        let mut game = Game::default();
        assert!(matches!(
            game.apply_uci("e7e5"),
            Err(GameError::IllegalMove { .. })
        ));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn empty_selection() {
        let mut game = Game::default();
        let e4 = game.square("e4").unwrap();
        assert_eq!(game.legal_moves(e4), Err(GameError::IllegalSelection(e4)));
        assert!(matches!(
            game.apply_uci("e4e5"),
            Err(GameError::IllegalSelection(_))
        ));
    }

    #[test]
    fn invalid_notation() {
        let mut game = Game::default();
        assert_eq!(
            game.apply_uci("e2"),
            Err(GameError::InvalidNotation("e2".to_string()))
        );
        assert!(game.apply_uci("z9e4").is_err());
    }

    #[test]
    fn undo_on_fresh_game_is_a_no_op() {
        let mut game = Game::default();
        let before = game.clone();
        assert_eq!(game.undo_last_move(), None);
        assert_eq!(game, before);
    }

    #[test]
    fn undo_restores_turn() {
        let mut game = Game::default();
        play(&mut game, &["e2e4", "e7e5"]);
        let touched = game.undo_last_move().unwrap();
        assert!(touched.contains(game.square("e5").unwrap()));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply_count(), 1);
    }

    #[test]
    fn checkmate_fools_mate() {
        let mut game = Game::default();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.is_in_check(Color::White));
        assert!(game.is_checkmate(Color::White));
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert!(game.is_game_over());
    }

    #[test]
    fn stalemate() {
        let layout = Layout::parse("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        let mut game = Game::from_layout(&layout, Orientation::WhiteBottom);
        play(&mut game, &["g6h6"]);
        assert!(game.is_stalemate(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn castling_touches_four_squares() {
        let layout = Layout::parse("4k3/8/8/8/8/8/8/4K2R").unwrap();
        let mut game = Game::from_layout(&layout, Orientation::WhiteBottom);
        let touched = game.apply_uci("e1g1").unwrap();
        assert_eq!(touched.len(), 4);
        assert!(touched.contains(game.square("h1").unwrap()));
        assert!(touched.contains(game.square("f1").unwrap()));
    }

    #[test]
    fn capture_reduces_material() {
        let mut game = Game::default();
        play(&mut game, &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(game.material(Color::Black), 36);
        assert_eq!(game.material(Color::White), 37);
        game.undo_last_move();
        assert_eq!(game.material(Color::Black), 37);
    }

    #[test]
    fn black_bottom_orientation() {
        let mut game = Game::new(Orientation::BlackBottom);
        let e2 = game.square("e2").unwrap();
        assert_eq!(e2.index(), 11);
        assert_eq!(game.legal_moves(e2).unwrap().len(), 2);
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);
        assert_eq!(game.ply_count(), 3);
    }

    #[test]
    fn error_display() {
        let sq = Square::from_index(12).unwrap();
        assert_eq!(
            GameError::IllegalSelection(sq).to_string(),
            "no piece on square 12"
        );
        assert_eq!(
            GameError::InvalidNotation("xx".into()).to_string(),
            "invalid move notation: \"xx\""
        );
    }
}
