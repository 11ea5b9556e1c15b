//! Selection state for point-and-click input.
//!
//! A [`Session`] remembers which piece the player picked up and where it
//! may go. It is owned by the presentation layer and handed the [`Game`]
//! on every click, so the game itself carries no selection.

use crate::{Game, GameError, SquareSet};
use chess_core::{Color, Move, Square};
use tracing::debug;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// A piece was picked up; `moves` are its legal destinations.
    Selected { square: Square, moves: SquareSet },
    /// The selection was dropped.
    Deselected,
    /// The selected piece moved; `touched` are the squares to repaint.
    Moved { mv: Move, touched: SquareSet },
    /// Nothing was selected and nothing selectable was clicked.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    player: Option<Color>,
    selected: Option<(Square, SquareSet)>,
}

impl Session {
    /// A session where whoever is to move may click.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for one player; the other side's pieces never respond.
    pub fn for_player(color: Color) -> Self {
        Session {
            player: Some(color),
            selected: None,
        }
    }

    pub fn player(&self) -> Option<Color> {
        self.player
    }

    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected.map(|(sq, _)| sq)
    }

    /// Destinations of the selected piece.
    pub fn highlighted(&self) -> SquareSet {
        self.selected.map_or(SquareSet::EMPTY, |(_, moves)| moves)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handles a click on `sq`.
    ///
    /// Clicking a highlighted square plays the move; clicking the selected
    /// piece again drops it; clicking another piece of the same side picks
    /// that one up instead. A rejected move leaves the selection as it was.
    pub fn click(&mut self, game: &mut Game, sq: Square) -> Result<Click, GameError> {
        if let Some((from, moves)) = self.selected {
            if sq == from {
                self.clear();
                return Ok(Click::Deselected);
            }
            if moves.contains(sq) {
                let touched = game.apply_move(from, sq)?;
                self.clear();
                return Ok(Click::Moved {
                    mv: Move::new(from, sq),
                    touched,
                });
            }
            if !self.can_select(game, sq) {
                self.clear();
                return Ok(Click::Deselected);
            }
        }

        if !self.can_select(game, sq) {
            return Ok(Click::Ignored);
        }
        let moves = game.legal_moves(sq)?;
        debug!(square = sq.index(), moves = moves.len(), "piece selected");
        self.selected = Some((sq, moves));
        Ok(Click::Selected { square: sq, moves })
    }

    fn can_select(&self, game: &Game, sq: Square) -> bool {
        let to_move = game.side_to_move();
        self.player.unwrap_or(to_move) == to_move
            && game.piece_at(sq).is_some_and(|p| p.color() == to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(game: &Game, name: &str) -> Square {
        game.square(name).unwrap()
    }

    #[test]
    fn select_and_move() {
        let mut game = Game::default();
        let mut session = Session::new();
        let e2 = sq(&game, "e2");
        let e4 = sq(&game, "e4");

        let click = session.click(&mut game, e2).unwrap();
        assert!(matches!(click, Click::Selected { moves, .. } if moves.len() == 2));
        assert_eq!(session.selected(), Some(e2));
        assert!(session.highlighted().contains(e4));

        let click = session.click(&mut game, e4).unwrap();
        assert!(matches!(click, Click::Moved { mv, .. } if mv == Move::new(e2, e4)));
        assert_eq!(session.selected(), None);
        assert!(session.highlighted().is_empty());
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn clicking_selected_piece_deselects() {
        let mut game = Game::default();
        let mut session = Session::new();
        let g1 = sq(&game, "g1");
        session.click(&mut game, g1).unwrap();
        assert_eq!(session.click(&mut game, g1).unwrap(), Click::Deselected);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn clicking_another_own_piece_reselects() {
        let mut game = Game::default();
        let mut session = Session::new();
        let g1 = sq(&game, "g1");
        let b1 = sq(&game, "b1");
        session.click(&mut game, g1).unwrap();
        let click = session.click(&mut game, b1).unwrap();
        assert!(matches!(click, Click::Selected { square, .. } if square == b1));
        assert_eq!(session.selected(), Some(b1));
    }

    #[test]
    fn clicking_elsewhere_clears() {
        let mut game = Game::default();
        let mut session = Session::new();
        let e2 = sq(&game, "e2");
        let e6 = sq(&game, "e6");
        session.click(&mut game, e2).unwrap();
        let click = session.click(&mut game, e6).unwrap();
        assert_eq!(click, Click::Deselected);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn opponent_pieces_are_ignored() {
        let mut game = Game::default();
        let mut session = Session::new();
        let e7 = sq(&game, "e7");
        let e4 = sq(&game, "e4");
        assert_eq!(session.click(&mut game, e7).unwrap(), Click::Ignored);
        assert_eq!(session.click(&mut game, e4).unwrap(), Click::Ignored);
    }

    #[test]
    fn player_session_waits_for_its_turn() {
        let mut game = Game::default();
        let mut session = Session::for_player(Color::Black);
        let e7 = sq(&game, "e7");
        assert_eq!(session.click(&mut game, e7).unwrap(), Click::Ignored);
        game.apply_uci("e2e4").unwrap();
        let click = session.click(&mut game, e7).unwrap();
        assert!(matches!(click, Click::Selected { .. }));
        assert_eq!(session.player(), Some(Color::Black));
    }
}
