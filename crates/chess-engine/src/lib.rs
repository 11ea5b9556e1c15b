//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 64 squares over an arena of [`Piece`]s
//! - [`MoveHistory`] - the stack of applied moves, which also decides whose
//!   turn it is
//! - [`PositionTracker`] - kings, alive pieces and check detection
//! - [`Position`] - the three together, with apply/undo and the legality
//!   filter
//! - [`Game`] - the command surface for a presentation layer
//! - [`Session`] - point-and-click selection state
//!
//! # Architecture
//!
//! Pieces generate pseudo-legal destinations from (row, column) step
//! tables. Legal moves are found by playing each candidate on the
//! position, checking the mover's king and taking the move back, so the
//! position is mutated only through [`Position::apply`] and
//! [`Position::undo`].
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus};
//! use chess_core::{Color, Orientation};
//!
//! let mut game = Game::new(Orientation::WhiteBottom);
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_uci(mv).unwrap();
//! }
//! assert!(game.is_in_check(Color::White));
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

mod board;
mod engine;
mod game;
mod history;
mod legality;
mod piece;
mod position;
mod session;
mod square_set;
mod tracker;

pub use board::Board;
pub use game::{Game, GameError};
pub use history::{MoveEffect, MoveHistory, MoveRecord};
pub use legality::GameStatus;
pub use piece::{Piece, PieceId};
pub use position::{EngineError, Position};
pub use session::{Click, Session};
pub use square_set::{SquareSet, SquareSetIter};
pub use tracker::PositionTracker;
