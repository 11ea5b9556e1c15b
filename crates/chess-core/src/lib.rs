//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], [`Rank`] and [`Orientation`] for board coordinates
//! - [`Move`] for move requests
//! - [`Layout`] for piece-placement parsing

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::{BoardSide, Color};
pub use layout::{Layout, LayoutError, Placement};
pub use mov::Move;
pub use piece::PieceKind;
pub use square::{File, Orientation, Rank, Square};
