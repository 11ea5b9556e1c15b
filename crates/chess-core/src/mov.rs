//! Move representation.

use crate::{Orientation, Square};
use std::fmt;

/// A move request: a piece travels from one square to another.
///
/// Captures, castling and en passant are not encoded here; the engine
/// works them out from the board when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses coordinate notation (e.g., "e2e4") for the given orientation.
    pub fn parse(s: &str, orientation: Orientation) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = orientation.parse_square(&s[0..2])?;
        let to = orientation.parse_square(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Returns coordinate notation (e.g., "e2e4") for the given orientation.
    pub fn to_coords(self, orientation: Orientation) -> String {
        format!(
            "{}{}",
            orientation.name(self.from),
            orientation.name(self.to)
        )
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_accessors() {
        let e2 = Square::from_index(52).unwrap();
        let e4 = Square::from_index(36).unwrap();
        let m = Move::new(e2, e4);
        assert_eq!(m.from(), e2);
        assert_eq!(m.to(), e4);
    }

    #[test]
    fn move_parse() {
        let m = Move::parse("e2e4", Orientation::WhiteBottom).unwrap();
        assert_eq!(m.from().index(), 52);
        assert_eq!(m.to().index(), 36);

        let flipped = Move::parse("e2e4", Orientation::BlackBottom).unwrap();
        assert_eq!(flipped.from().index(), 11);
        assert_eq!(flipped.to().index(), 27);

        assert!(Move::parse("invalid", Orientation::WhiteBottom).is_none());
        assert!(Move::parse("e2e9", Orientation::WhiteBottom).is_none());
        assert!(Move::parse("e2", Orientation::WhiteBottom).is_none());
        assert!(Move::parse("e7e8q", Orientation::WhiteBottom).is_none());
    }

    #[test]
    fn move_to_coords() {
        let m = Move::parse("g1f3", Orientation::BlackBottom).unwrap();
        assert_eq!(m.to_coords(Orientation::BlackBottom), "g1f3");
    }

    #[test]
    fn move_debug_display() {
        let m = Move::parse("e2e4", Orientation::WhiteBottom).unwrap();
        assert_eq!(format!("{:?}", m), "Move(52->36)");
        assert_eq!(format!("{}", m), "52->36");
    }
}
