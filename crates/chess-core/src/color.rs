//! Player color and board side representation.

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The half of the board a piece was set up on.
///
/// Only pawns care: a pawn always advances away from its own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSide {
    /// Rows 6 and 7 at setup.
    Bottom,
    /// Rows 0 and 1 at setup.
    Top,
}

impl BoardSide {
    /// Row delta of one pawn step (-1 for Bottom, +1 for Top).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            BoardSide::Bottom => -1,
            BoardSide::Top => 1,
        }
    }

    /// Row a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> u8 {
        match self {
            BoardSide::Bottom => 3,
            BoardSide::Top => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn color_index() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn board_side_rows() {
        assert_eq!(BoardSide::Bottom.forward(), -1);
        assert_eq!(BoardSide::Top.forward(), 1);
        assert_eq!(BoardSide::Bottom.en_passant_row(), 3);
        assert_eq!(BoardSide::Top.en_passant_row(), 4);
    }
}
