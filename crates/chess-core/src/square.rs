//! Board square representation.

use crate::{BoardSide, Color};
use std::fmt;

/// A file (column letter) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row number) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board, indexed 0-63.
///
/// Indexing is row-major from the top-left corner as the board is shown:
/// row = index / 8, column = index % 8. Row 0 is the top edge. Which
/// chess square an index names depends on the [`Orientation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from a row and column, both 0-7.
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = top edge).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = left edge).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square `d_row` rows and `d_col` columns away, or `None`
    /// if that leaves the board.
    ///
    /// Rows and columns are checked separately, so a step can never wrap
    /// from one edge of the board onto the opposite edge.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.column() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square((row * 8 + col) as u8))
        }
    }

    /// Coarse edge test on a raw index step: `to` lies on the board and
    /// within two columns of `from`.
    ///
    /// Agrees with [`Square::offset`] for every knight, king, pawn and
    /// single sliding step, since none moves more than two columns and a
    /// wrap always moves six or more.
    pub const fn within_column_window(from: Square, to: i16) -> bool {
        let col_delta = (to % 8 - from.0 as i16 % 8).abs();
        to >= 0 && to <= 63 && col_delta <= 2
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which color sits at the bottom of the board (rows 6-7).
///
/// `BlackBottom` is `WhiteBottom` turned 180 degrees, so every piece keeps
/// its true file; only the index of each chess square changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Orientation {
    /// Returns the orientation that puts `color` at the bottom.
    #[inline]
    pub const fn with_bottom(color: Color) -> Self {
        match color {
            Color::White => Orientation::WhiteBottom,
            Color::Black => Orientation::BlackBottom,
        }
    }

    /// Returns the color set up on rows 6-7.
    #[inline]
    pub const fn bottom_color(self) -> Color {
        match self {
            Orientation::WhiteBottom => Color::White,
            Orientation::BlackBottom => Color::Black,
        }
    }

    /// Returns the board side the given color starts on.
    #[inline]
    pub const fn side_of(self, color: Color) -> BoardSide {
        if (color as u8) == (self.bottom_color() as u8) {
            BoardSide::Bottom
        } else {
            BoardSide::Top
        }
    }

    /// Returns the square for a file and rank.
    pub const fn square(self, file: File, rank: Rank) -> Square {
        let index = (7 - rank.index()) * 8 + file.index();
        match self {
            Orientation::WhiteBottom => Square(index),
            Orientation::BlackBottom => Square(63 - index),
        }
    }

    /// Returns the file and rank of a square.
    pub const fn file_rank(self, sq: Square) -> (File, Rank) {
        let index = match self {
            Orientation::WhiteBottom => sq.0,
            Orientation::BlackBottom => 63 - sq.0,
        };
        let file = match File::from_index(index % 8) {
            Some(f) => f,
            None => unreachable!(),
        };
        let rank = match Rank::from_index(7 - index / 8) {
            Some(r) => r,
            None => unreachable!(),
        };
        (file, rank)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn parse_square(self, s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(self.square(file, rank))
    }

    /// Returns the algebraic notation for a square.
    pub fn name(self, sq: Square) -> String {
        let (file, rank) = self.file_rank(sq);
        format!("{}{}", file, rank)
    }
}
