//! Text rendering of the board.

use chess_core::Square;
use chess_engine::{Game, SquareSet};

/// Draws the board as the player sees it, bottom side last.
///
/// Highlighted empty squares show as `*`, highlighted pieces are wrapped
/// in brackets.
pub fn render_board(game: &Game, highlights: SquareSet, unicode: bool) -> String {
    let orientation = game.orientation();
    let mut out = String::new();

    for row in 0..8u8 {
        let Some(first) = Square::from_row_col(row, 0) else {
            continue;
        };
        let (_, rank) = orientation.file_rank(first);
        out.push_str(&format!("{} ", rank));

        for col in 0..8u8 {
            let Some(sq) = Square::from_row_col(row, col) else {
                continue;
            };
            let symbol = match game.piece_at(sq) {
                Some(p) if unicode => p.kind().glyph(p.color()),
                Some(p) => p.kind().to_char(p.color()),
                None if highlights.contains(sq) => '*',
                None => '.',
            };
            if highlights.contains(sq) && game.piece_at(sq).is_some() {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..8u8 {
        if let Some(sq) = Square::from_row_col(7, col) {
            let (file, _) = orientation.file_rank(sq);
            out.push_str(&format!(" {} ", file));
        }
    }
    out.push('\n');
    out
}

/// Lists squares by name, in index order.
pub fn square_names(game: &Game, squares: SquareSet) -> String {
    squares
        .iter()
        .map(|sq| game.orientation().name(sq))
        .collect::<Vec<_>>()
        .join(" ")
}
