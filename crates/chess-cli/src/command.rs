//! Command parsing for the interactive shell.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' needs a square, e.g. '{0} e2'")]
    MissingSquare(&'static str),
}

/// Commands typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move in coordinates ("e2e4").
    Play(String),
    /// List the legal moves of the piece on a square.
    Moves(String),
    /// Click a square: select, deselect or move, as with a mouse.
    Click(String),
    /// Take back the last move.
    Undo,
    /// Print the board.
    Board,
    /// Print whose turn it is and whether the game is over.
    Status,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// Anything else; kept so the shell can echo it back.
    Unknown(String),
}

impl Command {
    /// Parse one line of input.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match cmd {
            "" => Ok(Command::Empty),
            "undo" | "u" => Ok(Command::Undo),
            "board" | "b" => Ok(Command::Board),
            "status" | "s" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "moves" | "m" => arg
                .map(|sq| Command::Moves(sq.to_string()))
                .ok_or(CommandError::MissingSquare("moves")),
            "click" | "c" => arg
                .map(|sq| Command::Click(sq.to_string()))
                .ok_or(CommandError::MissingSquare("click")),
            mv if looks_like_move(mv) => Ok(Command::Play(mv.to_string())),
            _ => Ok(Command::Unknown(input.to_string())),
        }
    }
}

/// Four characters, file-rank-file-rank.
fn looks_like_move(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 4
        && b[0].is_ascii_lowercase()
        && b[1].is_ascii_digit()
        && b[2].is_ascii_lowercase()
        && b[3].is_ascii_digit()
}

pub const HELP: &str = "\
commands:
  e2e4         play a move
  moves <sq>   list legal moves of the piece on <sq>
  click <sq>   select a piece, then click a destination
  undo         take back the last move
  board        print the board
  status       whose turn, check, mate
  quit";
