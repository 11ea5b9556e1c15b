//! Interactive shell: reads commands, drives the game, prints results.

use crate::command::{Command, HELP};
use crate::render::{render_board, square_names};
use chess_core::Square;
use chess_engine::{Click, Game, GameStatus, Session, SquareSet};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub struct Shell<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    game: Game,
    session: Session,
    unicode: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W, game: Game, unicode: bool) -> Self {
        Self {
            reader,
            writer,
            game,
            session: Session::new(),
            unicode,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_board(SquareSet::EMPTY)?;
        let mut line = String::new();
        loop {
            write!(self.writer, "{}> ", self.game.side_to_move())?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.writer, "{}", e)?;
                    continue;
                }
            };
            debug!(?command, "command");
            if !self.execute(command)? {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command; returns false when the shell should stop.
    pub fn execute(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Play(coords) => {
                self.session.clear();
                match self.game.apply_uci(&coords) {
                    Ok(_) => self.after_move()?,
                    Err(e) => writeln!(self.writer, "{}", e)?,
                }
            }
            Command::Moves(name) => {
                let Some(sq) = self.square(&name)? else {
                    return Ok(true);
                };
                match self.game.legal_moves(sq) {
                    Ok(moves) if moves.is_empty() => writeln!(self.writer, "no legal moves")?,
                    Ok(moves) => {
                        let names = square_names(&self.game, moves);
                        writeln!(self.writer, "{}", names)?;
                    }
                    Err(e) => writeln!(self.writer, "{}", e)?,
                }
            }
            Command::Click(name) => {
                let Some(sq) = self.square(&name)? else {
                    return Ok(true);
                };
                match self.session.click(&mut self.game, sq) {
                    Ok(Click::Selected { moves, .. }) => self.print_board(moves)?,
                    Ok(Click::Moved { .. }) => self.after_move()?,
                    Ok(Click::Deselected) => self.print_board(SquareSet::EMPTY)?,
                    Ok(Click::Ignored) => writeln!(self.writer, "nothing to select")?,
                    Err(e) => writeln!(self.writer, "{}", e)?,
                }
            }
            Command::Undo => {
                self.session.clear();
                match self.game.undo_last_move() {
                    Some(_) => self.print_board(SquareSet::EMPTY)?,
                    None => writeln!(self.writer, "nothing to undo")?,
                }
            }
            Command::Board => self.print_board(self.session.highlighted())?,
            Command::Status => self.print_status()?,
            Command::Help => writeln!(self.writer, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Unknown(input) => {
                warn!(%input, "unknown command");
                writeln!(self.writer, "unknown command: {} (try 'help')", input)?;
            }
        }
        Ok(true)
    }

    fn square(&mut self, name: &str) -> io::Result<Option<Square>> {
        let sq = self.game.square(name);
        if sq.is_none() {
            writeln!(self.writer, "not a square: {}", name)?;
        }
        Ok(sq)
    }

    fn after_move(&mut self) -> io::Result<()> {
        self.print_board(SquareSet::EMPTY)?;
        self.print_status()
    }

    fn print_board(&mut self, highlights: SquareSet) -> io::Result<()> {
        let text = render_board(&self.game, highlights, self.unicode);
        write!(self.writer, "{}", text)
    }

    fn print_status(&mut self) -> io::Result<()> {
        let color = self.game.side_to_move();
        match self.game.status() {
            GameStatus::InProgress => writeln!(self.writer, "{} to move", color),
            GameStatus::Check => writeln!(self.writer, "{} to move, in check", color),
            GameStatus::Checkmate => {
                writeln!(self.writer, "checkmate, {} wins", color.opposite())
            }
            GameStatus::Stalemate => writeln!(self.writer, "stalemate"),
        }
    }
}
