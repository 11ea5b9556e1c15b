//! Terminal front end for the chess rules engine.
//!
//! - [`config`] - `chess.toml` loading
//! - [`command`] - prompt command parsing
//! - [`render`] - text board
//! - [`shell`] - the read-execute-print loop

pub mod command;
pub mod config;
pub mod render;
pub mod shell;
