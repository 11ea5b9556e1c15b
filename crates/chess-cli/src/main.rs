//! Play chess in the terminal.

use chess_cli::config::{ChessConfig, Side};
use chess_cli::shell::Shell;
use chess_core::{Color, Orientation};
use chess_engine::Game;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Side drawn at the bottom of the board (overrides the config file)
    #[arg(long, value_enum)]
    side: Option<Side>,

    /// Log filter, e.g. "chess_engine=debug" (overrides the config file)
    #[arg(long)]
    log: Option<String>,

    /// Draw pieces with chess glyphs
    #[arg(long)]
    unicode: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ChessConfig::load_from(&args.config)?;

    let filter = args.log.as_deref().unwrap_or(&config.log);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(io::stderr)
        .init();

    let side: Color = args.side.unwrap_or(config.side).into();
    tracing::info!("Config: {:?}", args.config);
    tracing::info!("Playing with {} at the bottom", side);

    let game = Game::new(Orientation::with_bottom(side));
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), game, args.unicode || config.unicode);
    shell.run()?;
    Ok(())
}
