//! Configuration file loading.
//!
//! Settings are read from `chess.toml` in the current directory when it
//! exists; every field has a default, so a missing file or a partial one
//! is fine.

use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The side the player sits on; it is drawn at the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChessConfig {
    /// Side shown at the bottom. Defaults to white.
    #[serde(default)]
    pub side: Side,
    /// Log filter in `RUST_LOG` syntax. Defaults to "warn".
    #[serde(default = "default_log")]
    pub log: String,
    /// Draw pieces with chess glyphs instead of letters.
    #[serde(default)]
    pub unicode: bool,
}

fn default_log() -> String {
    "warn".to_string()
}

impl Default for ChessConfig {
    fn default() -> Self {
        ChessConfig {
            side: Side::default(),
            log: default_log(),
            unicode: false,
        }
    }
}

impl ChessConfig {
    /// Loads the configuration from [`Self::config_path()`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, or the defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be
    /// read, or [`ConfigError::ParseError`] if it is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
side = "black"
log = "chess_engine=debug"
unicode = true
"#;
        let config: ChessConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.side, Side::Black);
        assert_eq!(config.log, "chess_engine=debug");
        assert!(config.unicode);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ChessConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChessConfig::default());
        assert_eq!(config.side, Side::White);
        assert_eq!(config.log, "warn");
        assert!(!config.unicode);
    }

    #[test]
    fn test_unknown_side_is_rejected() {
        let result: Result<ChessConfig, _> = toml::from_str("side = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = ChessConfig::load_from(Path::new("does/not/exist/chess.toml")).unwrap();
        assert_eq!(config, ChessConfig::default());
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("chess-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "side = [").unwrap();
        let result = ChessConfig::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_side_to_color() {
        assert_eq!(Color::from(Side::White), Color::White);
        assert_eq!(Color::from(Side::Black), Color::Black);
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(ChessConfig::config_path(), PathBuf::from("chess.toml"));
    }
}
