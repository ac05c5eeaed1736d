use std::path::PathBuf;

use crate::board::{Player, Pos};

/// Reasons a cell selection is rejected.
///
/// All of these are recoverable: the game state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("game is already over, {winner} won")]
    GameAlreadyOver { winner: Player },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
