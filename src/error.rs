use std::path::PathBuf;

use crate::game::{MoveError, Outcome};

/// Errors from move selection and agent play.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("game is already over ({0:?})")]
    GameOver(Outcome),

    #[error("rollouts_per_move must be > 0")]
    ZeroRollouts,

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

/// Errors raised while translating an external match description into a
/// game state.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected game '{0}' (expected 'connect4')")]
    WrongGame(String),

    #[error("match is not in progress (state '{0}')")]
    MatchOver(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("board has {found} cells (expected {expected})")]
    BoardSize { expected: usize, found: usize },

    #[error("grid must be 7 columns of 6 tokens")]
    GridShape,

    #[error("unknown cell value {value} at index {index}")]
    UnknownCell { index: usize, value: String },

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("board has a piece above an empty cell")]
    FloatingPiece,

    #[error("payload matches no known match format")]
    UnrecognizedFormat,
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

    #[error("invalid value for {key}: {value}")]
    Override { key: &'static str, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}
