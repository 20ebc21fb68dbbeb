//! Error types shared across the engine, agents and configuration

use thiserror::Error;

/// Why a stone could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("({row}, {col}) is off the board")]
    OutOfRange { row: i64, col: i64 },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("cannot place an empty stone")]
    NoStone,
}

/// Why a `submit_move` command was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("no game in progress")]
    NotActive,
    #[error("not your turn")]
    NotYourTurn,
    #[error("agent is thinking")]
    AgentThinking,
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Lifecycle commands issued in the wrong state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game is already in progress; reset first")]
    AlreadyActive,
}

/// Failures on the agent request path. None of these end the game.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("agent responded with HTTP {0}")]
    Status(u16),
    #[error("malformed agent response: {0}")]
    Malformed(String),
    #[error("agent refused the request: {0}")]
    Rejected(String),
    #[error("agent chose an invalid move: {0}")]
    InvalidMove(#[source] PlacementError),
    #[error("agent has no move to play")]
    NoMove,
    #[error("agent worker stopped before answering")]
    Disconnected,
}

/// Malformed board grids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 10 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 10")]
    ColumnCount { row: usize, len: usize },
    #[error("unknown cell code {code} at ({row}, {col})")]
    UnknownCode { row: usize, col: usize, code: u8 },
}

/// Settings could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
