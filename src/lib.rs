//! Ten-by-ten Gomoku engine
//!
//! Free-style five-in-a-row on a 10x10 board, for two players sharing a
//! screen or one player against a move-selection agent:
//! - Black opens, players alternate
//! - Five or more in a row (any of the four axes) wins
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board storage and placement
//! - [`rules`]: Win detection around the last placed stone
//! - [`game`]: Session state and the controller state machine
//! - [`agent`]: The agent seam, with HTTP and in-process implementations
//! - [`config`]: Settings from `gomoku.toml` and the environment
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use gomoku::agent::MinimaxAgent;
//! use gomoku::game::{GameController, GameMode, GameStatus, PlayerNames};
//! use gomoku::Stone;
//!
//! let mut game = GameController::new(Arc::new(MinimaxAgent::default()));
//! game.start(GameMode::LocalTwoPlayer, PlayerNames::sanitized("Ada", "Bo")).unwrap();
//!
//! for col in 0..4 {
//!     game.submit_move(0, col).unwrap();
//!     game.submit_move(1, col).unwrap();
//! }
//! game.submit_move(0, 4).unwrap();
//!
//! assert_eq!(game.session().status(), GameStatus::Ended);
//! assert_eq!(game.session().winner(), Some(Stone::Black));
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use error::{AgentError, GameError, MoveRejection, PlacementError};
pub use game::{GameController, GameMode, GameSession, GameStatus, MoveOutcome, PlayerNames};
