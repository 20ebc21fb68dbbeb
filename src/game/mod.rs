//! Game sessions and the controller that runs them

mod controller;
mod session;


pub use controller::{GameController, MoveOutcome};
pub use session::{format_clock, GameMode, GameSession, GameStatus, PlayerNames};
