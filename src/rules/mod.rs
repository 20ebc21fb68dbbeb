//! Game rules for ten-by-ten Gomoku
//!
//! Free-style rules: five or more in a row wins, no forbidden moves and no
//! captures. A full board with no line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_in_row, Axis, WinningLine};
