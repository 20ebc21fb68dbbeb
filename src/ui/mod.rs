//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! controller state and forwards user commands; no rules live here.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
