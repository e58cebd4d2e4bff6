//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, Line};
pub use game::{Game, MoveError};
pub use snapshot::GameSnapshot;

// Convenience re-export so downstream crates only need `core`
pub use tui_tictactoe_types as types;
