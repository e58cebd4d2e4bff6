//! Input module - maps terminal events to game actions
//!
//! Keyboard events become `GameAction`s; mouse coordinates are resolved to
//! board cells by the grid geometry the renderer reports.

pub mod map;
pub mod pointer;

pub use map::{handle_key_event, should_quit};
pub use pointer::cell_at;
