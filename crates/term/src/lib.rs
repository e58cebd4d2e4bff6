//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: `GameView` maps a game snapshot
//! into a plain framebuffer (pure, unit-testable), and `TerminalRenderer`
//! flushes framebuffers to the terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
