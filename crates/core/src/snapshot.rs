//! Read-only view of the game state consumed by renderers.
//!
//! The snapshot decouples rendering from the live `Game`: the front end
//! reads a snapshot per frame and never aliases the engine's board.

use tui_tictactoe_types::{Cell, GameStatus, Mark, BOARD_COLS, BOARD_ROWS};

const ROWS: usize = BOARD_ROWS as usize;
const COLS: usize = BOARD_COLS as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board contents, `board[row][col]`.
    pub board: [[Cell; COLS]; ROWS],
    /// Winning-line membership per cell; all false unless `status` is `Won`.
    pub winning: [[bool; COLS]; ROWS],
    pub status: GameStatus,
    /// Player to move; on a won game this is the winner (the engine does not
    /// switch players on a terminal move).
    pub current: Mark,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            winning: [[false; COLS]; ROWS],
            status: GameStatus::InProgress,
            current: Mark::X,
        }
    }
}
