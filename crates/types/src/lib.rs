//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_ROWS: i8 = 3;
pub const BOARD_COLS: i8 = 3;

/// A player's mark (cross or nought)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display character for this mark
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Cell on the board (None = empty, Some = placed mark)
pub type Cell = Option<Mark>;

/// Overall game status
///
/// Exactly one of these holds at any time. `Won` and `Draw` are terminal:
/// no further moves are accepted until the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing, moves can be made
    InProgress,
    /// Game ended with a winner
    Won(Mark),
    /// Board is full with no winner
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Place the current player's mark at the cursor cell
    Place,
    Restart,
}
