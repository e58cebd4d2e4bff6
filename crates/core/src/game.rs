//! Game module - turn alternation, move legality, win/draw detection
//!
//! One `Game` instance per session. All operations complete synchronously
//! and mutate nothing on rejected moves; callers on an event loop must
//! serialize access themselves.

use crate::board::Board;
use crate::snapshot::GameSnapshot;

use tui_tictactoe_types::{GameStatus, Mark, BOARD_COLS, BOARD_ROWS};

/// Reasons a move request is rejected.
///
/// Rejection is not fatal: the game state is untouched and the caller may
/// simply try another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    OutOfBounds,
    /// The target cell already holds a mark.
    CellOccupied,
    /// The game has ended; reset to play again.
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "cell is outside the board"),
            MoveError::CellOccupied => write!(f, "cell is already occupied"),
            MoveError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Mark,
    status: GameStatus,
    /// Cells belonging to the line(s) that won the game, row-major.
    /// All false unless `status` is `Won`.
    winning: [bool; (BOARD_ROWS * BOARD_COLS) as usize],
    /// Moves applied since the last reset.
    moves: u32,
}

impl Game {
    /// Create a new game; X moves first
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            status: GameStatus::InProgress,
            winning: [false; 9],
            moves: 0,
        }
    }

    /// Restore the initial state: empty board, X to move, no winner.
    ///
    /// Valid from any state and idempotent. The front end calls this when
    /// the player clicks after the game has ended.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning = [false; 9];
        self.moves = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Check whether (row, col) belongs to the winning line(s)
    pub fn is_winning_cell(&self, row: i8, col: i8) -> bool {
        if Board::is_out_of_bounds(row, col) {
            return false;
        }
        self.winning[(row as usize) * (BOARD_COLS as usize) + (col as usize)]
    }

    /// Check whether a move at (row, col) would be accepted.
    ///
    /// Pure predicate mirroring the `apply_move` preconditions; never
    /// mutates state. The front end uses this to decide whether a click is
    /// worth forwarding.
    pub fn is_legal(&self, row: i8, col: i8) -> bool {
        self.status == GameStatus::InProgress && self.board.is_vacant(row, col)
    }

    /// Place the current player's mark at (row, col).
    ///
    /// On success returns the resulting status. Win detection only looks at
    /// the lines through the played cell; when a move completes several
    /// lines at once, all of them are recorded as winning cells.
    ///
    /// The player does NOT switch when the move ends the game, so the last
    /// recorded current player of a won game is the winner; the status
    /// display relies on this.
    ///
    /// # Errors
    ///
    /// Returns a `MoveError` without mutating anything if the game is over,
    /// the coordinates are out of range, or the cell is taken.
    pub fn apply_move(&mut self, row: i8, col: i8) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if Board::is_out_of_bounds(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_vacant(row, col) {
            return Err(MoveError::CellOccupied);
        }

        self.board.set(row, col, Some(self.current));
        self.moves += 1;

        let completed = self.board.completed_lines_through(row, col, self.current);
        if !completed.is_empty() {
            self.status = GameStatus::Won(self.current);
            for line in &completed {
                for &(r, c) in line {
                    self.winning[(r as usize) * (BOARD_COLS as usize) + (c as usize)] = true;
                }
            }
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = self.current.opponent();
        }

        Ok(self.status)
    }

    /// Write the renderable state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let idx = (row as usize, col as usize);
                out.board[idx.0][idx.1] = self.board.get(row, col).unwrap_or(None);
                out.winning[idx.0][idx.1] = self.is_winning_cell(row, col);
            }
        }
        out.status = self.status;
        out.current = self.current;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
