//! Board module - manages the game grid
//!
//! The board is a 3x3 grid where each cell is empty or holds a player's mark.
//! Uses a flat array for cheap copies and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..2 (top to bottom) and
//! col ranges 0..2 (left to right).

use arrayvec::ArrayVec;

use tui_tictactoe_types::{Cell, Mark, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS * BOARD_COLS) as usize;

/// The three (row, col) coordinates of a row, column, or diagonal
pub type Line = [(i8, i8); 3];

/// The game board - 3 rows x 3 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS || col < 0 || col >= BOARD_COLS {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// Check if position is playable (within bounds and empty)
    pub fn is_vacant(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if the board has no empty cell left
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of cells holding a mark
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The lines that pass through (row, col): its row, its column, and any
    /// diagonal it sits on.
    ///
    /// A move can only complete a line through the cell it occupies, so win
    /// detection never needs to rescan the other lines.
    fn lines_through(row: i8, col: i8) -> ArrayVec<Line, 4> {
        let mut lines = ArrayVec::new();
        lines.push([(row, 0), (row, 1), (row, 2)]);
        lines.push([(0, col), (1, col), (2, col)]);
        if row == col {
            lines.push([(0, 0), (1, 1), (2, 2)]);
        }
        if row + col == 2 {
            lines.push([(0, 2), (1, 1), (2, 0)]);
        }
        lines
    }

    /// All lines through (row, col) whose three cells hold `mark`.
    ///
    /// A single move can complete up to two lines at once (e.g. a row plus a
    /// diagonal), so the result carries every completed line, not just the
    /// first one found.
    pub fn completed_lines_through(&self, row: i8, col: i8, mark: Mark) -> ArrayVec<Line, 4> {
        Self::lines_through(row, col)
            .into_iter()
            .filter(|line| {
                line.iter()
                    .all(|&(r, c)| self.get(r, c) == Some(Some(mark)))
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 2), Some(2));
        assert_eq!(Board::index(1, 0), Some(3));
        assert_eq!(Board::index(2, 2), Some(8));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 3), None);
        assert_eq!(Board::index(3, 0), None);
    }

    #[test]
    fn test_board_set_and_get() {
        let mut board = Board::new();

        assert!(board.set(1, 2, Some(Mark::X)));
        assert_eq!(board.get(1, 2), Some(Some(Mark::X)));

        // Clear the cell again
        assert!(board.set(1, 2, None));
        assert_eq!(board.get(1, 2), Some(None));

        // Out of bounds
        assert!(!board.set(3, 0, Some(Mark::O)));
        assert_eq!(board.get(0, -1), None);
    }

    #[test]
    fn test_board_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                board.set(row, col, Some(Mark::X));
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_lines_through_center_includes_both_diagonals() {
        let lines = Board::lines_through(1, 1);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_lines_through_edge_has_no_diagonal() {
        let lines = Board::lines_through(0, 1);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_completed_row() {
        let mut board = Board::new();
        board.set(2, 0, Some(Mark::O));
        board.set(2, 1, Some(Mark::O));
        board.set(2, 2, Some(Mark::O));

        let lines = board.completed_lines_through(2, 1, Mark::O);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], [(2, 0), (2, 1), (2, 2)]);

        // The other player sees nothing
        assert!(board.completed_lines_through(2, 1, Mark::X).is_empty());
    }

    #[test]
    fn test_completed_anti_diagonal() {
        let mut board = Board::new();
        board.set(0, 2, Some(Mark::X));
        board.set(1, 1, Some(Mark::X));
        board.set(2, 0, Some(Mark::X));

        let lines = board.completed_lines_through(2, 0, Mark::X);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], [(0, 2), (1, 1), (2, 0)]);
    }
}
