//! Pointer-to-cell mapping for mouse input.
//!
//! A click selects the cell under the pointer by integer division of the
//! coordinates by the fixed cell pitch. The pitch includes the
//! one-character separator line, so clicks on a separator resolve to the
//! cell left/above it.

use tui_tictactoe_types::{BOARD_COLS, BOARD_ROWS};

/// Map absolute terminal coordinates to a board cell.
///
/// `origin` is the top-left of the first cell's interior and `pitch_w` /
/// `pitch_h` the per-cell stride in terminal columns/rows (interior plus
/// separator). Returns `None` for coordinates outside the grid.
pub fn cell_at(
    column: u16,
    row: u16,
    origin: (u16, u16),
    pitch_w: u16,
    pitch_h: u16,
) -> Option<(i8, i8)> {
    if pitch_w == 0 || pitch_h == 0 {
        return None;
    }
    if column < origin.0 || row < origin.1 {
        return None;
    }

    // Bounds-check in u16 space; casting first would wrap far-away
    // coordinates back into range.
    let board_col = (column - origin.0) / pitch_w;
    let board_row = (row - origin.1) / pitch_h;

    if board_row >= BOARD_ROWS as u16 || board_col >= BOARD_COLS as u16 {
        return None;
    }
    Some((board_row as i8, board_col as i8))
}
