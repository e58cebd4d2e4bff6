//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a 3x3 grid with light-gray separator lines, red crosses, blue
//! noughts, winning cells recolored green, a preview of the current
//! player's mark at the cursor cell, and a status line under the grid.

use tui_tictactoe_core::GameSnapshot;
use tui_tictactoe_types::{GameStatus, Mark, BOARD_COLS, BOARD_ROWS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const X_COLOR: Rgb = Rgb::new(220, 70, 60);
const O_COLOR: Rgb = Rgb::new(70, 110, 230);
const WIN_COLOR: Rgb = Rgb::new(70, 200, 90);
const GRID_COLOR: Rgb = Rgb::new(140, 140, 140);

/// 5x3 glyphs drawn inside a cell's interior.
const X_GLYPH: [&str; 3] = ["╲   ╱", "  ╳  ", "╱   ╲"];
const O_GLYPH: [&str; 3] = ["╭───╮", "│   │", "╰───╯"];
const GLYPH_W: u16 = 5;
const GLYPH_H: u16 = 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tic-tac-toe board.
pub struct GameView {
    /// Interior width of one board cell in terminal columns.
    cell_w: u16,
    /// Interior height of one board cell in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 compensates for typical terminal glyph aspect ratio and
        // leaves room for the 5x3 mark glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Per-cell stride: interior plus one separator column/row.
    ///
    /// This is the divisor for pointer-to-cell mapping.
    pub fn pitch(&self) -> (u16, u16) {
        (self.cell_w + 1, self.cell_h + 1)
    }

    /// Total grid footprint: 3 cell interiors and 2 separator lines each way.
    pub fn grid_size(&self) -> (u16, u16) {
        (
            3 * self.cell_w + (BOARD_COLS as u16 - 1),
            3 * self.cell_h + (BOARD_ROWS as u16 - 1),
        )
    }

    /// Top-left terminal coordinate of the first cell's interior.
    ///
    /// Mouse handling uses this as the origin for pointer-to-cell mapping,
    /// so it must stay consistent with `render`.
    pub fn grid_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (grid_w, grid_h) = self.grid_size();
        let ox = viewport.width.saturating_sub(grid_w) / 2;
        let oy = viewport.height.saturating_sub(grid_h) / 2;
        (ox, oy)
    }

    /// Status line text shown under the grid.
    pub fn status_text(snap: &GameSnapshot) -> String {
        match snap.status {
            GameStatus::InProgress => format!("{}'s Turn", snap.current.as_char()),
            GameStatus::Draw => "It's a Draw! Click to play again.".to_string(),
            GameStatus::Won(mark) => format!("'{}' Won! Click to play again.", mark.as_char()),
        }
    }

    /// Render a snapshot (plus the hover/cursor cell) into a framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i8, i8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (ox, oy) = self.grid_origin(viewport);
        let (grid_w, grid_h) = self.grid_size();
        let (pitch_w, pitch_h) = self.pitch();

        self.draw_grid_lines(&mut fb, ox, oy, grid_w, grid_h);

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let cell_x = ox + (col as u16) * pitch_w;
                let cell_y = oy + (row as u16) * pitch_h;
                let winning = snap.winning[row as usize][col as usize];

                match snap.board[row as usize][col as usize] {
                    Some(mark) => {
                        let style = CellStyle {
                            fg: if winning { WIN_COLOR } else { mark_color(mark) },
                            bg: Rgb::new(0, 0, 0),
                            bold: winning,
                            dim: false,
                        };
                        self.draw_mark(&mut fb, cell_x, cell_y, mark, style);
                    }
                    None => {
                        // Pointer-following preview of the pending move.
                        if cursor == Some((row, col)) && snap.status == GameStatus::InProgress {
                            let style = CellStyle {
                                fg: mark_color(snap.current),
                                bg: Rgb::new(0, 0, 0),
                                bold: false,
                                dim: true,
                            };
                            self.draw_mark(&mut fb, cell_x, cell_y, snap.current, style);
                        }
                    }
                }
            }
        }

        self.draw_status(&mut fb, snap, viewport, oy + grid_h);

        fb
    }

    fn draw_grid_lines(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, grid_w: u16, grid_h: u16) {
        let style = CellStyle {
            fg: GRID_COLOR,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let (pitch_w, pitch_h) = self.pitch();

        // Two vertical and two horizontal separators, crosses at the
        // intersections.
        for k in 1..BOARD_COLS as u16 {
            let x = ox + k * pitch_w - 1;
            for y in oy..oy + grid_h {
                fb.put_char(x, y, '│', style);
            }
        }
        for k in 1..BOARD_ROWS as u16 {
            let y = oy + k * pitch_h - 1;
            for x in ox..ox + grid_w {
                fb.put_char(x, y, '─', style);
            }
            for j in 1..BOARD_COLS as u16 {
                fb.put_char(ox + j * pitch_w - 1, y, '┼', style);
            }
        }
    }

    fn draw_mark(&self, fb: &mut FrameBuffer, cell_x: u16, cell_y: u16, mark: Mark, style: CellStyle) {
        if self.cell_w < GLYPH_W || self.cell_h < GLYPH_H {
            // Cell too small for the glyph art; fall back to a single char.
            fb.put_char(
                cell_x + self.cell_w / 2,
                cell_y + self.cell_h / 2,
                mark.as_char(),
                style,
            );
            return;
        }

        let glyph = match mark {
            Mark::X => &X_GLYPH,
            Mark::O => &O_GLYPH,
        };
        let gx = cell_x + (self.cell_w - GLYPH_W) / 2;
        let gy = cell_y + (self.cell_h - GLYPH_H) / 2;
        for (dy, line) in glyph.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    fb.put_char(gx + dx as u16, gy + dy as u16, ch, style);
                }
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, grid_bottom: u16) {
        let text = Self::status_text(snap);
        let style = CellStyle {
            fg: match snap.status {
                GameStatus::InProgress => Rgb::new(220, 220, 220),
                GameStatus::Draw => Rgb::new(220, 70, 60),
                GameStatus::Won(_) => WIN_COLOR,
            },
            bg: Rgb::new(0, 0, 0),
            bold: snap.status.is_terminal(),
            dim: false,
        };
        let x = viewport.width.saturating_sub(text.chars().count() as u16) / 2;
        fb.put_str(x, grid_bottom + 1, &text, style);

        let help = "click or arrows+enter to play · r restart · q quit";
        let help_style = CellStyle {
            fg: Rgb::new(130, 130, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let hx = viewport.width.saturating_sub(help.chars().count() as u16) / 2;
        fb.put_str(hx, grid_bottom + 2, help, help_style);
    }
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}
