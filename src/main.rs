//! Terminal tic-tac-toe runner (default binary).
//!
//! Synchronous, single-threaded event loop: render, block on the next
//! terminal event, map it to an engine call. The engine performs no
//! internal synchronization, so all calls into it stay on this thread.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use tui_tictactoe::core::Game;
use tui_tictactoe::input::{cell_at, handle_key_event, should_quit};
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::{GameAction, BOARD_COLS, BOARD_ROWS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = GameView::default();
    // Cell the keyboard cursor / mouse pointer is on.
    let mut cursor: (i8, i8) = (1, 1);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&game.snapshot(), Some(cursor), viewport);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply_action(&mut game, &mut cursor, action);
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse(&mut game, &view, viewport, &mut cursor, mouse);
            }
            Event::Resize(..) => {
                // Next iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}

fn apply_action(game: &mut Game, cursor: &mut (i8, i8), action: GameAction) {
    match action {
        GameAction::CursorUp => cursor.0 = (cursor.0 - 1).max(0),
        GameAction::CursorDown => cursor.0 = (cursor.0 + 1).min(BOARD_ROWS - 1),
        GameAction::CursorLeft => cursor.1 = (cursor.1 - 1).max(0),
        GameAction::CursorRight => cursor.1 = (cursor.1 + 1).min(BOARD_COLS - 1),
        GameAction::Place => submit(game, Some(*cursor)),
        GameAction::Restart => game.reset(),
    }
}

fn handle_mouse(
    game: &mut Game,
    view: &GameView,
    viewport: Viewport,
    cursor: &mut (i8, i8),
    mouse: MouseEvent,
) {
    let origin = view.grid_origin(viewport);
    let (pitch_w, pitch_h) = view.pitch();
    let cell = cell_at(mouse.column, mouse.row, origin, pitch_w, pitch_h);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(c) = cell {
                *cursor = c;
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(c) = cell {
                *cursor = c;
            }
            submit(game, cell);
        }
        _ => {}
    }
}

/// Forward a move request to the engine.
///
/// Any click or place after the game has ended starts a new game.
/// Illegal moves are a silent no-op.
fn submit(game: &mut Game, cell: Option<(i8, i8)>) {
    if game.status().is_terminal() {
        game.reset();
        return;
    }
    if let Some((row, col)) = cell {
        let _ = game.apply_move(row, col);
    }
}
