//! Engine integration tests: turn alternation, legality, win/draw detection,
//! winning-line tracking, and the reset lifecycle.

use tui_tictactoe::core::{Game, MoveError};
use tui_tictactoe::types::{GameStatus, Mark, BOARD_COLS, BOARD_ROWS};

/// Apply a sequence of moves that must all be accepted.
fn play(game: &mut Game, moves: &[(i8, i8)]) {
    for &(row, col) in moves {
        game.apply_move(row, col)
            .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected: {e}"));
    }
}

fn winning_cells(game: &Game) -> Vec<(i8, i8)> {
    let mut cells = Vec::new();
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            if game.is_winning_cell(row, col) {
                cells.push((row, col));
            }
        }
    }
    cells
}

#[test]
fn fresh_game_is_in_progress_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Mark::X);
    assert!(winning_cells(&game).is_empty());
}

#[test]
fn occupied_count_tracks_applied_moves() {
    let mut game = Game::new();
    let moves = [(0, 0), (1, 1), (2, 2), (0, 1)];

    for (i, &(row, col)) in moves.iter().enumerate() {
        assert_eq!(game.board().occupied_count(), i);
        game.apply_move(row, col).unwrap();
        assert_eq!(game.move_count(), (i + 1) as u32);
    }
    assert_eq!(game.board().occupied_count(), moves.len());
}

#[test]
fn players_alternate_starting_with_x() {
    let mut game = Game::new();
    let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 1), (2, 0)];
    let mut expected = Mark::X;

    for &(row, col) in &moves {
        assert_eq!(game.current_player(), expected);
        game.apply_move(row, col).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn scenario_a_row_win_for_x() {
    // (0,0)=X (1,1)=O (0,1)=X (1,0)=O (0,2)=X -> row 0 is X,X,X
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0)]);

    assert_eq!(game.apply_move(0, 2), Ok(GameStatus::Won(Mark::X)));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(winning_cells(&game), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn scenario_b_full_board_is_a_draw() {
    // X X O / O O X / X O X - nine moves, no line.
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
        ],
    );
    assert_eq!(game.status(), GameStatus::InProgress);

    assert_eq!(game.apply_move(2, 2), Ok(GameStatus::Draw));
    assert!(game.board().is_full());
    assert!(winning_cells(&game).is_empty());
}

#[test]
fn scenario_c_occupied_cell_is_rejected_without_state_change() {
    let mut game = Game::new();
    game.apply_move(0, 0).unwrap();

    assert_eq!(game.apply_move(0, 0), Err(MoveError::CellOccupied));
    assert_eq!(game.board().get(0, 0), Some(Some(Mark::X)));
    assert_eq!(game.current_player(), Mark::O);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.move_count(), 1);
}

#[test]
fn every_line_can_win() {
    // For each of the 8 lines, let X take it while O plays elsewhere.
    let lines: [[(i8, i8); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        let mut game = Game::new();
        let mut fillers = Vec::new();
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                if !line.contains(&(row, col)) {
                    fillers.push((row, col));
                }
            }
        }

        for i in 0..3 {
            game.apply_move(line[i].0, line[i].1).unwrap();
            if i < 2 {
                game.apply_move(fillers[i].0, fillers[i].1).unwrap();
            }
        }

        assert_eq!(game.status(), GameStatus::Won(Mark::X), "line {line:?}");
        let mut expected: Vec<(i8, i8)> = line.to_vec();
        expected.sort_unstable();
        assert_eq!(winning_cells(&game), expected, "line {line:?}");
    }
}

#[test]
fn double_line_win_records_union_of_both_lines() {
    // X takes column 0 and row 2; the final move (2,0) completes both.
    //   X O .
    //   X O .
    //   X X X   <- (2,0) last
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0), // X
            (0, 1), // O
            (1, 0), // X
            (1, 1), // O
            (2, 1), // X
            (0, 2), // O
            (2, 2), // X
            (1, 2), // O
        ],
    );

    assert_eq!(game.apply_move(2, 0), Ok(GameStatus::Won(Mark::X)));
    assert_eq!(
        winning_cells(&game),
        vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn moves_in_terminal_states_are_rejected() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert!(game.status().is_terminal());

    let before_count = game.move_count();
    assert_eq!(game.apply_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.move_count(), before_count);
    assert!(!game.is_legal(2, 2));
}

#[test]
fn out_of_range_moves_are_rejected() {
    let mut game = Game::new();

    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i8::MAX, i8::MIN)] {
        assert_eq!(game.apply_move(row, col), Err(MoveError::OutOfBounds));
        assert!(!game.is_legal(row, col));
    }
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn current_player_freezes_on_terminal_move() {
    // Deliberate: the winner (or the player who filled the last cell)
    // stays the recorded current player; the status line names the winner
    // through it.
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(game.current_player(), Mark::X);

    let mut draw = Game::new();
    play(
        &mut draw,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(draw.status(), GameStatus::Draw);
    // Nine moves: the last one was X's, and X stays recorded.
    assert_eq!(draw.current_player(), Mark::X);
}

#[test]
fn reset_restores_initial_state_from_any_state() {
    // From a win
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.board().occupied_count(), 0);
    assert!(winning_cells(&game).is_empty());

    // Mid-game, and reset is idempotent
    game.apply_move(1, 1).unwrap();
    game.reset();
    game.reset();
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn o_can_win_too() {
    let mut game = Game::new();
    // X scatters, O takes the middle column.
    play(&mut game, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0)]);
    assert_eq!(game.apply_move(2, 1), Ok(GameStatus::Won(Mark::O)));
    assert_eq!(winning_cells(&game), vec![(0, 1), (1, 1), (2, 1)]);
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn snapshot_carries_winning_mask_and_status() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    let snap = game.snapshot();
    assert_eq!(snap.status, GameStatus::Won(Mark::X));
    assert_eq!(snap.current, Mark::X);
    assert!(snap.winning[0][0] && snap.winning[0][1] && snap.winning[0][2]);
    assert_eq!(
        snap.winning.iter().flatten().filter(|&&w| w).count(),
        3
    );
    assert_eq!(snap.board[1][1], Some(Mark::O));
}
