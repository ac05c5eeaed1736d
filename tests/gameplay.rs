//! End-to-end games driven through the controller's event interface.

use gomoku::board::TOTAL_CELLS;
use gomoku::ui::nearest_cell;
use gomoku::{Cell, DisplayUpdate, Event, GameController, GameStatus, MoveError, Player, Pos};

fn select(game: &mut GameController, row: i32, col: i32) -> Result<DisplayUpdate, MoveError> {
    game.handle(Event::CellSelected { row, col })
}

/// Plays `moves` alternately starting with whoever is to move, panicking on any rejection
fn play(game: &mut GameController, moves: &[(i32, i32)]) -> Vec<DisplayUpdate> {
    moves
        .iter()
        .map(|&(row, col)| select(game, row, col).expect("legal move"))
        .collect()
}

#[test]
fn test_fresh_game() {
    let game = GameController::new();
    let state = game.state();
    assert_eq!(state.active_player(), Player::Black);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!((0..TOTAL_CELLS).all(|i| state.cell(Pos::from_index(i)) == Cell::Empty));
}

#[test]
fn test_horizontal_five_scenario() {
    let mut game = GameController::new();
    play(
        &mut game,
        &[(7, 3), (10, 0), (7, 4), (10, 2), (7, 5), (10, 4), (7, 6), (10, 6)],
    );
    assert_eq!(game.state().status(), GameStatus::InProgress);

    let update = select(&mut game, 7, 7).unwrap();
    assert_eq!(
        update,
        DisplayUpdate {
            active_player: Player::Black,
            status_message: "Black wins!".to_string(),
            game_over: true,
        }
    );
}

#[test]
fn test_four_and_stop_is_not_a_win() {
    let mut game = GameController::new();
    let updates = play(&mut game, &[(7, 3), (10, 0), (7, 4), (10, 2), (7, 5), (10, 4), (7, 6)]);
    assert!(updates.iter().all(|u| !u.game_over));
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert_eq!(game.state().active_player(), Player::White);
}

#[test]
fn test_each_axis_wins_with_centre_last() {
    let axes: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
    for (dr, dc) in axes {
        let mut game = GameController::new();
        let (cr, cc) = (7, 7);
        // Black fills the four flanking cells, White answers on row 0 / row 14
        let flanks = [-2, -1, 1, 2];
        for (i, k) in flanks.iter().enumerate() {
            select(&mut game, cr + dr * k, cc + dc * k).unwrap();
            let white_row = if i % 2 == 0 { 0 } else { 14 };
            select(&mut game, white_row, i as i32 * 3).unwrap();
        }
        let update = select(&mut game, cr, cc).unwrap();
        assert!(update.game_over, "axis ({dr}, {dc}) should win");
        assert_eq!(game.state().winning_line().map(<[Pos]>::len), Some(5));
    }
}

#[test]
fn test_line_cut_by_edge_never_wins() {
    let mut game = GameController::new();
    // Black runs into the right edge with only four cells: (0,11)..(0,14)
    let updates = play(
        &mut game,
        &[(0, 11), (5, 0), (0, 12), (5, 2), (0, 13), (5, 4), (0, 14)],
    );
    assert!(!updates.last().unwrap().game_over);
}

#[test]
fn test_strict_alternation() {
    let mut game = GameController::new();
    let moves: Vec<(i32, i32)> = (0..15).map(|c| ((c % 3) * 4, c)).collect();
    let updates = play(&mut game, &moves);
    for (i, update) in updates.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::White } else { Player::Black };
        assert_eq!(update.active_player, expected);
        assert!(update.status_message.is_empty());
    }
}

#[test]
fn test_occupied_cells_never_change() {
    let mut game = GameController::new();
    play(&mut game, &[(4, 4), (4, 5)]);
    for _ in 0..3 {
        assert_eq!(
            select(&mut game, 4, 4),
            Err(MoveError::CellOccupied(Pos::new(4, 4)))
        );
        assert_eq!(
            select(&mut game, 4, 5),
            Err(MoveError::CellOccupied(Pos::new(4, 5)))
        );
    }
    assert_eq!(game.state().cell(Pos::new(4, 4)), Cell::Black);
    assert_eq!(game.state().cell(Pos::new(4, 5)), Cell::White);
    assert_eq!(game.state().active_player(), Player::Black);
}

#[test]
fn test_terminal_lock_emits_nothing() {
    let mut game = GameController::new();
    play(
        &mut game,
        &[(2, 2), (9, 9), (3, 3), (9, 10), (4, 4), (9, 11), (5, 5), (9, 12), (6, 6)],
    );
    assert_eq!(game.state().status(), GameStatus::Won(Player::Black));

    let before = game.state().clone();
    for i in 0..15 {
        assert!(matches!(
            select(&mut game, 14, i),
            Err(MoveError::GameAlreadyOver { winner: Player::Black })
        ));
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn test_reset_after_win() {
    let mut game = GameController::new();
    play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (5, 5), (1, 4)],
    );
    assert_eq!(game.state().status(), GameStatus::Won(Player::White));

    let update = game.handle(Event::Reset).unwrap();
    assert_eq!(update.active_player, Player::Black);
    assert!(!update.game_over);
    assert_eq!(game.state().stone_count(), 0);
    assert!(game.state().board().is_board_empty());

    // And the new game is playable
    let update = select(&mut game, 7, 7).unwrap();
    assert_eq!(update.active_player, Player::White);
}

#[test]
fn test_independent_games() {
    let mut first = GameController::new();
    let second = GameController::new();
    select(&mut first, 7, 7).unwrap();
    assert_eq!(first.state().stone_count(), 1);
    assert_eq!(second.state().stone_count(), 0);
}

#[test]
fn test_click_in_margin_is_rejected() {
    let mut game = GameController::new();
    // Far left margin of a board with 50pt padding and 40pt pitch
    let (row, col) = nearest_cell(egui::Vec2::new(5.0, 300.0), 50.0, 40.0);
    assert_eq!(
        select(&mut game, row, col),
        Err(MoveError::OutOfBounds { row, col })
    );
    assert_eq!(game.state().stone_count(), 0);

    let (row, col) = nearest_cell(egui::Vec2::new(331.0, 329.0), 50.0, 40.0);
    select(&mut game, row, col).unwrap();
    assert_eq!(game.state().cell(Pos::new(7, 7)), Cell::Black);
}
