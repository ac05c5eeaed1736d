//! Turn handling: selection in, display update out

use tracing::{debug, info, instrument};

use super::event::{DisplayUpdate, Event};
use super::state::GameState;
use crate::error::MoveError;
use crate::rules::{has_five_at_pos, winning_line_at};

/// Drives a single game.
///
/// Every successful selection places exactly one stone and yields exactly one
/// [`DisplayUpdate`]. A rejected selection yields a [`MoveError`] and leaves
/// the game untouched; once a player has won, every selection is rejected
/// until [`Event::Reset`].
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Process one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Result<DisplayUpdate, MoveError> {
        match event {
            Event::CellSelected { row, col } => self.select_cell(row, col),
            Event::Reset => Ok(self.reset()),
        }
    }

    /// Play the active player's stone at `(row, col)`.
    pub fn select_cell(&mut self, row: i32, col: i32) -> Result<DisplayUpdate, MoveError> {
        let player = self.state.active_player();
        let pos = self
            .state
            .place(row, col, player)
            .inspect_err(|err| debug!(%err, "selection rejected"))?;

        if has_five_at_pos(self.state.board(), pos) {
            let line = winning_line_at(self.state.board(), pos).unwrap_or_else(|| vec![pos]);
            info!(%player, %pos, moves = self.state.stone_count(), "game won");
            self.state.finish(player, line);
        } else {
            self.state.toggle_active_player();
            debug!(%pos, next = %self.state.active_player(), "turn changed");
        }

        Ok(self.display())
    }

    /// Start a fresh game.
    pub fn reset(&mut self) -> DisplayUpdate {
        self.state = GameState::new();
        info!("new game");
        self.display()
    }

    /// Snapshot of what the status display should show right now
    pub fn display(&self) -> DisplayUpdate {
        let status = self.state.status();
        let status_message = status
            .winner()
            .map(|winner| format!("{winner} wins!"))
            .unwrap_or_default();
        DisplayUpdate {
            active_player: self.state.active_player(),
            status_message,
            game_over: status.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player, Pos};
    use crate::game::GameStatus;

    fn play(controller: &mut GameController, moves: &[(i32, i32)]) {
        for &(row, col) in moves {
            controller.select_cell(row, col).unwrap();
        }
    }

    #[test]
    fn test_first_move_passes_turn() {
        let mut controller = GameController::new();
        let update = controller.select_cell(7, 7).unwrap();
        assert_eq!(
            update,
            DisplayUpdate {
                active_player: Player::White,
                status_message: String::new(),
                game_over: false,
            }
        );
        assert_eq!(controller.state().cell(Pos::new(7, 7)), Cell::Black);
    }

    #[test]
    fn test_alternation() {
        let mut controller = GameController::new();
        let mut expected = Player::Black;
        for col in 0..10 {
            // Spread stones over two rows so nobody lines up five
            let row = if col % 4 < 2 { 0 } else { 2 };
            assert_eq!(controller.state().active_player(), expected);
            controller.select_cell(row, col).unwrap();
            expected = expected.opponent();
        }
        let players: Vec<Player> = controller.state().history().iter().map(|&(_, p)| p).collect();
        for (i, p) in players.iter().enumerate() {
            let want = if i % 2 == 0 { Player::Black } else { Player::White };
            assert_eq!(*p, want);
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut controller = GameController::new();
        play(
            &mut controller,
            &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3)],
        );
        let update = controller.select_cell(7, 7).unwrap();
        assert_eq!(update.status_message, "Black wins!");
        assert!(update.game_over);
        assert_eq!(update.active_player, Player::Black);
        assert_eq!(controller.state().status(), GameStatus::Won(Player::Black));
        assert_eq!(controller.state().winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_white_can_win() {
        let mut controller = GameController::new();
        play(
            &mut controller,
            &[(0, 0), (5, 5), (0, 2), (6, 6), (0, 4), (8, 8), (0, 6), (9, 9), (14, 14)],
        );
        let update = controller.select_cell(7, 7).unwrap();
        assert_eq!(update.status_message, "White wins!");
        assert_eq!(update.active_player, Player::White);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut controller = GameController::new();
        controller.select_cell(7, 7).unwrap();
        let before = controller.state().clone();

        assert_eq!(
            controller.select_cell(7, 7),
            Err(MoveError::CellOccupied(Pos::new(7, 7)))
        );
        assert_eq!(
            controller.select_cell(-1, 3),
            Err(MoveError::OutOfBounds { row: -1, col: 3 })
        );
        assert_eq!(
            controller.select_cell(3, 15),
            Err(MoveError::OutOfBounds { row: 3, col: 15 })
        );
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_terminal_lock() {
        let mut controller = GameController::new();
        play(
            &mut controller,
            &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)],
        );
        let before = controller.state().clone();
        for (row, col) in [(10, 10), (0, 4), (-5, 2), (7, 7)] {
            assert_eq!(
                controller.handle(Event::CellSelected { row, col }),
                Err(MoveError::GameAlreadyOver { winner: Player::Black })
            );
        }
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_reset_event() {
        let mut controller = GameController::new();
        play(
            &mut controller,
            &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)],
        );
        let update = controller.handle(Event::Reset).unwrap();
        assert_eq!(
            update,
            DisplayUpdate {
                active_player: Player::Black,
                status_message: String::new(),
                game_over: false,
            }
        );
        assert_eq!(controller.state(), &GameState::new());
    }

    #[test]
    fn test_display_snapshot_matches_last_update() {
        let mut controller = GameController::new();
        let update = controller.select_cell(1, 1).unwrap();
        assert_eq!(controller.display(), update);
    }
}
