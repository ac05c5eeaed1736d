//! Game state: board, side to move and result

use crate::board::{Board, Cell, Player, Pos};
use crate::error::MoveError;

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// Complete state of one game.
///
/// Owned by [`GameController`](super::GameController); independent instances
/// share nothing, so any number of games can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Player,
    status: GameStatus,
    history: Vec<(Pos, Player)>,
    winning_line: Option<Vec<Pos>>,
}

impl GameState {
    /// Fresh game: empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::Black,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Discard everything and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Hand the move to the other player. Has no effect once the game is won.
    pub fn toggle_active_player(&mut self) {
        if !self.status.is_over() {
            self.active = self.active.opponent();
        }
    }

    /// True iff `(row, col)` is on the board and nobody has played there.
    ///
    /// Off-board coordinates are simply not placeable, never an error.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        Pos::checked(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Contents of an on-board cell
    pub fn cell(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    /// Put `player`'s stone at `(row, col)`.
    ///
    /// Fails without touching anything if the game is over, the coordinate is
    /// off the board or the cell is taken. Turn order and win detection are
    /// the caller's business.
    pub fn place(&mut self, row: i32, col: i32, player: Player) -> Result<Pos, MoveError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(MoveError::GameAlreadyOver { winner });
        }
        let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.board.place_stone(pos, player)?;
        self.history.push((pos, player));
        Ok(pos)
    }

    /// Placements in the order they were made
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Stones forming the winning run, once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Record the result. The active player stays on the winner.
    pub(super) fn finish(&mut self, winner: Player, line: Vec<Pos>) {
        self.active = winner;
        self.status = GameStatus::Won(winner);
        self.winning_line = Some(line);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
