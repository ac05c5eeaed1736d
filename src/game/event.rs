//! Values crossing the boundary between the game core and the presentation layer

use crate::board::Player;

/// Input to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A grid coordinate picked by the player. May lie off the board.
    CellSelected { row: i32, col: i32 },
    /// Throw the current game away and start a new one.
    Reset,
}

/// What the renderer needs to refresh its status display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub active_player: Player,
    /// Empty while the game runs, the result once it is over
    pub status_message: String,
    pub game_over: bool,
}
