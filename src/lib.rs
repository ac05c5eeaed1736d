//! Two-player Gomoku on a 15x15 board
//!
//! Players alternate placing stones, Black first. The first to line up five
//! or more stones horizontally, vertically or diagonally wins; after that the
//! board is frozen until the game is restarted.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection around the last placement
//! - [`game`]: Game state and the controller that turns selections into moves
//! - [`ui`]: egui front end that feeds events to the controller
//! - [`config`]: TOML settings for the window, board drawing and logging
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Event, GameController, MoveError, Player};
//!
//! let mut game = GameController::new();
//! for col in 3..7 {
//!     game.handle(Event::CellSelected { row: 7, col }).unwrap(); // Black
//!     game.handle(Event::CellSelected { row: 0, col }).unwrap(); // White
//! }
//! let update = game.handle(Event::CellSelected { row: 7, col: 7 }).unwrap();
//! assert!(update.game_over);
//! assert_eq!(update.status_message, "Black wins!");
//!
//! // The board is locked until a reset
//! assert_eq!(
//!     game.handle(Event::CellSelected { row: 1, col: 1 }),
//!     Err(MoveError::GameAlreadyOver { winner: Player::Black })
//! );
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::AppConfig;
pub use error::{ConfigError, MoveError};
pub use game::{DisplayUpdate, Event, GameController, GameState, GameStatus};
