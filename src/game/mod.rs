//! Game flow: state, turn handling and the events exchanged with the UI

mod controller;
mod event;
mod state;

pub use controller::GameController;
pub use event::{DisplayUpdate, Event};
pub use state::{GameState, GameStatus};
