//! GUI module for the Gomoku game
//!
//! A native egui/eframe front end. It turns clicks into
//! [`Event`](crate::game::Event)s and renders the controller's state; it holds
//! no game rules of its own.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::nearest_cell;
