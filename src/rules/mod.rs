//! Game rules for standard freestyle Gomoku
//!
//! The only rule beyond occupancy is the win condition: five or more
//! stones of one colour in an unbroken line.

pub mod win;

pub use win::{has_five_at_pos, winning_line_at, DIRECTIONS, WIN_LENGTH};
