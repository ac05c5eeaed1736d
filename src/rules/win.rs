//! Five-in-a-row detection around the most recent placement
//!
//! Only the four lines through the placed stone are scanned, so a check
//! costs at most 4 directions x 8 neighbours no matter how full the board is.
//! Overlines (six or more) count as a win.

use crate::board::{Board, Cell, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count stones matching `cell` walking from `pos` along `(dr, dc)`,
/// excluding `pos` itself and looking at most `limit` steps.
#[inline]
fn run_length(board: &Board, pos: Pos, cell: Cell, (dr, dc): (i32, i32), limit: usize) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (pos.row as i32 + dr, pos.col as i32 + dc);
    while count < limit {
        match Pos::checked(r, c) {
            Some(next) if board.get(next) == cell => {
                count += 1;
                r += dr;
                c += dc;
            }
            _ => break,
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Returns false for an empty cell.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let cell = board.get(pos);
    if cell == Cell::Empty {
        return false;
    }
    let reach = WIN_LENGTH - 1;
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, pos, cell, (dr, dc), reach);
        let backward = run_length(board, pos, cell, (-dr, -dc), reach);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`, if there is one.
///
/// The whole contiguous run is returned in board order, so an overline
/// yields all of its stones.
pub fn winning_line_at(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let cell = board.get(pos);
    if cell == Cell::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let backward = run_length(board, pos, cell, (-dr, -dc), usize::MAX);
        let forward = run_length(board, pos, cell, (dr, dc), usize::MAX);
        if 1 + backward + forward < WIN_LENGTH {
            continue;
        }

        let start = (
            pos.row as i32 - dr * backward as i32,
            pos.col as i32 - dc * backward as i32,
        );
        let line = (0..=(backward + forward) as i32)
            .filter_map(|i| Pos::checked(start.0 + dr * i, start.1 + dc * i))
            .collect();
        return Some(line);
    }

    None
}
