//! Board structure backed by one bitboard per colour

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos};
use crate::error::MoveError;

/// The 15x15 grid. Cells only ever go from empty to occupied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone on an empty intersection.
    ///
    /// Off-board and occupied cells are rejected, so a stone can never be
    /// overwritten or land on another cell's bit.
    pub fn place_stone(&mut self, pos: Pos, player: Player) -> Result<(), MoveError> {
        let (row, col) = (pos.row as i32, pos.col as i32);
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.stones_mut(player).set(pos);
        Ok(())
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// All occupied intersections with their owner, row-major per colour
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.black
            .iter_ones()
            .map(|p| (p, Player::Black))
            .chain(self.white.iter_ones().map(|p| (p, Player::White)))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
