//! Board structure holding stones and the move count

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::{BoardError, PlacementError};

/// Game board
///
/// The move count is the number of occupied cells; stones are only ever
/// added through [`Board::place_stone`], so the two cannot drift apart.
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

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at raw coordinates; anything off the board reads as empty
    pub fn cell_at(&self, row: usize, col: usize) -> Stone {
        match Pos::try_new(row as i64, col as i64) {
            Some(pos) => self.get(pos),
            None => Stone::Empty,
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone on an empty in-range cell.
    ///
    /// Rejections leave the board untouched.
    pub fn place_stone(&mut self, row: usize, col: usize, stone: Stone) -> Result<Pos, PlacementError> {
        let pos = Pos::try_new(row as i64, col as i64).ok_or(PlacementError::OutOfRange {
            row: row as i64,
            col: col as i64,
        })?;
        if !self.is_empty(pos) {
            return Err(PlacementError::Occupied { row: pos.row, col: pos.col });
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return Err(PlacementError::NoStone),
        }
        Ok(pos)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Number of stones placed so far
    #[inline]
    pub fn move_count(&self) -> usize {
        (self.black.count() + self.white.count()) as usize
    }

    /// True once every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Rows of stone codes (0 empty, 1 black, 2 white), the agent wire format
    pub fn grid(&self) -> Vec<Vec<u8>> {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.get(Pos::new(row as u8, col as u8)).code())
                    .collect()
            })
            .collect()
    }

    /// Rebuild a board from rows of stone codes
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, BoardError> {
        if grid.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(grid.len()));
        }
        let mut board = Board::new();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::ColumnCount { row, len: cells.len() });
            }
            for (col, &code) in cells.iter().enumerate() {
                let stone = Stone::from_code(code).ok_or(BoardError::UnknownCode { row, col, code })?;
                let pos = Pos::new(row as u8, col as u8);
                match stone {
                    Stone::Black => board.black.set(pos),
                    Stone::White => board.white.set(pos),
                    Stone::Empty => {}
                }
            }
        }
        Ok(board)
    }

    /// Remove a stone; used by search to undo trial placements
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Set a stone on a known-empty cell; used by search
    #[inline]
    pub(crate) fn set_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }
}
