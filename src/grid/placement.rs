//! Straight-line word placements on a square grid
//!
//! A placement starts at (row, col) and steps one cell per letter along one
//! of four directions. Left-pointing and upward directions are omitted, so
//! every word reads forward.

use serde::{Deserialize, Serialize};

/// Step direction for a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// → (0, 1)
    Right,
    /// ↓ (1, 0)
    Down,
    /// ↘ (1, 1)
    DownRight,
    /// ↙ (1, -1)
    DownLeft,
}

/// All directions, in draw order
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::DownLeft,
];

impl Direction {
    /// (Δrow, Δcol) unit step
    #[inline]
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// A word committed (or proposed) along a straight run of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: String,
}

impl WordPlacement {
    pub fn new(row: usize, col: usize, direction: Direction, word: impl Into<String>) -> Self {
        Self {
            row,
            col,
            direction,
            word: word.into(),
        }
    }

    /// Number of letters (cells) in the placement
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell reached after `steps` steps, if it has non-negative coordinates
    fn step(&self, steps: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        let r = self.row as isize + dr * steps as isize;
        let c = self.col as isize + dc * steps as isize;
        (r >= 0 && c >= 0).then_some((r as usize, c as usize))
    }

    /// Final cell of the word, `None` if it would leave the grid's top/left
    pub fn end(&self) -> Option<(usize, usize)> {
        self.step(self.len().saturating_sub(1))
    }

    /// Check that start and end both lie within a `size`×`size` grid
    pub fn fits(&self, size: usize) -> bool {
        if self.row >= size || self.col >= size {
            return false;
        }
        match self.end() {
            Some((r, c)) => r < size && c < size,
            None => false,
        }
    }

    /// Occupied cells paired with their letters, in reading order.
    ///
    /// Only meaningful for placements that [`fits`](Self::fits) the grid.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .filter_map(move |(i, ch)| self.step(i).map(|cell| (cell, ch)))
    }
}
