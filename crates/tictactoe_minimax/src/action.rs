//! Moves as `(row, col)` coordinates.
//!
//! A move names a cell by coordinates and says nothing about who plays it:
//! the mover is always derived from the board it is applied to.

use super::Position;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: the `(row, col)` of the cell to mark.
///
/// Coordinates are not range-checked on construction; applying an
/// off-board move fails with [`InvalidMove::OutOfBounds`](crate::InvalidMove).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The on-board position this move targets, if any.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.col)
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.col())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_conversion() {
        assert_eq!(Move::from(Position::TopRight), Move::new(0, 2));
        assert_eq!(Move::new(2, 1).position(), Some(Position::BottomCenter));
        assert_eq!(Move::new(1, 7).position(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(1, 2).to_string(), "(1, 2)");
    }
}
