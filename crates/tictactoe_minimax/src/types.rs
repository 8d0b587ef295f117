//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::invariants::{BalancedMarksInvariant, Invariant};
use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character notation for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition produces a new board, so
/// hypothetical positions explored during search never alias each other.
///
/// Serialized as nine cells in row-major order; deserializing checks the
/// mark balance like [`Board::from_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnbalancedMarks`] unless X has as many marks as O
    /// or exactly one more.
    pub fn from_cells(rows: [[Cell; 3]; 3]) -> Result<Self, BoardError> {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            cells[row * 3..row * 3 + 3].copy_from_slice(line);
        }
        Self::from_row_major(cells)
    }

    /// Builds a board from nine cells in row-major order.
    pub(crate) fn from_row_major(cells: [Cell; 9]) -> Result<Self, BoardError> {
        let board = Self { cells };
        if !<BalancedMarksInvariant as Invariant<Board>>::holds(&board) {
            return Err(BoardError::UnbalancedMarks {
                x_count: board.count(Player::X),
                o_count: board.count(Player::O),
            });
        }
        Ok(board)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marks the player has placed.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with `pos` holding `player`'s mark.
    pub(crate) fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.cells[pos.to_index()] = Cell::Occupied(player);
        self
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => result.push_str(&(pos + 1).to_string()),
                    occupied => result.push(occupied.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl TryFrom<[Cell; 9]> for Board {
    type Error = BoardError;

    fn try_from(cells: [Cell; 9]) -> Result<Self, Self::Error> {
        Self::from_row_major(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of a board, always derived from its cells.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
