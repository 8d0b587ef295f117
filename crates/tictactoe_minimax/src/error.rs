//! Error types.

use crate::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move that cannot be applied to the board.
///
/// Recoverable: the caller should pick another move.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// The coordinates are outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied by {occupant}")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Mark already in the cell.
        occupant: Player,
    },
}

/// A board that cannot be built from the given input.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Notation did not contain exactly nine cells.
    #[display("Board notation has {got} cells, expected {expected}")]
    InvalidLength {
        /// Cells required.
        expected: usize,
        /// Cells found.
        got: usize,
    },

    /// Notation contained a character that is not a cell.
    #[display("Invalid cell character '{character}' at position {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Character offset in the input.
        position: usize,
    },

    /// X must have as many marks as O, or exactly one more.
    #[display("Invalid mark counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    UnbalancedMarks {
        /// Marks placed by X.
        x_count: usize,
        /// Marks placed by O.
        o_count: usize,
    },
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}
