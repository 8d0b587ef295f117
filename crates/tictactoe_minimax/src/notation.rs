//! Compact text notation for boards.
//!
//! Nine cells in row-major order: `X`, `O`, and `.` for empty. Parsing also
//! accepts lowercase marks and `-`/`_` for empty, and skips `/`, `|` and
//! whitespace so rows can be separated: `XX./O../...`.

use crate::error::BoardError;
use crate::{Board, Cell, Player};
use std::str::FromStr;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for (position, character) in s.chars().enumerate() {
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                character => {
                    return Err(BoardError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            };
            if let Some(slot) = cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }

        if count != cells.len() {
            return Err(BoardError::InvalidLength {
                expected: cells.len(),
                got: count,
            });
        }

        Board::from_row_major(cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells().chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in line {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
