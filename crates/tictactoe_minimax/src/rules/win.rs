//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};

/// Every line of three: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order, or `None`.
/// Boards with two complete lines are not rejected here.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            cell.mark()
        } else {
            None
        }
    })
}

/// Every player holding a complete line, without stopping at the first.
pub fn line_holders(board: &Board) -> Vec<Player> {
    let mut holders = Vec::new();
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(player) = cell.mark()
            && cell == board.get(b)
            && cell == board.get(c)
            && !holders.contains(&player)
        {
            holders.push(player);
        }
    }
    holders
}
