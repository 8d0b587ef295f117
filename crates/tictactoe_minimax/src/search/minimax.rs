//! Exhaustive minimax over the full game tree.
//!
//! No pruning, no memoization: the 3x3 tree is small enough to walk in full
//! for every query. Boards are `Copy`, so each node owns its own value.

use crate::{Board, Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Every move that achieves the best attainable value for the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSet {
    /// Minimax value of the position from X's point of view.
    pub value: i8,
    /// Tied best moves, row-major.
    pub moves: Vec<Move>,
}

/// Value of `board` when X (the maximizer) is to move.
pub fn max_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }
    Position::empty_on(board)
        .map(|pos| min_value(&successor(board, Move::from(pos))))
        .max()
        .unwrap_or_else(|| no_moves(board))
}

/// Value of `board` when O (the minimizer) is to move.
pub fn min_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }
    Position::empty_on(board)
        .map(|pos| max_value(&successor(board, Move::from(pos))))
        .min()
        .unwrap_or_else(|| no_moves(board))
}

/// Minimax value of playing `mv` for whoever is to move on `board`.
fn reply_value(board: &Board, mover: Player, mv: Move) -> i8 {
    let next = successor(board, mv);
    match mover {
        Player::X => min_value(&next),
        Player::O => max_value(&next),
    }
}

/// Scores every legal move for the player to move, in row-major order.
///
/// Empty on terminal boards.
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i8)> {
    if board.is_terminal() {
        return Vec::new();
    }
    let mover = board.current_player();
    let moves = board.legal_moves();

    // Indexed collect keeps row-major order; no randomness is drawn here.
    #[cfg(feature = "parallel")]
    let scored: Vec<(Move, i8)> = {
        use rayon::prelude::*;
        moves
            .into_par_iter()
            .map(|mv| (mv, reply_value(board, mover, mv)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(Move, i8)> = moves
        .into_iter()
        .map(|mv| (mv, reply_value(board, mover, mv)))
        .collect();

    scored
}

/// The tied optimal moves for the player to move, or `None` on a terminal board.
///
/// X keeps the moves with the highest value, O the lowest. Every tied move is
/// kept, not just the first found.
#[instrument(skip(board), fields(board = %board))]
pub fn optimal_set(board: &Board) -> Option<OptimalSet> {
    if board.is_terminal() {
        return None;
    }
    let scored = evaluate_moves(board);
    let values = scored.iter().map(|(_, value)| *value);
    let best = match board.current_player() {
        Player::X => values.max(),
        Player::O => values.min(),
    }
    .unwrap_or_else(|| no_moves(board));

    let moves: Vec<Move> = scored
        .into_iter()
        .filter(|(_, value)| *value == best)
        .map(|(mv, _)| mv)
        .collect();

    debug!(value = best, tied = moves.len(), "Optimal set computed");
    Some(OptimalSet { value: best, moves })
}

/// Applies a generated move. Failure means move generation and `apply`
/// disagree, which no caller can recover from.
fn successor(board: &Board, mv: Move) -> Board {
    match board.apply(mv) {
        Ok(next) => next,
        Err(err) => {
            error!(%board, %mv, %err, "Search generated an illegal move");
            panic!("search generated illegal move {mv} on {board}: {err}");
        }
    }
}

/// A non-terminal board always has an empty cell; reaching here means
/// `is_terminal` and `legal_moves` disagree.
pub(crate) fn no_moves(board: &Board) -> ! {
    error!(%board, "Non-terminal board has no legal moves");
    panic!("non-terminal board {board} has no legal moves");
}
