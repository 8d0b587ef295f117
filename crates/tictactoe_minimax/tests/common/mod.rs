//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use tictactoe_minimax::{Board, Move, Player, initial_state};

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        for mv in board.legal_moves() {
            stack.push(board.apply(mv).expect("legal move applies"));
        }
    }
    let mut boards: Vec<Board> = seen.into_iter().collect();
    boards.sort_by_key(|b| b.to_string());
    boards
}

/// Memoized game-tree solver, written independently of the engine.
#[derive(Default)]
pub struct Oracle {
    values: HashMap<Board, i8>,
}

impl Oracle {
    /// Minimax value from X's point of view.
    pub fn value(&mut self, board: Board) -> i8 {
        if let Some(value) = self.values.get(&board) {
            return *value;
        }
        let value = match board.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None if board.legal_moves().is_empty() => 0,
            None => {
                let children: Vec<i8> = board
                    .legal_moves()
                    .into_iter()
                    .map(|mv| self.value(board.apply(mv).expect("legal move applies")))
                    .collect();
                match board.current_player() {
                    Player::X => children.into_iter().max().expect("non-terminal"),
                    Player::O => children.into_iter().min().expect("non-terminal"),
                }
            }
        };
        self.values.insert(board, value);
        value
    }

    /// Moves achieving the oracle's value for the player to move.
    pub fn best_moves(&mut self, board: Board) -> HashSet<Move> {
        let target = self.value(board);
        board
            .legal_moves()
            .into_iter()
            .filter(|mv| self.value(board.apply(*mv).expect("legal move applies")) == target)
            .collect()
    }
}
