//! Balanced marks invariant: X moves first, so X leads by at most one.

use super::{Invariant, Transition};
use crate::{Board, Player};

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

impl Invariant<Transition> for BalancedMarksInvariant {
    fn holds(t: &Transition) -> bool {
        <Self as Invariant<Board>>::holds(&t.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
