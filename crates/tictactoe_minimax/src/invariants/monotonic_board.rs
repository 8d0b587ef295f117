//! Monotonic board invariant: cells never change once marked.

use super::{Invariant, Transition};
use crate::Cell;

/// Invariant: every cell occupied before a move is unchanged after it.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(t: &Transition) -> bool {
        t.before
            .cells()
            .iter()
            .zip(t.after.cells())
            .all(|(before, after)| *before == Cell::Empty || before == after)
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
