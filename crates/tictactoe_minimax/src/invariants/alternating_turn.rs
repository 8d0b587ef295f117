//! Alternating turn invariant: each move places exactly one mark, the mover's.

use super::{Invariant, Transition};
use crate::Cell;

/// Invariant: the only changed cell is the move's target, and it now holds
/// the mark of the player whose turn it was.
pub struct AlternatingTurnInvariant;

impl Invariant<Transition> for AlternatingTurnInvariant {
    fn holds(t: &Transition) -> bool {
        let Some(target) = t.mv.position() else {
            return false;
        };
        let mover = Cell::Occupied(t.before.current_player());

        t.before
            .cells()
            .iter()
            .zip(t.after.cells())
            .enumerate()
            .all(|(index, (before, after))| {
                if index == target.to_index() {
                    *before == Cell::Empty && *after == mover
                } else {
                    before == after
                }
            })
    }

    fn description() -> &'static str {
        "Each move places exactly one mark, belonging to the player to move"
    }
}
