//! Contract-based validation for board transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} apply {Q}.

use crate::error::InvalidMove;
use crate::invariants::{InvariantSet, InvariantViolation, Transition, TransitionInvariants};
use crate::{Board, Cell, Move};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), InvariantViolation>;
}

/// Contract for [`Board::apply`].
///
/// Preconditions:
/// - Target cell is on the board
/// - Target cell is empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Exactly one mark was placed, by the player to move
/// - Marks stay balanced
pub struct ApplyContract;

impl Contract<Board, Move> for ApplyContract {
    fn pre(board: &Board, mv: &Move) -> Result<(), InvalidMove> {
        let pos = mv.position().ok_or(InvalidMove::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })?;
        match board.get(pos) {
            Cell::Empty => Ok(()),
            Cell::Occupied(occupant) => Err(InvalidMove::Occupied {
                row: mv.row,
                col: mv.col,
                occupant,
            }),
        }
    }

    fn post(before: &Board, mv: &Move, after: &Board) -> Result<(), InvariantViolation> {
        let transition = Transition {
            before: *before,
            mv: *mv,
            after: *after,
        };
        TransitionInvariants::check_all(&transition).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}
