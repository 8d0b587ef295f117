//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every board reached
//! through [`Board::apply`](crate::Board::apply). They are testable on their
//! own and are checked after each transition in debug builds.

use crate::{Board, Move};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One application of a move: the board before, the move, the board after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Board the move was applied to.
    pub before: Board,
    /// Move that was applied.
    pub mv: Move,
    /// Resulting board.
    pub after: Board,
}

pub mod alternating_turn;
pub mod balanced_marks;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All transition invariants as a composable set.
pub type TransitionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    BalancedMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn transition(before: &str, mv: Move) -> Transition {
        let before: Board = before.parse().unwrap();
        let after = before.apply(mv).unwrap();
        Transition { before, mv, after }
    }

    #[test]
    fn test_invariant_set_holds_after_apply() {
        let t = transition("X../.O./...", Move::new(2, 2));
        assert!(TransitionInvariants::check_all(&t).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut t = transition("X../.O./...", Move::new(2, 2));
        // Overwrite X's corner and add a stray O
        t.after = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O);

        let violations = TransitionInvariants::check_all(&t).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        let t = transition(".........", Move::new(1, 1));
        assert!(TwoInvariants::check_all(&t).is_ok());
    }
}
