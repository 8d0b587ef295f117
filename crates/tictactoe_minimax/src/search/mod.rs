//! Game-tree search: exhaustive minimax and randomized move selection.

pub mod decision;
pub mod minimax;
pub mod randomness;

pub use decision::{Decision, choose_move};
pub use minimax::{OptimalSet, evaluate_moves, max_value, min_value, optimal_set};
pub use randomness::Randomness;
