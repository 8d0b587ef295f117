//! Perfect-play tic-tac-toe.
//!
//! A 3x3 board model with pure queries, and an exhaustive minimax search that
//! picks optimal moves with an optional, seedable chance of random play.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`], [`Move`], [`Outcome`].
//!   Boards are values; [`Board::apply`] returns a new board.
//! - **Rules**: line and draw detection shared by the board and the search.
//! - **Search**: [`max_value`]/[`min_value`], the tied [`OptimalSet`], and
//!   [`choose_move`] with an injected RNG.
//! - **Engine**: [`Engine`] bundles an [`EngineConfig`] with a seeded RNG.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_minimax::{Randomness, choose_move, initial_state};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut board = initial_state();
//! while let Some(decision) = choose_move(&board, Randomness::NONE, &mut rng) {
//!     board = board.apply(decision.chosen)?;
//! }
//! assert_eq!(board.winner(), None);
//! # Ok::<(), tictactoe_minimax::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod error;
mod notation;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

pub use action::Move;
pub use board::initial_state;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{BoardError, ConfigError, InvalidMove};
pub use position::Position;
pub use search::{
    Decision, OptimalSet, Randomness, choose_move, evaluate_moves, max_value, min_value,
    optimal_set,
};
pub use types::{Board, Cell, Outcome, Player};
