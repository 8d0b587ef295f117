//! Move selection on top of the optimal set.

use super::minimax::{no_moves, optimal_set};
use super::randomness::Randomness;
use crate::{Board, Move};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The move the engine picked, plus how it got there.
///
/// Everything besides `chosen` is diagnostic: it records what optimal play
/// would have done and whether the random override fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Move to play.
    pub chosen: Move,
    /// Move drawn uniformly from the optimal set.
    pub optimal: Move,
    /// All tied optimal moves.
    pub optimal_set: Vec<Move>,
    /// Minimax value of the position from X's point of view.
    pub value: i8,
    /// Uniform draw in `[0, 1)` compared against `randomness`.
    pub draw: f64,
    /// Threshold in effect.
    pub randomness: f64,
    /// True when `draw < randomness` and `chosen` came from all legal moves.
    pub overridden: bool,
}

impl Decision {
    /// True when the chosen move is one of the optimal moves, whether or not
    /// the override fired.
    pub fn is_optimal(&self) -> bool {
        self.optimal_set.contains(&self.chosen)
    }
}

/// Picks a move for the player to move on `board`.
///
/// Returns `None` on a terminal board. Otherwise draws the optimal move
/// uniformly from the tied optimal set, then draws `u` in `[0, 1)`; if
/// `u < randomness` the optimal pick is discarded for a uniform pick over all
/// legal moves (the optimal move stays eligible).
///
/// All randomness comes from `rng`, so a seeded generator makes the result
/// reproducible.
#[instrument(skip(board, randomness, rng), fields(board = %board, randomness = %randomness))]
pub fn choose_move<R: Rng>(
    board: &Board,
    randomness: Randomness,
    rng: &mut R,
) -> Option<Decision> {
    let set = optimal_set(board)?;
    let optimal = *set.moves.choose(rng).unwrap_or_else(|| no_moves(board));

    let draw: f64 = rng.random();
    let overridden = draw < randomness.value();
    let chosen = if overridden {
        *board
            .legal_moves()
            .choose(rng)
            .unwrap_or_else(|| no_moves(board))
    } else {
        optimal
    };

    info!(
        optimal = %optimal,
        draw,
        threshold = randomness.value(),
        overridden,
        chosen = %chosen,
        "Move chosen"
    );

    Some(Decision {
        chosen,
        optimal,
        optimal_set: set.moves,
        value: set.value,
        draw,
        randomness: randomness.value(),
        overridden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_terminal_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(choose_move(&board, Randomness::NONE, &mut rng), None);
    }

    #[test]
    fn test_zero_randomness_never_overrides() {
        let board: Board = "XX./.O./...".parse().unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = choose_move(&board, Randomness::NONE, &mut rng).unwrap();
            assert!(!decision.overridden);
            assert_eq!(decision.chosen, decision.optimal);
            assert_eq!(decision.chosen, Move::new(0, 2));
        }
    }

    #[test]
    fn test_full_randomness_always_overrides() {
        let board: Board = "XX./.O./...".parse().unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = choose_move(&board, Randomness::ALWAYS, &mut rng).unwrap();
            assert!(decision.overridden);
            assert!(board.legal_moves().contains(&decision.chosen));
            assert_eq!(decision.optimal, Move::new(0, 2));
        }
    }

    #[test]
    fn test_is_optimal_tracks_optimal_set() {
        let board: Board = "XX./.O./...".parse().unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = choose_move(&board, Randomness::ALWAYS, &mut rng).unwrap();
            assert_eq!(decision.is_optimal(), decision.chosen == Move::new(0, 2));
        }
    }

    #[test]
    fn test_same_seed_same_decision() {
        let board: Board = ".../.X./...".parse().unwrap();
        let randomness = Randomness::new(0.5).unwrap();
        let a = choose_move(&board, randomness, &mut StdRng::seed_from_u64(42));
        let b = choose_move(&board, randomness, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_decision_serializes_diagnostics() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let decision = choose_move(&board, Randomness::NONE, &mut rng).unwrap();
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["chosen"], serde_json::json!({ "row": 0, "col": 2 }));
        assert_eq!(json["optimal_set"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["overridden"], false);
        assert_eq!(json["randomness"], 0.0);
    }

    #[test]
    fn test_ties_are_all_reachable() {
        // O's four corner replies to a center opening are tied
        let board: Board = ".../.X./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..40 {
            let decision = choose_move(&board, Randomness::NONE, &mut rng).unwrap();
            seen.insert(decision.optimal);
        }
        assert_eq!(seen.len(), 4);
    }
}
