//! Human-readable and JSON output for command results.

use serde::Serialize;
use tictactoe_minimax::{Board, Decision, Move, Outcome, Player, evaluate_moves};

/// Value of one legal move.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMove {
    /// The move.
    #[serde(flatten)]
    pub mv: Move,
    /// Minimax value after playing it, from X's point of view.
    pub value: i8,
    /// Whether it belongs to the optimal set.
    pub optimal: bool,
}

/// Full analysis of one board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Derived status.
    pub outcome: Outcome,
    /// Player to move, absent once the game is over.
    pub to_move: Option<Player>,
    /// Minimax value of the position, absent once the game is over.
    pub value: Option<i8>,
    /// Every legal move with its value.
    pub moves: Vec<ScoredMove>,
}

impl Analysis {
    /// Analyzes `board`.
    pub fn of(board: &Board) -> Self {
        let scored = evaluate_moves(board);
        let values = scored.iter().map(|(_, value)| *value);
        let value = match board.current_player() {
            Player::X => values.max(),
            Player::O => values.min(),
        };
        let moves = scored
            .into_iter()
            .map(|(mv, v)| ScoredMove {
                mv,
                value: v,
                optimal: value == Some(v),
            })
            .collect();
        let outcome = board.outcome();
        Self {
            board: board.to_string(),
            outcome,
            to_move: (!outcome.is_finished()).then(|| board.current_player()),
            value,
            moves,
        }
    }

    /// Renders the analysis as text.
    pub fn render(&self, board: &Board) -> String {
        let mut out = format!("{}\n\n{}\n", board.grid(), self.outcome);
        if let (Some(player), Some(value)) = (self.to_move, self.value) {
            out.push_str(&format!("{player} to move, value {value}\n"));
        }
        for scored in &self.moves {
            let marker = if scored.optimal { " *" } else { "" };
            out.push_str(&format!("  {} -> {:+}{}\n", scored.mv, scored.value, marker));
        }
        out
    }
}

/// Renders a decision as text.
pub fn render_decision(board: &Board, decision: &Decision) -> String {
    let optimal_set = decision
        .optimal_set
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let mut out = format!(
        "{}\n\n{} plays {}\n",
        board.grid(),
        board.current_player(),
        decision.chosen
    );
    out.push_str(&format!("  optimal move:  {}\n", decision.optimal));
    out.push_str(&format!("  optimal set:   {} (value {:+})\n", optimal_set, decision.value));
    out.push_str(&format!(
        "  random draw:   {:.4} (threshold {})\n",
        decision.draw, decision.randomness
    ));
    if decision.overridden {
        let note = if decision.is_optimal() {
            "random move selected (still optimal)"
        } else {
            "random move selected"
        };
        out.push_str(&format!("  {note}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_marks_optimal_moves() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let analysis = Analysis::of(&board);
        assert_eq!(analysis.to_move, Some(Player::O));
        assert_eq!(analysis.value, Some(0));
        let optimal: Vec<Move> = analysis
            .moves
            .iter()
            .filter(|m| m.optimal)
            .map(|m| m.mv)
            .collect();
        assert_eq!(optimal, vec![Move::new(0, 2)]);
        assert!(analysis.render(&board).contains("(0, 2) -> +0 *"));
    }

    #[test]
    fn test_analysis_agrees_with_optimal_set() {
        let board: Board = ".../.X./...".parse().unwrap();
        let analysis = Analysis::of(&board);
        let set = tictactoe_minimax::optimal_set(&board).unwrap();
        assert_eq!(analysis.value, Some(set.value));
        let optimal: Vec<Move> = analysis
            .moves
            .iter()
            .filter(|m| m.optimal)
            .map(|m| m.mv)
            .collect();
        assert_eq!(optimal, set.moves);
    }

    #[test]
    fn test_overridden_optimal_pick_is_noted() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let decision = Decision {
            chosen: Move::new(0, 2),
            optimal: Move::new(0, 2),
            optimal_set: vec![Move::new(0, 2)],
            value: 0,
            draw: 0.1,
            randomness: 1.0,
            overridden: true,
        };
        assert!(decision.is_optimal());
        let text = render_decision(&board, &decision);
        assert!(text.contains("random move selected (still optimal)"));
    }

    #[test]
    fn test_analysis_of_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let analysis = Analysis::of(&board);
        assert_eq!(analysis.outcome, Outcome::XWins);
        assert_eq!(analysis.to_move, None);
        assert!(analysis.moves.is_empty());
    }
}
