//! Pure queries and transitions over a [`Board`].
//!
//! Everything here is a function of the cells alone. Whose turn it is, whether
//! the game is over and who won are recomputed on demand rather than stored.

use crate::contracts::{ApplyContract, Contract};
use crate::error::InvalidMove;
use crate::rules;
use crate::{Board, Move, Outcome, Player, Position};
use tracing::{error, instrument};

/// Returns the starting board: nine empty cells.
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// The player with the next turn.
    ///
    /// O when X has placed more marks, otherwise X. X always goes first.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Position::empty_on(self).map(Move::from).collect()
    }

    /// Returns the board that results from the player to move marking `mv`.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfBounds`] for coordinates outside the grid and
    /// [`InvalidMove::Occupied`] when the cell already holds a mark.
    #[instrument(level = "trace", skip(self, mv), fields(board = %self, mv = %mv))]
    pub fn apply(&self, mv: Move) -> Result<Board, InvalidMove> {
        ApplyContract::pre(self, &mv)?;
        let pos = mv
            .position()
            .ok_or(InvalidMove::OutOfBounds { row: mv.row, col: mv.col })?;
        let next = self.with_mark(pos, self.current_player());

        if cfg!(debug_assertions)
            && let Err(violation) = ApplyContract::post(self, &mv, &next)
        {
            error!(
                %violation,
                before = %self,
                after = %next,
                "Board transition broke an invariant"
            );
            panic!("{violation}");
        }

        Ok(next)
    }

    /// The mark of the first complete line (rows, then columns, then
    /// diagonals), if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True once someone has won or no empty cell remains.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Game value from X's point of view: `1` X won, `-1` O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards; non-terminal boards score `0`.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derived game status.
    pub fn outcome(&self) -> Outcome {
        if rules::is_draw(self) {
            return Outcome::Draw;
        }
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None => Outcome::InProgress,
        }
    }
}
