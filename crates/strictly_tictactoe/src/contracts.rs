//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the displayed board is neither won nor drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        let status = rules::calculate_winner(game.current_board());
        if status.is_decided() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
///
/// Checked in that order, so a click on an occupied square of a finished
/// game reports the game as over.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for [`Game::play`].
///
/// Preconditions:
/// - Displayed board is undecided
/// - Target square is empty
///
/// Postconditions:
/// - History stays a single-step, alternating timeline
/// - Cursor points at a snapshot
/// - History grew to exactly one past the cursor it was played from
pub struct PlayContract;

impl Contract<Game, Move> for PlayContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History length postcondition violated"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history length {} (expected {expected_len})",
                after.history().len()
            )));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant postcondition violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
