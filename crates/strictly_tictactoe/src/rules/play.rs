//! Move validation and application.

use crate::action::MoveError;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Places `mover`'s mark at `pos`, returning the new board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already won or drawn.
/// - [`MoveError::SquareOccupied`] if `pos` holds a mark.
#[instrument(skip(board), fields(position = ?pos, player = ?mover))]
pub fn play(board: &Board, pos: Position, mover: Player) -> Result<Board, MoveError> {
    let status = super::calculate_winner(board);
    if status.is_decided() {
        debug!(?status, "Rejecting move on decided board");
        return Err(MoveError::GameOver(status));
    }

    if !board.is_empty(pos) {
        debug!("Rejecting move on occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }

    Ok(board.with_mark(pos, mover))
}
