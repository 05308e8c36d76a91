//! Cursor invariant: the current move indexes an existing snapshot.

use super::Invariant;
use crate::Game;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move points at a recorded snapshot"
    }
}
