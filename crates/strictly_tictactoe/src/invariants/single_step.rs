//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::placed_between;
use crate::{Board, Game};

/// Invariant: history starts empty and every snapshot fills exactly one
/// previously empty square of the snapshot before it.
///
/// Marks are never overwritten or removed along the timeline.
pub struct SingleStepHistoryInvariant;

impl Invariant<Game> for SingleStepHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots
            .windows(2)
            .all(|pair| placed_between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty square"
    }
}
