//! Linear timeline of board snapshots.

use super::action::Move;
use super::game::GameStateError;
use super::{Board, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots; index 0 is always the empty board.
///
/// The timeline never branches. Recording a move from an earlier point
/// discards every snapshot after that point first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    snapshots: Vec<Board>,
}

/// Serialized shape of a [`History`], before validation.
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
}

impl TryFrom<HistoryRecord> for History {
    type Error = GameStateError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.snapshots.is_empty() {
            return Err(GameStateError::EmptyHistory);
        }
        Ok(Self {
            snapshots: record.snapshots,
        })
    }
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> &Board {
        // The starting board is never removed, so there is always a last one.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops every snapshot after `at` and appends `board`.
    ///
    /// Returns the index of the appended snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid snapshot index.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn record(&mut self, at: usize, board: Board) -> usize {
        assert!(
            at < self.snapshots.len(),
            "history index {at} out of range (len {})",
            self.snapshots.len()
        );
        let discarded = self.snapshots.len() - (at + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(at + 1);
        self.snapshots.push(board);
        self.snapshots.len() - 1
    }

    /// The move that produced snapshot `index` from the one before it.
    ///
    /// Returns `None` for the starting board, for an index past the end, or if
    /// the two snapshots do not differ by exactly one newly placed mark.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.snapshots.get(index - 1)?;
        let after = self.snapshots.get(index)?;
        placed_between(before, after)
    }

    /// Button label for jumping to snapshot `index`.
    pub fn label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }

    /// Labels for every snapshot, in order.
    pub fn labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(Self::label).collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the single mark placed on an empty square between two boards.
pub(crate) fn placed_between(before: &Board, after: &Board) -> Option<Move> {
    let mut placed = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if placed.is_none() => {
                placed = Some(Move::new(player, pos));
            }
            _ => return None,
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), &Board::new());
        assert!(!history.is_empty());
    }

    #[test]
    fn test_record_truncates_future() {
        let mut history = History::new();
        let a = Board::new().with_mark(Position::TopLeft, Player::X);
        let b = a.with_mark(Position::Center, Player::O);
        history.record(0, a);
        history.record(1, b);
        assert_eq!(history.len(), 3);

        let c = a.with_mark(Position::BottomRight, Player::O);
        let index = history.record(1, c);
        assert_eq!(index, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last(), &c);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_record_past_end_panics() {
        let mut history = History::new();
        history.record(1, Board::new());
    }

    #[test]
    fn test_move_at() {
        let mut history = History::new();
        let a = Board::new().with_mark(Position::Center, Player::X);
        history.record(0, a);
        assert_eq!(history.move_at(0), None);
        assert_eq!(
            history.move_at(1),
            Some(Move::new(Player::X, Position::Center))
        );
        assert_eq!(history.move_at(2), None);
    }

    #[test]
    fn test_placed_between_rejects_two_marks() {
        let before = Board::new();
        let after = before
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        assert_eq!(placed_between(&before, &after), None);
        assert_eq!(placed_between(&before, &before), None);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<History>(r#"{"snapshots":[]}"#)
            .expect_err("empty history");
        assert!(err.to_string().contains("History has no snapshots"));
    }

    #[test]
    fn test_serde_keeps_snapshots() {
        let mut history = History::new();
        history.record(0, Board::new().with_mark(Position::Center, Player::X));
        let json = serde_json::to_string(&history).expect("serializable");
        let restored: History = serde_json::from_str(&json).expect("valid history");
        assert_eq!(restored, history);
    }

    #[test]
    fn test_labels() {
        let mut history = History::new();
        history.record(0, Board::new().with_mark(Position::Center, Player::X));
        assert_eq!(history.labels(), vec!["Go to game start", "Go to move #1"]);
    }
}
