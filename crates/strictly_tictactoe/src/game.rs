//! Game state owner: snapshot history plus the cursor into it.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::history::History;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A tic-tac-toe game with time travel.
///
/// The cursor (`current_move`) picks which snapshot is displayed and whose
/// turn it is. Jumping back keeps later snapshots until the next move is
/// played from the earlier position.
///
/// Deserializing checks the same invariants [`Game::play`] maintains, so a
/// restored game is always one that could have been played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

/// Why a serialized game was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameStateError {
    /// The history held no snapshots at all.
    #[display("History has no snapshots")]
    EmptyHistory,

    /// The restored state breaks one or more invariants.
    #[display("Invalid game state: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameStateError {}

/// Serialized shape of a [`Game`], before validation.
#[derive(Deserialize)]
struct GameRecord {
    history: History,
    current_move: usize,
}

impl TryFrom<GameRecord> for Game {
    type Error = GameStateError;

    #[instrument(skip(record), fields(current_move = record.current_move))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            current_move: record.current_move,
        };
        TicTacToeInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Refusing to restore game");
            GameStateError::InvariantViolation(descriptions)
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a game at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Rebuilds a game by playing `positions` in order from the start.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// The snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history.snapshots()[self.current_move]
    }

    /// Player to move at the cursor: X on even moves, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        rules::calculate_winner(self.current_board())
    }

    /// Status line for the displayed board.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("Winner: {winner}"),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
            GameStatus::Draw => "No winner".to_string(),
        }
    }

    /// Empty squares of the displayed board, or none once it is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Plays the next player's mark at `pos` on the displayed board.
    ///
    /// On success every snapshot after the cursor is discarded, the new board
    /// is appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] and leaves the game untouched if the square is
    /// occupied or the displayed board is already decided.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let action = Move::new(self.next_player(), pos);
        PlayContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = rules::play(self.current_board(), pos, action.player)?;
        self.current_move = self.history.record(self.current_move, next);
        debug!(%action, current_move = self.current_move, "Move played");

        #[cfg(debug_assertions)]
        PlayContract::post(&before, self)?;

        if let GameStatus::Won(winner) = self.status() {
            info!(%winner, "Game won");
        }
        Ok(())
    }

    /// Moves the cursor to snapshot `move_index` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `move_index` is not an index into the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) {
        assert!(
            move_index < self.history.len(),
            "jump_to({move_index}) out of range: history has {} snapshots",
            self.history.len()
        );
        self.current_move = move_index;
    }

    /// Entries for the move list, one per snapshot.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                label: History::label(index),
                placed: self.history.move_at(index),
                is_current: index == self.current_move,
            })
            .collect()
    }

    /// Projects the game into what a presentation layer displays.
    pub fn view(&self) -> GameView {
        let board = self.current_board();
        GameView {
            cells: Position::ALL.map(|pos| board.get(pos).label().to_string()),
            status: self.status_text(),
            moves: self.moves(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// Button text.
    pub label: String,
    /// The move that produced this snapshot, absent for the starting board.
    pub placed: Option<Move>,
    /// Whether this snapshot is the one displayed.
    pub is_current: bool,
}

/// Everything needed to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cell labels in row-major order: `"X"`, `"O"` or empty.
    pub cells: [String; 9],
    /// Status line.
    pub status: String,
    /// Move list.
    pub moves: Vec<MoveEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status_text(), "Next player: X");
    }

    #[test]
    fn test_play_alternates_players() {
        let mut game = Game::new();
        game.play(Position::Center).expect("legal move");
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.status_text(), "Next player: O");
        game.play(Position::TopLeft).expect("legal move");
        assert_eq!(game.view().cells[0], "O");
        assert_eq!(game.view().cells[4], "X");
    }

    #[test]
    fn test_rejected_move_leaves_game_untouched() {
        let mut game = Game::new();
        game.play(Position::Center).expect("legal move");
        let before = game.clone();
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_back_keeps_future_until_next_play() {
        let mut game =
            Game::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
                .expect("legal moves");
        game.jump_to(1);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.next_player(), Player::O);

        game.jump_to(3);
        assert_eq!(game.current_board().occupied(), 3);

        game.jump_to(1);
        game.play(Position::BottomRight).expect("legal move");
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert!(game.current_board().is_empty(Position::Center));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_out_of_range_panics() {
        Game::new().jump_to(1);
    }

    #[test]
    fn test_move_entries() {
        let mut game = Game::replay(&[Position::Center]).expect("legal moves");
        game.jump_to(0);
        let moves = game.moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].label, "Go to game start");
        assert!(moves[0].is_current);
        assert_eq!(moves[0].placed, None);
        assert_eq!(moves[1].label, "Go to move #1");
        assert_eq!(moves[1].placed, Some(Move::new(Player::X, Position::Center)));
    }

    #[test]
    fn test_serde_restores_played_game() {
        let mut game = Game::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
        game.jump_to(1);
        let json = serde_json::to_string(&game).expect("serializable");
        let restored: Game = serde_json::from_str(&json).expect("valid game");
        assert_eq!(restored, game);
        assert_eq!(restored.next_player(), Player::O);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<Game>(r#"{"history":{"snapshots":[]},"current_move":5}"#)
            .expect_err("empty history");
        assert!(err.to_string().contains("History has no snapshots"));
    }

    #[test]
    fn test_deserialize_rejects_cursor_past_history() {
        let mut json = serde_json::to_value(Game::new()).expect("serializable");
        json["current_move"] = serde_json::json!(5);
        let err = serde_json::from_value::<Game>(json).expect_err("dangling cursor");
        assert!(err.to_string().contains("Current move points at a recorded snapshot"));
    }

    #[test]
    fn test_deserialize_rejects_corrupt_timeline() {
        let history = serde_json::json!({
            "snapshots": [
                Board::new(),
                Board::new()
                    .with_mark(Position::Center, Player::X)
                    .with_mark(Position::TopLeft, Player::O),
            ]
        });
        let json = serde_json::json!({ "history": history, "current_move": 1 });
        let err = serde_json::from_value::<Game>(json).expect_err("two marks in one step");
        assert!(err.to_string().contains("exactly one mark"));
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ])
        .expect("legal moves");
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.valid_moves().is_empty());
    }
}
