//! Commands a presentation layer forwards to a [`Game`].

use super::Position;
use super::action::MoveError;
use super::game::Game;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user action against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCommand {
    /// Click on a square.
    Play(Position),
    /// Click on a move-list entry.
    JumpTo(usize),
}

/// Why a command could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// The text did not name a command.
    #[display("Unrecognized command: {:?}", _0)]
    Unrecognized(String),

    /// A jump named a snapshot that does not exist.
    #[display("No move #{} (history has {} entries)", index, len)]
    MoveOutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// The game rejected the move.
    #[display("{}", _0)]
    Rejected(MoveError),
}

impl std::error::Error for CommandError {}

/// Parses user text into a command.
///
/// Accepted forms:
/// - `play 4`, `p 4`, `4`, `center`, `top left`: play at a square
/// - `jump 2`, `j2`, `goto 2`: jump to a move
/// - `start`: jump to the starting board
impl std::str::FromStr for GameCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let lower = text.to_lowercase();
        let unrecognized = || CommandError::Unrecognized(text.to_string());

        if lower == "start" {
            return Ok(GameCommand::JumpTo(0));
        }

        for prefix in ["jump", "goto", "j"] {
            if let Some(rest) = lower.strip_prefix(prefix) {
                if let Ok(index) = rest.trim().parse::<usize>() {
                    return Ok(GameCommand::JumpTo(index));
                }
            }
        }

        let target = ["play", "p"]
            .into_iter()
            .find_map(|prefix| {
                lower
                    .strip_prefix(prefix)
                    .filter(|rest| rest.starts_with(' '))
            })
            .unwrap_or(lower.as_str());

        Position::from_label_or_number(target)
            .map(GameCommand::Play)
            .ok_or_else(unrecognized)
    }
}

impl Game {
    /// Applies a command to the state as it is now.
    ///
    /// Unlike [`Game::jump_to`], an out-of-range jump is reported rather than
    /// panicking, since the index comes from user input.
    ///
    /// # Errors
    ///
    /// - [`CommandError::Rejected`] for an illegal move.
    /// - [`CommandError::MoveOutOfRange`] for a jump past the history.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: GameCommand) -> Result<(), CommandError> {
        match command {
            GameCommand::Play(pos) => self.play(pos).map_err(|e| {
                debug!(error = %e, "Move rejected");
                CommandError::Rejected(e)
            }),
            GameCommand::JumpTo(index) => {
                let len = self.history().len();
                if index >= len {
                    debug!(index, len, "Jump rejected");
                    return Err(CommandError::MoveOutOfRange { index, len });
                }
                self.jump_to(index);
                Ok(())
            }
        }
    }

    /// Applies commands in order, each against the state left by the previous.
    ///
    /// Rejected commands are skipped, so a batch behaves like the same clicks
    /// made one at a time. Returns the rejections with their batch index.
    #[instrument(skip(self, commands))]
    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = GameCommand>,
    ) -> Vec<(usize, CommandError)> {
        commands
            .into_iter()
            .enumerate()
            .filter_map(|(i, command)| self.dispatch(command).err().map(|e| (i, e)))
            .collect()
    }
}
