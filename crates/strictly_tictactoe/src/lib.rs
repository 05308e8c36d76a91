//! Tic-tac-toe engine with snapshot history.
//!
//! A [`Game`] keeps every board it has passed through and a cursor into that
//! list. Moves are validated by pure [`rules`], jumping moves the cursor, and
//! [`Game::view`] projects the state into what a front end draws.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//! assert_eq!(game.next_player(), Player::X);
//!
//! game.jump_to(1);
//! assert_eq!(game.status_text(), "Next player: O");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod command;
mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use command::{CommandError, GameCommand};
pub use contracts::{Contract, GameUndecided, LegalMove, PlayContract, SquareIsEmpty};
pub use game::{Game, GameStateError, GameView, MoveEntry};
pub use history::History;
pub use position::Position;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
