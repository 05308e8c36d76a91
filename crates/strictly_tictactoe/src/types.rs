//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is at the given move index.
    ///
    /// X moves on even indices, O on odd ones.
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The mark drawn on the board for this player.
    pub fn mark(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mark())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Label shown in a cell: the mark, or an empty string.
    pub fn label(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values. Placing a mark produces a new board and leaves the
/// original untouched, which is what lets [`History`](crate::History) keep
/// every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Performs no legality checks; see [`rules::play`](crate::rules::play).
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a board from nine cell characters: `X`, `O`, or `.`/`-`/`_` for empty.
///
/// Whitespace and `|` separators are ignored, so `"XO.|.X.|..O"` and
/// `"XO. .X. ..O"` both parse.
impl std::str::FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Square> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '\n' | '\r' | '\t' | ' '))
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidChar(other)),
            })
            .collect::<Result<_, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Why a board string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid board character: {:?}", _0)]
    InvalidChar(char),

    /// The string held this many cells instead of nine.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Status of a board, as computed by [`rules::calculate_winner`](crate::rules::calculate_winner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player holds a full row, column or diagonal.
    Won(Player),
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}
