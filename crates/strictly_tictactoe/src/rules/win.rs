//! Win detection logic for tic-tac-toe.

use crate::{Board, GameStatus, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] held entirely by one
/// player, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

/// Computes the status of a board.
///
/// A completed line wins regardless of how many squares are still empty.
/// Without one, a board with any empty square is in progress and a full board
/// is a draw.
#[instrument(level = "trace", skip(board))]
pub fn calculate_winner(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if super::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(calculate_winner(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX|...|...".parse().expect("valid board");
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O..|.O.|..O".parse().expect("valid board");
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..X|.X.|X..".parse().expect("valid board");
        assert_eq!(calculate_winner(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_winner_middle_column() {
        let board: Board = "XO.|XO.|.O.".parse().expect("valid board");
        assert_eq!(calculate_winner(&board), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.|...|...".parse().expect("valid board");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable in a legal game; pins the scan order.
        let board: Board = "XXX|...|OOO".parse().expect("valid board");
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
