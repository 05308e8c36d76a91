//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the mark added by snapshot `i` belongs to the player on turn at
/// move `i - 1`, so X places first and the players alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        (1..history.len()).all(|index| match history.move_at(index) {
            Some(mov) => mov.player == Player::for_move(index - 1),
            // Malformed steps are the single-step invariant's concern.
            None => true,
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::replay(&[Position::TopLeft]).expect("legal moves");
        let twice = game
            .current_board()
            .with_mark(Position::Center, Player::X);
        game.history.record(1, twice);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = Game::new();
        game.history
            .record(0, Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
