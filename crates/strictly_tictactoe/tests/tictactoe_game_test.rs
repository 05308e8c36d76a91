//! Scenario tests for the game state owner.

use strictly_tictactoe::{
    Board, CommandError, Game, GameCommand, GameStatus, MoveError, Player, Position,
};

#[test]
fn test_left_column_win_blocks_further_moves() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ] {
        game.play(pos).expect("legal move");
    }

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status_text(), "Winner: X");

    let before = game.clone();
    assert_eq!(
        game.play(Position::BottomRight),
        Err(MoveError::GameOver(GameStatus::Won(Player::X)))
    );
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("legal moves");

    let expected: Board = "XOX|XOO|OXX".parse().expect("valid board");
    assert_eq!(game.current_board(), &expected);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status_text(), "No winner");
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_history_grows_by_one_per_move() {
    let mut game = Game::new();
    for (n, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
        .into_iter()
        .enumerate()
    {
        game.play(pos).expect("legal move");
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.current_move(), n + 1);
    }
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut game = Game::replay(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ])
    .expect("legal moves");
    let old_future = game.history().snapshots()[2..].to_vec();

    game.jump_to(1);
    game.play(Position::BottomLeft).expect("legal move");

    assert_eq!(game.history().len(), 1 + 2);
    assert_eq!(game.current_move(), 2);
    for board in &old_future {
        assert!(!game.history().snapshots().contains(board));
    }
}

#[test]
fn test_jump_to_finished_position_and_back() {
    let mut game = Game::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .expect("legal moves");
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    game.jump_to(4);
    assert_eq!(game.status_text(), "Next player: X");
    assert!(game.play(Position::BottomRight).is_ok());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_view_projection() {
    let mut game = Game::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
    game.jump_to(1);
    let view = game.view();

    assert_eq!(view.cells[4], "X");
    assert_eq!(view.cells[0], "");
    assert_eq!(view.status, "Next player: O");
    let labels: Vec<_> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
    assert!(view.moves[1].is_current);
}

#[test]
fn test_view_serializes_to_json() {
    let game = Game::replay(&[Position::Center]).expect("legal moves");
    let json = serde_json::to_value(game.view()).expect("serializable view");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["moves"][1]["placed"]["position"], "Center");
}

#[test]
fn test_text_commands_drive_game() {
    let mut game = Game::new();
    let commands: Vec<GameCommand> = ["center", "play 0", "jump 1", "8"]
        .iter()
        .map(|s| s.parse().expect("valid command"))
        .collect();
    let rejected = game.dispatch_all(commands);

    assert!(rejected.is_empty());
    assert_eq!(game.history().len(), 3);
    assert!(game.current_board().is_empty(Position::TopLeft));
    assert!(!game.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_rejected_command_reports_move_error() {
    let mut game = Game::replay(&[Position::Center]).expect("legal moves");
    assert_eq!(
        game.dispatch(GameCommand::Play(Position::Center)),
        Err(CommandError::Rejected(MoveError::SquareOccupied(
            Position::Center
        )))
    );
}
