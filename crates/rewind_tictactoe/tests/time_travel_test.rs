//! Tests for move history and time travel.

use rewind_tictactoe::{
    Board, GameState, PlayResult, Player, Position, Rejection, Square, check_winner, status_text,
};

fn status(game: &GameState) -> String {
    status_text(&game.current_board(), game.is_x_next())
}

fn play_all(game: &mut GameState, positions: &[Position]) {
    for pos in positions {
        assert!(game.play_move(*pos).is_played(), "{:?} should be playable", pos);
    }
}

#[test]
fn test_new_game_starts_with_empty_board() {
    let game = GameState::new();
    assert_eq!(game.history(), &[Board::new()]);
    assert_eq!(game.current_move(), 0);
    assert_eq!(status(&game), "Next player: X");
}

#[test]
fn test_play_changes_exactly_one_square() {
    let mut game = GameState::new();
    play_all(&mut game, &[Position::TopLeft, Position::Center]);

    let prev = game.history()[game.current_move() - 1];
    let pos = Position::BottomRight;
    let result = game.play_move(pos);
    assert_eq!(
        result,
        PlayResult::Played {
            player: Player::X,
            position: pos
        }
    );

    let board = game.current_board();
    assert_eq!(board.get(pos), Square::Occupied(Player::X));
    for other in Position::ALL.iter().filter(|p| **p != pos) {
        assert_eq!(board.get(*other), prev.get(*other));
    }
}

#[test]
fn test_occupied_square_leaves_history_unchanged() {
    let mut game = GameState::new();
    play_all(&mut game, &[Position::Center]);
    let history = game.history().to_vec();

    assert!(!game.play_move(Position::Center).is_played());
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_jump_keeps_history() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[Position::TopLeft, Position::Center, Position::TopRight],
    );
    let history = game.history().to_vec();

    for k in [2, 0, 3, 1] {
        game.jump_to(k).unwrap();
        assert_eq!(game.current_move(), k);
        assert_eq!(game.current_board(), history[k]);
        assert_eq!(game.history(), history.as_slice());
    }
}

#[test]
fn test_play_from_earlier_move_truncates_forward_history() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );
    assert_eq!(game.len(), 5);

    game.jump_to(2).unwrap();
    play_all(&mut game, &[Position::BottomRight]);
    assert_eq!(game.len(), 4);
    assert_eq!(game.current_move(), 3);
    assert!(game.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_time_travel_scenario() {
    let mut game = GameState::new();

    play_all(&mut game, &[Position::TopLeft]);
    assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(status(&game), "Next player: O");

    play_all(&mut game, &[Position::Center]);
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(status(&game), "Next player: X");

    game.jump_to(1).unwrap();
    assert_eq!(game.current_board(), game.history()[1]);
    assert!(game.current_board().is_empty(Position::Center));
    assert_eq!(status(&game), "Next player: O");

    // Move 1 is O's turn, so the mark at 1 is O's.
    play_all(&mut game, &[Position::TopCenter]);
    assert_eq!(game.len(), 3);
    let board = game.current_board();
    assert_eq!(board.occupied(), 2);
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
    assert!(game.history().iter().all(|b| b.is_empty(Position::Center)));
}

#[test]
fn test_win_scenario_blocks_further_moves() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(check_winner(&game.current_board()), Some(Player::X));
    assert_eq!(status(&game), "Winner: X");

    let history = game.history().to_vec();
    assert_eq!(
        game.play_move(Position::MiddleRight),
        PlayResult::Rejected(Rejection::GameOver(Player::X))
    );
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_move(), 5);
}

#[test]
fn test_jump_back_after_win_reopens_play() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    game.jump_to(4).unwrap();
    assert_eq!(game.winner(), None);
    play_all(&mut game, &[Position::BottomRight]);
    assert_eq!(game.len(), 6);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_full_board_keeps_next_player_status() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.current_board().occupied(), 9);
    assert_eq!(game.winner(), None);
    assert_eq!(status(&game), "Next player: O");
}
