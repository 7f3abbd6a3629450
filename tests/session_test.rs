//! Tests for the game session lifecycle.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe::{
    Cue, Difficulty, GameConfig, GameMode, GameSession, MoveError, Outcome, Player, Position,
    SessionError,
};

fn pvp() -> GameSession {
    GameSession::new(
        &GameConfig::default()
            .with_player1_name("Alice")
            .with_opponent_name("Bob"),
    )
}

fn pvc(difficulty: Difficulty) -> GameSession {
    GameSession::new(
        &GameConfig::default()
            .with_mode(GameMode::PlayerVsComputer)
            .with_difficulty(difficulty),
    )
}

#[test]
fn test_pvp_alternates_and_reports_winner() {
    let mut session = pvp();
    assert_eq!(session.status(), "Alice's turn (X)");

    for (index, expected_status) in [
        (0, "Bob's turn (O)"),
        (3, "Alice's turn (X)"),
        (1, "Bob's turn (O)"),
        (4, "Alice's turn (X)"),
    ] {
        let report = session.play(index).unwrap();
        assert_eq!(report.cue(), Cue::Click);
        assert_eq!(session.status(), expected_status);
    }

    let report = session.play(2).unwrap();
    assert_eq!(report.player, Player::X);
    assert_eq!(report.position, Position::TopRight);
    assert_eq!(report.outcome, Outcome::Winner(Player::X));
    assert_eq!(report.cue(), Cue::Win);
    assert_eq!(session.status(), "Alice wins!");
    assert!(!session.is_active());
}

#[test]
fn test_draw_status() {
    let mut session = pvp();
    // X O X / O X X / O X O
    for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        session.play(index).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(session.status(), "It's a draw!");
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut session = pvp();
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }
    assert_eq!(
        session.play(8),
        Err(SessionError::GameOver(Outcome::Winner(Player::X)))
    );
}

#[test]
fn test_occupied_square_leaves_turn_unchanged() {
    let mut session = pvp();
    session.play(4).unwrap();
    assert_eq!(
        session.play(4),
        Err(SessionError::InvalidMove(MoveError::SquareOccupied(Position::Center)))
    );
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(
        session.play(11),
        Err(SessionError::InvalidMove(MoveError::OutOfBounds(11)))
    );
}

#[test]
fn test_computer_answers_and_blocks() {
    let mut session = pvc(Difficulty::Medium);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    session.play(0).unwrap();
    let first = session.computer_move(&mut rng).unwrap();
    assert_eq!(first.player, Player::O);

    // Threaten along the top row, or down the left column if O is on the top row.
    let (threat, expected) = match first.position {
        Position::TopCenter | Position::TopRight => (3, Position::BottomLeft),
        _ => (1, Position::TopRight),
    };
    session.play(threat).unwrap();
    let block = session.computer_move(&mut rng).unwrap();
    assert_eq!(block.position, expected);
}

#[test]
fn test_hard_computer_never_loses() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for opening in 0..9 {
        let mut session = pvc(Difficulty::Hard);
        session.play(opening).unwrap();
        while session.is_active() {
            if session.is_computer_turn() {
                session.computer_move(&mut rng).unwrap();
            } else {
                let index = session.board().empty_cells().next().unwrap().to_index();
                session.play(index).unwrap();
            }
        }
        assert_ne!(session.outcome(), Outcome::Winner(Player::X), "opening {}", opening);
    }
}

#[test]
fn test_no_computer_in_pvp() {
    let mut session = pvp();
    session.play(0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        session.computer_move(&mut rng),
        Err(SessionError::NoComputer(GameMode::PlayerVsPlayer))
    );
}

#[test]
fn test_toggle_mode_restarts_and_switches_names() {
    let mut session = pvp();
    session.play(4).unwrap();

    assert_eq!(session.toggle_mode(), Cue::ModeSwitch);
    assert_eq!(session.mode(), GameMode::PlayerVsComputer);
    assert_eq!(session.board().move_count(), 0);
    assert_eq!(session.name_of(Player::O), "Computer");

    session.toggle_mode();
    assert_eq!(session.name_of(Player::O), "Bob");
}

#[test]
fn test_difficulty_change_restarts_only_against_computer() {
    let mut session = pvp();
    session.play(4).unwrap();
    session.set_difficulty(Difficulty::Hard);
    assert_eq!(session.board().move_count(), 1);

    let mut session = pvc(Difficulty::Easy);
    session.play(4).unwrap();
    session.set_difficulty(Difficulty::Hard);
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.board().move_count(), 0);
}

#[test]
fn test_restart_clears_board() {
    let mut session = pvp();
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }
    session.restart();
    assert!(session.is_active());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.board().empty_cells().count(), 9);
}
