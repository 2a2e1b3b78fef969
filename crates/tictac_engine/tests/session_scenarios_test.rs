//! Scenario tests for game sessions.

use tictac_engine::{GameSession, Mark, MoveError, Outcome, Position};

const WIN_SEQUENCE: [(i64, i64); 5] = [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)];

const DRAW_SEQUENCE: [(i64, i64); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

fn play(game: &mut GameSession, moves: &[(i64, i64)]) {
    for &(row, col) in moves {
        game.apply_move(row, col).expect("Valid move");
    }
}

fn pos(row: i64, col: i64) -> Position {
    Position::new(row, col).expect("Valid position")
}

#[test]
fn test_move_count_and_turn_track_accepted_moves() {
    let mut game = GameSession::new(None, None);
    for (n, &(row, col)) in DRAW_SEQUENCE[..8].iter().enumerate() {
        game.apply_move(row, col).expect("Valid move");
        let accepted = n + 1;
        assert_eq!(game.move_count(), accepted);
        let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_turn(), expected);
    }
}

#[test]
fn test_out_of_range_never_mutates() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &[(1, 1)]);
    let before = game.view();

    for row in -2..=4 {
        for col in -2..=4 {
            if (0..=2).contains(&row) && (0..=2).contains(&col) {
                continue;
            }
            assert_eq!(
                game.apply_move(row, col),
                Err(MoveError::InvalidPosition { row, col })
            );
        }
    }

    assert_eq!(game.view(), before);
}

#[test]
fn test_occupied_cell_rejected_for_either_player() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &[(0, 0), (2, 2)]);
    let before = game.view();

    assert_eq!(game.apply_move(0, 0), Err(MoveError::CellOccupied(pos(0, 0))));
    assert_eq!(game.apply_move(2, 2), Err(MoveError::CellOccupied(pos(2, 2))));
    assert_eq!(
        game.apply_move_as(Mark::O, 2, 2),
        Err(MoveError::CellOccupied(pos(2, 2)))
    );

    assert_eq!(game.view(), before);
}

#[test]
fn test_win_scenario() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &WIN_SEQUENCE);

    let line = game.outcome().winning_line().expect("Winning line");
    assert_eq!(line.positions(), [pos(0, 0), pos(1, 1), pos(2, 2)]);
    assert!(matches!(game.outcome(), Outcome::Won { winner: Mark::X, .. }));

    let view = game.view();
    assert!(view.is_game_over);
    assert!(!view.is_draw);
    assert_eq!(view.winner, Some(Mark::X));
    assert_eq!(view.winner_name.as_deref(), Some("Player X"));
    assert_eq!(view.current_player, Mark::X);
}

#[test]
fn test_draw_scenario() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &DRAW_SEQUENCE);

    assert_eq!(game.outcome(), &Outcome::Draw);
    let view = game.view();
    assert!(view.is_draw);
    assert!(view.is_game_over);
    assert_eq!(view.winner, None);
    assert_eq!(view.winner_name, None);
    assert_eq!(view.winning_line, None);
    assert_eq!(view.move_count, 9);
}

#[test]
fn test_terminal_stability_after_win() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &WIN_SEQUENCE);
    let before = game.view();

    for &(row, col) in &[(1, 0), (2, 0), (2, 1)] {
        assert_eq!(game.apply_move(row, col), Err(MoveError::GameOver));
    }

    let report = game.submit_move(None, 1, 0);
    assert!(!report.success);
    assert_eq!(report.message, "Game is already over");
    assert_eq!(report.game_state, before);
    assert_eq!(game.view(), before);
}

#[test]
fn test_terminal_stability_after_draw() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &DRAW_SEQUENCE);
    let before = game.view();

    assert_eq!(game.apply_move(0, 0), Err(MoveError::GameOver));
    assert_eq!(game.view(), before);
}

#[test]
fn test_draw_message() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &DRAW_SEQUENCE[..8]);
    let report = game.submit_move(None, 2, 2);
    assert!(report.success);
    assert_eq!(
        report.message,
        "Move successful at position (2, 2). Game ends in a draw!"
    );
}

#[test]
fn test_reset_restores_defaults_and_keeps_identity() {
    let mut game = GameSession::new(Some("Alice".to_string()), Some("Bob".to_string()));
    play(&mut game, &WIN_SEQUENCE);
    let id = game.id().clone();

    game.reset();

    assert_eq!(game.id(), &id);
    assert_eq!(game.player1_name(), "Alice");
    assert_eq!(game.player2_name(), "Bob");
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.current_turn(), Mark::X);
    assert_eq!(game.outcome(), &Outcome::InProgress);
    assert_eq!(game.view().board, [[None; 3]; 3]);

    // Playable again
    assert!(game.apply_move(0, 0).is_ok());
}

#[test]
fn test_reset_in_progress_game() {
    let mut game = GameSession::new(None, None);
    play(&mut game, &[(1, 1), (0, 0)]);
    game.reset();
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.current_turn(), Mark::X);
}

#[test]
fn test_independent_sessions() {
    let mut first = GameSession::new(None, None);
    let second = GameSession::new(None, None);
    assert_ne!(first.id(), second.id());

    let untouched = second.view();
    play(&mut first, &WIN_SEQUENCE);

    assert_eq!(second.view(), untouched);
    assert!(!second.outcome().is_over());
}
