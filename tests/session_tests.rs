//! Integration tests for the session lifecycle

use tui_2048::core::{is_game_over, GameSession, Grid, SessionStatus};
use tui_2048::types::{Direction, GameAction, START_TILES};

fn assert_valid(grid: &Grid) {
    for &v in grid.cells() {
        assert!(v == 0 || (v >= 2 && v.is_power_of_two()), "bad tile {}", v);
    }
}

#[test]
fn test_session_lifecycle() {
    let mut session = GameSession::new(12345);
    assert_eq!(session.status(), SessionStatus::Playing);
    assert_eq!(session.grid().count_tiles(), START_TILES);

    // Cycle through every direction until the game ends.
    let cycle = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    let mut turns = 0;
    while !session.game_over() && turns < 100_000 {
        let before_tiles = session.grid().count_tiles();
        let before_score = session.score();

        let out = session.apply_move(cycle[turns % cycle.len()]);
        turns += 1;

        assert_valid(session.grid());
        assert!(session.high_score() >= session.score());
        assert_eq!(session.score(), before_score + out.score_delta);
        if out.moved {
            assert!(out.spawned.is_some());
            assert!(session.grid().count_tiles() <= before_tiles + 1);
        } else {
            assert_eq!(out.score_delta, 0);
            assert_eq!(session.grid().count_tiles(), before_tiles);
        }
    }

    assert!(session.game_over());
    assert!(is_game_over(session.grid()));

    let final_score = session.score();
    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.status(), SessionStatus::Playing);
    assert_eq!(session.score(), 0);
    assert!(session.high_score() >= final_score);
}

#[test]
fn test_game_over_only_after_a_blocked_input() {
    // Full board with no equal neighbours.
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let mut session = GameSession::from_grid(grid, 3);
    assert!(!session.game_over());
    assert_eq!(session.status(), SessionStatus::Playing);

    // Every direction is blocked; the first input flips the flag.
    let out = session.apply_move(Direction::Right);
    assert!(!out.moved);
    assert_eq!(out.status, SessionStatus::GameOver);
    assert_eq!(*session.grid(), grid);
}

#[test]
fn test_high_score_persists_across_restarts() {
    let mut session = GameSession::from_grid(
        Grid::from_rows([[8, 8, 0, 0], [4, 4, 0, 0], [0; 4], [0; 4]]).unwrap(),
        11,
    );
    session.apply_move(Direction::Left);
    assert_eq!(session.score(), 24);
    assert_eq!(session.high_score(), 24);

    session.restart();
    assert_eq!(session.high_score(), 24);

    session.restart();
    assert_eq!(session.high_score(), 24);
    assert_eq!(session.episode_id(), 2);
}

#[test]
fn test_snapshot_tracks_actions() {
    let mut session = GameSession::new(8);
    let before = session.snapshot();
    assert_eq!(before.grid, session.grid().to_rows());

    let mut moved_once = false;
    for dir in Direction::ALL {
        if session.apply_action(GameAction::Move(dir)) {
            moved_once = true;
            break;
        }
    }
    assert!(moved_once);

    let after = session.snapshot();
    assert_eq!(after.moves, 1);
    assert_ne!(after.grid, before.grid);
    assert_eq!(after.seed, 8);
}
