use gomoku_core::{Color, GameStatus, GomokuError, PositionState};

// I1: matched apply/undo restores the Board, stone_count, zobrist,
// winner_cache and interesting_set to their pre-sequence values.
#[test]
fn matched_apply_undo_restores_state() {
    let mut state = PositionState::new(15, 11).unwrap();
    let initial_zobrist = state.zobrist();
    let initial_candidates = state.enumerate_candidates();

    state.apply_move(7, 7, Color::Cross).unwrap();
    state.apply_move(8, 8, Color::Naught).unwrap();
    state.apply_move(9, 9, Color::Cross).unwrap();

    state.undo_move().unwrap();
    state.undo_move().unwrap();
    state.undo_move().unwrap();

    assert_eq!(state.zobrist(), initial_zobrist);
    assert_eq!(state.stone_count(), 0);
    assert_eq!(state.enumerate_candidates(), initial_candidates);
}

#[test]
fn illegal_move_rejected_on_occupied_cell() {
    let mut state = PositionState::new(15, 3).unwrap();
    state.apply_move(7, 7, Color::Cross).unwrap();
    let err = state.apply_move(7, 7, Color::Naught).unwrap_err();
    assert_eq!(err, GomokuError::IllegalMove);
}

#[test]
fn illegal_move_rejected_off_board() {
    let mut state = PositionState::new(15, 3).unwrap();
    let err = state.apply_move(15, 0, Color::Cross).unwrap_err();
    assert_eq!(err, GomokuError::IllegalMove);
}

#[test]
fn undo_with_empty_history_errors() {
    let mut state = PositionState::new(15, 3).unwrap();
    assert_eq!(state.undo_move().unwrap_err(), GomokuError::NothingToUndo);
}

// B4: find_best_move-adjacent heuristic - the candidate pool for an empty
// 19x19 board is the central 5x5 region.
#[test]
fn empty_board_candidates_are_central_region() {
    let state = PositionState::new(19, 3).unwrap();
    let candidates = state.enumerate_candidates();
    assert_eq!(candidates.len(), 25);
    for pos in candidates {
        assert!((7..=11).contains(&pos.x));
        assert!((7..=11).contains(&pos.y));
    }
}

#[test]
fn candidates_stay_within_interesting_radius() {
    let mut state = PositionState::new(19, 3).unwrap();
    state.apply_move(10, 10, Color::Cross).unwrap();

    let candidates = state.enumerate_candidates();
    assert!(!candidates.is_empty());
    for pos in &candidates {
        assert!(pos.chebyshev_distance(&gomoku_core::Position::new(10, 10)) <= 2);
    }
}

#[test]
fn game_status_reports_win() {
    let mut state = PositionState::new(15, 3).unwrap();
    for x in 0..5 {
        state.apply_move(x, 7, Color::Cross).unwrap();
        if x < 4 {
            state.apply_move(x, 8, Color::Naught).unwrap();
        }
    }
    assert_eq!(state.game_status(), GameStatus::Win(Color::Cross));
}

#[test]
fn game_status_in_progress_on_fresh_board() {
    let mut state = PositionState::new(15, 3).unwrap();
    assert_eq!(state.game_status(), GameStatus::InProgress);
}
