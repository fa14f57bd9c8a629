use gomoku_core::{Color, Position, PositionState};
use gomoku_engine::{GomokuEngine, Search, SearchOptions};

fn cross_four_open_at_y4(board_size: u8, seed: u64) -> PositionState {
    let mut state = PositionState::new(board_size, seed).unwrap();
    for y in 0..4 {
        state.apply_move(7, y, Color::Cross).unwrap();
    }
    state
}

// S1: an empty 15x15 board with a single Cross stone at (7, 7) replies
// within Chebyshev distance 2, never on the stone itself.
#[test]
fn opening_reply_lands_near_first_stone() {
    let mut state = PositionState::new(15, 11).unwrap();
    state.apply_move(7, 7, Color::Cross).unwrap();

    let engine = GomokuEngine::with_pool_size(2);
    let options = SearchOptions { max_depth: 2, deadline_ms: None };
    let result = engine.find_best_move(&mut state, Color::Naught, options).unwrap();

    let pos = result.best_move.expect("a legal reply must exist");
    let origin = Position::new(7, 7);
    assert_ne!(pos, origin);
    assert!(pos.chebyshev_distance(&origin) <= 2);
    assert!(state.board().is_empty(pos));
}

// S2: Naught must block Cross's open four rather than let it complete.
#[test]
fn defender_blocks_the_open_four() {
    let mut state = cross_four_open_at_y4(19, 7);

    let engine = GomokuEngine::with_pool_size(2);
    let options = SearchOptions { max_depth: 4, deadline_ms: None };
    let result = engine.find_best_move(&mut state, Color::Naught, options).unwrap();

    assert_eq!(result.best_move, Some(Position::new(7, 4)));
    assert!(!result.winning_move);
}

// S3 / I8: Cross completes the five-in-a-row immediately, and the search
// recognizes it as a win without needing to descend into minimax.
#[test]
fn attacker_takes_the_immediate_win() {
    let mut state = cross_four_open_at_y4(19, 7);

    let engine = GomokuEngine::with_pool_size(2);
    let options = SearchOptions { max_depth: 2, deadline_ms: None };
    let result = engine.find_best_move(&mut state, Color::Cross, options).unwrap();

    assert_eq!(result.best_move, Some(Position::new(7, 4)));
    assert!(result.winning_move);
    assert!(result.score.score() >= 1_000_000);
}

// S4: on an empty 19x19 board, a depth-1 search never leaves the central
// 5x5 region the candidate generator seeds itself with.
#[test]
fn first_move_on_empty_board_stays_central() {
    let mut state = PositionState::new(19, 5).unwrap();

    let engine = GomokuEngine::with_pool_size(2);
    let options = SearchOptions { max_depth: 1, deadline_ms: None };
    let result = engine.find_best_move(&mut state, Color::Cross, options).unwrap();

    let pos = result.best_move.expect("a legal move must exist");
    assert!((7..=11).contains(&pos.x));
    assert!((7..=11).contains(&pos.y));
}

// I5: two independent sequential searches over the same state, seed and
// depth are byte-identical in their reported outcome.
#[test]
fn sequential_search_is_deterministic() {
    let build = || cross_four_open_at_y4(19, 7);
    let options = SearchOptions { max_depth: 3, deadline_ms: None };

    let mut first = build();
    let result_a = Search::new(SearchOptions { max_depth: 3, deadline_ms: None })
        .find_best_move(&mut first, Color::Naught)
        .unwrap();

    let mut second = build();
    let result_b = Search::new(options).find_best_move(&mut second, Color::Naught).unwrap();

    assert_eq!(result_a.best_move, result_b.best_move);
    assert_eq!(result_a.score, result_b.score);
    assert_eq!(result_a.depth_reached, result_b.depth_reached);
    assert_eq!(result_a.nodes_evaluated, result_b.nodes_evaluated);
}

// I6 / S6: a root-parallel search and a single-threaded search agree on the
// resulting score, even if they settle on different (score-equivalent) moves.
#[test]
fn parallel_and_sequential_search_agree_on_score() {
    let options = SearchOptions { max_depth: 4, deadline_ms: None };

    let mut seq_state = cross_four_open_at_y4(19, 7);
    let sequential = Search::new(SearchOptions { max_depth: 4, deadline_ms: None })
        .find_best_move(&mut seq_state, Color::Naught)
        .unwrap();

    let mut par_state = cross_four_open_at_y4(19, 7);
    let engine = GomokuEngine::with_pool_size(8);
    let parallel = engine.find_best_move(&mut par_state, Color::Naught, options).unwrap();

    assert_eq!(sequential.score, parallel.score);
}

// I7: across every scenario above, the returned position is always a
// currently-empty, in-bounds cell.
#[test]
fn search_never_returns_an_occupied_or_off_board_cell() {
    let scenarios: Vec<(PositionState, Color)> = vec![
        (PositionState::new(15, 11).unwrap(), Color::Cross),
        (cross_four_open_at_y4(19, 7), Color::Naught),
        (cross_four_open_at_y4(19, 7), Color::Cross),
    ];

    let engine = GomokuEngine::with_pool_size(2);
    for (mut state, side) in scenarios {
        let options = SearchOptions { max_depth: 2, deadline_ms: None };
        let result = engine.find_best_move(&mut state, side, options).unwrap();
        let pos = result.best_move.expect("a legal move must exist");

        assert!(pos.x < state.size());
        assert!(pos.y < state.size());
        assert!(state.board().is_empty(pos));
    }
}
