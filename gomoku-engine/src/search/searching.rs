use std::cmp::{max, min};

use gomoku_core::{Color, GameStatus, GomokuError, Move, Position, PositionState};
use log::debug;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::evaluation::{position_score_incremental, Evaluation, WIN};
use crate::trasposition::{NodeType, TTEntry, TTable};
use crate::time::TimeManager;

use super::move_ordering::{order_candidates, Killers, PRIORITY_FLOOR, WIN_PRIORITY};

// Number of entries of the trasposition table.
const TRASPOSITION_TABLE_SIZE: usize = 1 << 20;

// The maximum depth that will ever be reached, regardless of what the
// caller asks for.
const LIMIT_DEPTH: u8 = 64;

pub struct SearchOptions {
    pub max_depth: u8,
    pub deadline_ms: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_depth: 6, deadline_ms: None }
    }
}

// The result of a completed (or deadline-interrupted) search, carrying
// every field the core API's MoveResult lists.
pub struct SearchResult {
    pub best_move: Option<Position>,
    pub score: Evaluation,
    pub depth_reached: u8,
    pub nodes_evaluated: u64,
    pub timed_out: bool,
    pub winning_move: bool,
}

pub struct Search {
    timer: TimeManager,
    max_depth: u8,
    tt: TTable,
    killers: Killers,
    node_count: u64,
}

impl Search {
    pub fn new(options: SearchOptions) -> Self {
        let max_depth = min(options.max_depth, LIMIT_DEPTH);
        Self {
            timer: TimeManager::new(options.deadline_ms),
            max_depth,
            tt: TTable::new(TRASPOSITION_TABLE_SIZE),
            killers: Killers::new(max_depth as usize),
            node_count: 0,
        }
    }

    // Entry point. `side` is the side to move at the root.
    pub fn find_best_move(&mut self, state: &mut PositionState, side: Color) -> Result<SearchResult, GomokuError> {
        if state.game_status() != GameStatus::InProgress {
            return Err(GomokuError::GameOver);
        }

        if state.stone_count() == 1 {
            let reply = random_opening_reply(state);
            return Ok(SearchResult {
                best_move: reply,
                score: Evaluation::new(0),
                depth_reached: 0,
                nodes_evaluated: 0,
                timed_out: false,
                winning_move: false,
            });
        }

        let mut best_result: Option<SearchResult> = None;
        let mut depth = 1;

        while depth <= self.max_depth && !self.timer.times_up() {
            let candidates = state.enumerate_candidates();
            if candidates.is_empty() {
                break;
            }

            let pv_move = self.tt.best_move(state.zobrist()).map(|mv| mv.pos);
            let ordered = order_candidates(state.board(), &candidates, side, depth as usize, &self.killers, pv_move);

            // If the top candidate is an immediate win, return it right away
            // without descending into minimax.
            if let Some(&(pos, score)) = ordered.first() {
                if score == WIN_PRIORITY {
                    return Ok(SearchResult {
                        best_move: Some(pos),
                        score: Evaluation::new(WIN),
                        depth_reached: depth,
                        nodes_evaluated: self.node_count,
                        timed_out: false,
                        winning_move: true,
                    });
                }
            }

            let mut alpha = Evaluation::min_val();
            let beta = Evaluation::max_val();
            let mut depth_best_move = None;
            let mut depth_best_score = Evaluation::min_val();
            let mut interrupted = false;

            for &(pos, _) in &ordered {
                if self.timer.times_up() {
                    interrupted = true;
                    break;
                }

                let score = self.eval_root_candidate(state, side, depth, alpha, beta, pos);

                if score > depth_best_score {
                    depth_best_score = score;
                    depth_best_move = Some(pos);
                }
                alpha = max(alpha, score);
            }

            // Don't adopt a depth that did not finish; keep the previous
            // completed depth's result instead.
            if interrupted || self.timer.times_up() {
                break;
            }

            debug!(
                "depth {} complete: best={:?} score={} nodes={}",
                depth, depth_best_move, depth_best_score, self.node_count
            );

            best_result = Some(SearchResult {
                best_move: depth_best_move,
                score: depth_best_score,
                depth_reached: depth,
                nodes_evaluated: self.node_count,
                timed_out: false,
                winning_move: depth_best_score.is_positive_mate(),
            });

            depth += 1;
        }

        let mut result = best_result.unwrap_or_else(|| SearchResult {
            best_move: None,
            score: Evaluation::new(0),
            depth_reached: 0,
            nodes_evaluated: self.node_count,
            timed_out: self.timer.timed_out(),
            winning_move: false,
        });
        result.timed_out = self.timer.timed_out();

        // Defensive: a search must never report "no move" while a legal
        // candidate exists.
        if result.best_move.is_none() {
            result.best_move = state.enumerate_candidates().into_iter().next();
        }

        Ok(result)
    }

    pub(crate) fn node_count(&self) -> u64 {
        self.node_count
    }

    pub(crate) fn timed_out(&self) -> bool {
        self.timer.timed_out()
    }

    // Applies a single root candidate for `side`, scores the resulting
    // position for the remaining `depth - 1` plies, and unmakes it. Shared
    // by the sequential iterative-deepening loop and the parallel root
    // driver's per-task batch, both of which evaluate one root move at a
    // time against a shared alpha floor.
    pub(crate) fn eval_root_candidate(
        &mut self,
        state: &mut PositionState,
        side: Color,
        depth: u8,
        alpha: Evaluation,
        beta: Evaluation,
        pos: Position,
    ) -> Evaluation {
        state.make_move(pos, side);
        let score = self.minimax(state, depth - 1, alpha, beta, false, side, pos);
        state.unmake_move(pos, side);
        score
    }

    fn minimax(
        &mut self,
        state: &mut PositionState,
        depth: u8,
        mut alpha: Evaluation,
        mut beta: Evaluation,
        maximizing: bool,
        root_side: Color,
        last_move: Position,
    ) -> Evaluation {
        self.node_count += 1;

        if self.node_count & 2047 == 0 && self.timer.times_up() {
            return Evaluation::new(position_score_incremental(state.board(), root_side, last_move));
        }

        let zobrist = state.zobrist();
        let mut tt_move = None;
        if let Some(value) = self.tt.get_entry(zobrist, depth, alpha, beta, &mut tt_move) {
            return value;
        }
        let pv_move = tt_move.map(|mv| mv.pos);

        if state.winner(root_side) {
            return Evaluation::new(WIN) + depth as i32;
        }
        if state.winner(!root_side) {
            return Evaluation::new(-WIN) - depth as i32;
        }

        if depth == 0 {
            return Evaluation::new(position_score_incremental(state.board(), root_side, last_move));
        }

        let side_to_move = if maximizing { root_side } else { !root_side };
        let mut candidates = state.enumerate_candidates();
        if candidates.is_empty() {
            return Evaluation::new(position_score_incremental(state.board(), root_side, last_move));
        }

        let mut ordered = order_candidates(state.board(), &candidates, side_to_move, depth as usize, &self.killers, pv_move);
        if depth > 2 {
            ordered.retain(|&(_, score)| score >= PRIORITY_FLOOR);
            if ordered.is_empty() {
                // Keep at least the top candidate so the search never
                // stalls with zero moves to try.
                candidates.truncate(1);
                ordered = order_candidates(state.board(), &candidates, side_to_move, depth as usize, &self.killers, pv_move);
            }
        }

        let mut best_score = if maximizing { Evaluation::min_val() } else { Evaluation::max_val() };
        let mut best_move = None;
        let mut cutoff = false;

        for &(pos, _) in &ordered {
            state.make_move(pos, side_to_move);
            let child = self.minimax(state, depth - 1, alpha, beta, !maximizing, root_side, pos);
            state.unmake_move(pos, side_to_move);

            if maximizing {
                if child > best_score {
                    best_score = child;
                    best_move = Some(pos);
                }
                alpha = max(alpha, best_score);
            } else {
                if child < best_score {
                    best_score = child;
                    best_move = Some(pos);
                }
                beta = min(beta, best_score);
            }

            if alpha >= beta {
                cutoff = true;
                self.killers.store(depth as usize, pos);
                break;
            }
        }

        let node_type = if cutoff {
            if maximizing { NodeType::LowerBound } else { NodeType::UpperBound }
        } else {
            NodeType::Exact
        };

        self.tt.write_entry(TTEntry::new(
            zobrist,
            depth,
            best_score,
            node_type,
            best_move.map(|pos| Move::new(pos, side_to_move)),
        ));

        best_score
    }
}

fn random_opening_reply(state: &PositionState) -> Option<Position> {
    let board = state.board();
    let size = board.size();
    let mut origin = None;
    'outer: for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            if !board.is_empty(pos) {
                origin = Some(pos);
                break 'outer;
            }
        }
    }
    let origin = origin?;

    let mut candidates = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            let dist = origin.chebyshev_distance(pos);
            if board.is_empty(pos) && (dist == 1 || dist == 2) {
                candidates.push(pos);
            }
        }
    }

    candidates.choose(&mut thread_rng()).copied()
}
