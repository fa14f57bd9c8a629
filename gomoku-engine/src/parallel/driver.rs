use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::sync::Arc;

use gomoku_core::{Color, GameStatus, GomokuError, PositionState};
use log::debug;

use crate::evaluation::Evaluation;
use crate::search::{order_candidates, Killers, Search, SearchOptions, SearchResult, WIN_PRIORITY};

use super::pool::WorkerPool;

// Root candidates beyond this count are never dispatched in parallel, even
// if the pool has more threads free; kept small since root-parallel
// fan-out duplicates the whole TT/killer state per task.
const MAX_PARALLEL_ROOT_CANDIDATES: usize = 8;

// Root-parallel search driver: a worker pool lives for the driver's
// lifetime, and each `find_best_move` call fans the top root candidates
// out across it, one task per candidate, each with its own cloned
// PositionState and independent Search (TT + killers). Branch-level
// parallelism below the root is out of scope (spec.md sec 4.6).
pub struct ParallelDriver {
    pool: WorkerPool,
}

impl ParallelDriver {
    pub fn new(pool_size: usize) -> Self {
        Self { pool: WorkerPool::new(pool_size.clamp(1, 64)) }
    }

    pub fn pool_size(&self) -> usize {
        self.pool.size()
    }

    pub fn find_best_move(
        &self,
        state: &mut PositionState,
        side: Color,
        options: SearchOptions,
    ) -> Result<SearchResult, GomokuError> {
        // Opening moves and hard-timeout searches do not benefit from
        // parallel fan-out; delegate to the sequential path.
        if state.stone_count() < 2 || options.deadline_ms.is_some() {
            return Search::new(options).find_best_move(state, side);
        }

        if state.game_status() != GameStatus::InProgress {
            return Err(GomokuError::GameOver);
        }

        let candidates = state.enumerate_candidates();
        if candidates.is_empty() {
            return Err(GomokuError::GameOver);
        }

        let root_killers = Killers::new(0);
        let ordered = order_candidates(state.board(), &candidates, side, 0, &root_killers, None);

        if let Some(&(pos, score)) = ordered.first() {
            if score == WIN_PRIORITY {
                // A candidate already categorizes as an immediate win at
                // ordering time; no need to fan out a search for it.
                return Ok(SearchResult {
                    best_move: Some(pos),
                    score: Evaluation::new(crate::evaluation::WIN),
                    depth_reached: options.max_depth,
                    nodes_evaluated: 0,
                    timed_out: false,
                    winning_move: true,
                });
            }
        }

        if ordered.len() == 1 {
            return Search::new(options).find_best_move(state, side);
        }

        let max_depth = options.max_depth;
        let parallel_count = ordered.len().min(self.pool.size()).min(MAX_PARALLEL_ROOT_CANDIDATES);
        let (parallel_batch, remainder) = ordered.split_at(parallel_count);

        debug!(
            "parallel root fan-out: {} candidates, {} parallel, {} sequential remainder",
            ordered.len(),
            parallel_batch.len(),
            remainder.len()
        );

        // Shared, atomically updated best-score acting as a loose alpha
        // floor for tasks submitted later, plus a sticky timeout flag and
        // a monotonic node counter. None of these affect correctness, only
        // pruning aggressiveness and diagnostics.
        let best_so_far = Arc::new(AtomicI32::new(Evaluation::min_val().score()));
        let timed_out = Arc::new(AtomicBool::new(false));
        let nodes_evaluated = Arc::new(AtomicU64::new(0));

        let mut handles = Vec::with_capacity(parallel_batch.len());
        for &(pos, _) in parallel_batch {
            let mut clone = state.clone();
            let best_so_far = Arc::clone(&best_so_far);
            let timed_out = Arc::clone(&timed_out);
            let nodes_evaluated = Arc::clone(&nodes_evaluated);

            let handle = self.pool.submit(move || {
                let mut search = Search::new(SearchOptions { max_depth, deadline_ms: None });
                let alpha = Evaluation::new(best_so_far.load(Ordering::Relaxed));
                let beta = Evaluation::max_val();
                let score = search.eval_root_candidate(&mut clone, side, max_depth, alpha, beta, pos);

                publish_best(&best_so_far, score);
                nodes_evaluated.fetch_add(search.node_count(), Ordering::Relaxed);
                if search.timed_out() {
                    timed_out.store(true, Ordering::Relaxed);
                }

                (score, search.timed_out())
            });

            handles.push((pos, handle));
        }

        let mut best_move = None;
        let mut best_score = Evaluation::min_val();

        for (pos, handle) in handles {
            if let Some((score, task_timed_out)) = handle.join() {
                if task_timed_out {
                    continue;
                }
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
            }
            // A task that never replies (lost to a panic) is treated as a
            // partial failure and simply ignored; the rest of the batch
            // plus the sequential remainder still produce a result.
        }

        let mut seq_search = Search::new(SearchOptions { max_depth, deadline_ms: options.deadline_ms });
        for &(pos, _) in remainder {
            if timed_out.load(Ordering::Relaxed) {
                break;
            }
            let alpha = Evaluation::new(best_so_far.load(Ordering::Relaxed));
            let score = seq_search.eval_root_candidate(state, side, max_depth, alpha, Evaluation::max_val(), pos);
            publish_best(&best_so_far, score);
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }
        nodes_evaluated.fetch_add(seq_search.node_count(), Ordering::Relaxed);

        // Never return "no move" while a legal root candidate exists: if
        // every parallel task failed or timed out before the remainder ran,
        // fall back to the best-so-far ordering's top candidate.
        if best_move.is_none() {
            best_move = ordered.first().map(|&(p, _)| p);
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth_reached: max_depth,
            nodes_evaluated: nodes_evaluated.load(Ordering::Relaxed),
            timed_out: timed_out.load(Ordering::Relaxed),
            winning_move: best_score.is_positive_mate(),
        })
    }
}

// Monotonic publication: only ever raises the shared floor, via a
// compare-and-swap loop, matching the "single writers are not assumed"
// rule in spec.md sec 5.
fn publish_best(best_so_far: &AtomicI32, score: Evaluation) {
    let mut current = best_so_far.load(Ordering::Relaxed);
    while score.score() > current {
        match best_so_far.compare_exchange_weak(current, score.score(), Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(actual) => current = actual,
        }
    }
}
