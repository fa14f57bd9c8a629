use gomoku_core::{Color, GomokuError, PositionState};

use crate::parallel::ParallelDriver;
use crate::search::{SearchOptions, SearchResult};

// The engine owns the root-parallel worker pool by value for its whole
// lifetime (spec.md sec 5: "the pool is created once, lives for the
// engine's lifetime"). Two front-ends get two engine instances, or share
// one by reference, rather than reaching for module-level global state.
pub struct GomokuEngine {
    driver: ParallelDriver,
}

impl GomokuEngine {
    pub fn new() -> Self {
        Self::with_pool_size(default_pool_size())
    }

    pub fn with_pool_size(pool_size: usize) -> Self {
        Self { driver: ParallelDriver::new(pool_size) }
    }

    pub fn pool_size(&self) -> usize {
        self.driver.pool_size()
    }

    // Entry point matching the core API's find_best_move (spec.md sec 6):
    // dispatches to the root-parallel driver, which falls back to the
    // sequential path itself for openings and hard-timeout searches.
    pub fn find_best_move(
        &self,
        state: &mut PositionState,
        side: Color,
        options: SearchOptions,
    ) -> Result<SearchResult, GomokuError> {
        self.driver.find_best_move(state, side, options)
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        .saturating_sub(1)
        .clamp(1, 64)
}
