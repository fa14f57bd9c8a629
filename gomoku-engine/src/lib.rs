mod engine;
mod evaluation;
mod parallel;
mod search;
mod time;
mod trasposition;

// Exports
pub use engine::GomokuEngine;
pub use evaluation::{cell_score, combination_bonus, position_score, position_score_incremental, Evaluation, Threat, NEAR_ENEMY, WIN};
pub use parallel::{ParallelDriver, WorkerPool};
pub use search::{Search, SearchOptions, SearchResult};
