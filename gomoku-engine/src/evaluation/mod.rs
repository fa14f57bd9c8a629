mod eval_data;
mod evaluate;

pub use eval_data::{combination_bonus, Threat, NEAR_ENEMY};
pub use evaluate::{cell_score, position_score, position_score_incremental, Evaluation, WIN};
