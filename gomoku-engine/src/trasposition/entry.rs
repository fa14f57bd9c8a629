use gomoku_core::Move;

use crate::evaluation::Evaluation;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Copy, Clone)]
pub struct TTEntry {
    pub zobrist: u64,
    pub depth: u8,
    pub value: Evaluation,
    pub node_type: NodeType,
    pub best_move: Option<Move>,
}

impl TTEntry {
    pub fn new(zobrist: u64, depth: u8, value: Evaluation, node_type: NodeType, best_move: Option<Move>) -> Self {
        Self { zobrist, depth, value, node_type, best_move }
    }
}
