use gomoku_core::Move;

use crate::evaluation::Evaluation;

use super::{NodeType, TTEntry};

// A safe, value-typed replacement for a raw-pointer lock-free table: each
// PositionState clone owns an independent Search (and thus an independent
// TTable) under the root-parallel model, so there is no cross-thread
// mutation to race on and no need for unsafe tricks.
pub struct TTable {
    size: usize,
    slots: Vec<Option<TTEntry>>,
}

impl TTable {
    pub fn new(size: usize) -> Self {
        Self { size, slots: vec![None; size] }
    }

    fn index(&self, zobrist_key: u64) -> usize {
        zobrist_key as usize % self.size
    }

    // Returns a usable value from the table iff all of the following hold:
    // - the entry exists and the zobrist key matches
    // - the stored depth is at least the depth being queried for
    // - the score is in the appropriate bound, depending on the node type
    pub fn get_entry(&self, zobrist_key: u64, depth: u8, alpha: Evaluation, beta: Evaluation, tt_move: &mut Option<Move>) -> Option<Evaluation> {
        let entry = self.slots[self.index(zobrist_key)].as_ref()?;

        if entry.zobrist != zobrist_key {
            return None;
        }

        *tt_move = entry.best_move;

        if entry.depth < depth {
            return None;
        }

        match entry.node_type {
            NodeType::Exact => Some(entry.value),
            NodeType::LowerBound if entry.value >= beta.score() => Some(entry.value),
            NodeType::UpperBound if entry.value <= alpha.score() => Some(entry.value),
            _ => None,
        }
    }

    pub fn best_move(&self, zobrist_key: u64) -> Option<Move> {
        self.slots[self.index(zobrist_key)]
            .as_ref()
            .filter(|e| e.zobrist == zobrist_key)
            .and_then(|e| e.best_move)
    }

    // Replace when the incoming depth is at least the stored depth, or the
    // slot is empty.
    pub fn write_entry(&mut self, entry: TTEntry) {
        let idx = self.index(entry.zobrist);
        let replace = match &self.slots[idx] {
            None => true,
            Some(existing) => entry.depth >= existing.depth,
        };
        if replace {
            self.slots[idx] = Some(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Evaluation;

    // I4: a probe only returns a value when it is a correct bound for the
    // query's (depth, alpha, beta), never a stale or out-of-range one.

    #[test]
    fn exact_entry_is_always_usable_at_sufficient_depth() {
        let mut table = TTable::new(1 << 10);
        let value = Evaluation::new(42);
        table.write_entry(TTEntry::new(7, 5, value, NodeType::Exact, None));

        let mut tt_move = None;
        let hit = table.get_entry(7, 5, Evaluation::min_val(), Evaluation::max_val(), &mut tt_move);
        assert_eq!(hit, Some(value));
    }

    #[test]
    fn entry_shallower_than_query_depth_is_unusable() {
        let mut table = TTable::new(1 << 10);
        table.write_entry(TTEntry::new(7, 2, Evaluation::new(0), NodeType::Exact, None));

        let mut tt_move = None;
        let hit = table.get_entry(7, 5, Evaluation::min_val(), Evaluation::max_val(), &mut tt_move);
        assert_eq!(hit, None);
    }

    #[test]
    fn lower_bound_only_usable_when_it_already_fails_high() {
        let mut table = TTable::new(1 << 10);
        let value = Evaluation::new(100);
        table.write_entry(TTEntry::new(7, 5, value, NodeType::LowerBound, None));

        let mut tt_move = None;
        // beta = 200: stored value (100) doesn't reach beta, not a cutoff.
        let miss = table.get_entry(7, 5, Evaluation::min_val(), Evaluation::new(200), &mut tt_move);
        assert_eq!(miss, None);

        // beta = 50: stored value (100) already exceeds beta, safe to cut off.
        let hit = table.get_entry(7, 5, Evaluation::min_val(), Evaluation::new(50), &mut tt_move);
        assert_eq!(hit, Some(value));
    }

    #[test]
    fn upper_bound_only_usable_when_it_already_fails_low() {
        let mut table = TTable::new(1 << 10);
        let value = Evaluation::new(-100);
        table.write_entry(TTEntry::new(7, 5, value, NodeType::UpperBound, None));

        let mut tt_move = None;
        // alpha = -200: stored value (-100) is still above alpha, no cutoff.
        let miss = table.get_entry(7, 5, Evaluation::new(-200), Evaluation::max_val(), &mut tt_move);
        assert_eq!(miss, None);

        // alpha = -50: stored value (-100) is already below alpha, safe to use.
        let hit = table.get_entry(7, 5, Evaluation::new(-50), Evaluation::max_val(), &mut tt_move);
        assert_eq!(hit, Some(value));
    }

    #[test]
    fn mismatched_zobrist_at_the_same_slot_is_a_miss() {
        let mut table = TTable::new(1);
        table.write_entry(TTEntry::new(7, 5, Evaluation::new(1), NodeType::Exact, None));

        let mut tt_move = None;
        // Different key, same slot (capacity 1 forces a collision).
        let miss = table.get_entry(99, 5, Evaluation::min_val(), Evaluation::max_val(), &mut tt_move);
        assert_eq!(miss, None);
    }

    #[test]
    fn deeper_write_replaces_shallower_entry() {
        let mut table = TTable::new(1 << 10);
        table.write_entry(TTEntry::new(7, 2, Evaluation::new(1), NodeType::Exact, None));
        table.write_entry(TTEntry::new(7, 6, Evaluation::new(2), NodeType::Exact, None));

        let mut tt_move = None;
        let hit = table.get_entry(7, 6, Evaluation::min_val(), Evaluation::max_val(), &mut tt_move);
        assert_eq!(hit, Some(Evaluation::new(2)));
    }

    #[test]
    fn shallower_write_does_not_replace_deeper_entry() {
        let mut table = TTable::new(1 << 10);
        table.write_entry(TTEntry::new(7, 6, Evaluation::new(2), NodeType::Exact, None));
        table.write_entry(TTEntry::new(7, 2, Evaluation::new(1), NodeType::Exact, None));

        let mut tt_move = None;
        let hit = table.get_entry(7, 6, Evaluation::min_val(), Evaluation::max_val(), &mut tt_move);
        assert_eq!(hit, Some(Evaluation::new(2)));
    }
}
