use gomoku_core::{Board, Color, Position, DIRECTIONS};

pub type MoveScore = i32;

// Categorical scale used only for ordering, deliberately distinct from the
// Evaluator's score table (which runs an order of magnitude higher per
// category): this is a cheap estimate of "how dangerous would placing a
// stone here be", not a real evaluation.
const FIVE_CATEGORY: MoveScore = 100_000;
const FOUR_CATEGORY: MoveScore = 10_000;
const THREE_CATEGORY: MoveScore = 1_000;
const TWO_CATEGORY: MoveScore = 100;

// Sentinel priorities, strictly above any real fast-threat-estimate score
// (which tops out at FIVE_CATEGORY). Distinct so callers can tell "this
// candidate wins outright" apart from "this candidate merely blocks one".
// The transposition table's best-move hint (the PV move from a previous,
// shallower pass) ranks below those two exact tactical certainties but
// above killers, mirroring the teacher's own TT-move-first `order_moves`
// ranking (there the TT move outranks everything, since chess has no
// cheaper exact-win check to rank above it).
pub const WIN_PRIORITY: MoveScore = MoveScore::MAX;
const BLOCK_PRIORITY: MoveScore = MoveScore::MAX - 1;
const PV_PRIORITY: MoveScore = MoveScore::MAX - 2;
const KILLER_PRIORITY: MoveScore = MoveScore::MAX - 3;

pub const PRIORITY_FLOOR: MoveScore = 10;
const K_KILL: usize = 2;

// Per-ply (indexed by remaining search depth) bounded list of moves that
// recently caused a beta cutoff at that ply.
pub struct Killers {
    table: Vec<[Option<Position>; K_KILL]>,
}

impl Killers {
    pub fn new(max_depth: usize) -> Self {
        Self { table: vec![[None; K_KILL]; max_depth + 2] }
    }

    pub fn store(&mut self, depth: usize, pos: Position) {
        let slot = &mut self.table[depth];
        if slot.contains(&Some(pos)) {
            return;
        }
        slot[1] = slot[0];
        slot[0] = Some(pos);
    }

    pub fn is_killer(&self, depth: usize, pos: Position) -> bool {
        self.table[depth].contains(&Some(pos))
    }
}

// For a candidate pos and side, counts extended runs in the 4 directions as
// if pos were filled, and returns the maximum categorical score. Not a true
// evaluation; used only for move ordering.
pub fn fast_threat_estimate(board: &Board, pos: Position, side: Color) -> MoveScore {
    DIRECTIONS
        .iter()
        .map(|&dir| match board.line_count(pos, dir, side) {
            5 => FIVE_CATEGORY,
            4 => FOUR_CATEGORY,
            3 => THREE_CATEGORY,
            2 => TWO_CATEGORY,
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

fn center_bias(size: u8, pos: Position) -> MoveScore {
    let center = size as i32 / 2;
    let dist = (pos.x as i32 - center).abs().max((pos.y as i32 - center).abs());
    (size as i32 - dist) as MoveScore
}

fn priority(board: &Board, pos: Position, side: Color, depth: usize, killers: &Killers, pv_move: Option<Position>) -> MoveScore {
    let own = fast_threat_estimate(board, pos, side);
    if own >= FIVE_CATEGORY {
        return WIN_PRIORITY;
    }

    let opponent_estimate = fast_threat_estimate(board, pos, !side);
    if opponent_estimate >= FIVE_CATEGORY {
        return BLOCK_PRIORITY;
    }

    if pv_move == Some(pos) {
        return PV_PRIORITY;
    }

    if killers.is_killer(depth, pos) {
        return KILLER_PRIORITY;
    }

    own.max(opponent_estimate) + center_bias(board.size(), pos)
}

// Orders candidates as: (a) moves that create an immediate win, (b) moves
// that block an immediate opponent win, (c) the transposition table's
// best-move hint for this position, if any, (d) killer moves for this
// depth, (e) priority descending (center bias + fast threat heuristic).
// Ties keep the caller's original order (ascending (y, x)), giving
// deterministic lowest-position tie-breaking.
pub fn order_candidates(
    board: &Board,
    candidates: &[Position],
    side: Color,
    depth: usize,
    killers: &Killers,
    pv_move: Option<Position>,
) -> Vec<(Position, MoveScore)> {
    let mut scored: Vec<(Position, MoveScore)> = candidates
        .iter()
        .map(|&pos| (pos, priority(board, pos, side, depth, killers, pv_move)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}
