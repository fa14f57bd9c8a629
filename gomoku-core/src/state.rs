use std::sync::Arc;

use log::trace;
use rustc_hash::FxHashSet;

use crate::board::{Board, MAX_BOARD_SIZE};
use crate::cell::Cell;
use crate::error::GomokuError;
use crate::game_elements::{Color, Move, Position};
use crate::zobrist::ZobristKeys;

// Radius (Chebyshev) within which an empty cell counts as "interesting"
// because it neighbors some occupied cell.
const R_INT: u8 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Color),
    Draw,
}

// Board plus every derived cache that must stay coherent under make/unmake:
// stone count, winner cache, interesting-squares, and the Zobrist hash.
// make_move/unmake_move mutate in place rather than clone-per-move (unlike a
// chess board that returns a fresh Board on every move) because the undo
// invariant (I1-style round-tripping) is only meaningful for a mutate/undo
// pair; root-level parallel fan-out still clones a whole PositionState once
// per task, so the clone boundary just moves up one level.
#[derive(Clone)]
pub struct PositionState {
    board: Board,
    zobrist_keys: Arc<ZobristKeys>,
    zobrist_hash: u64,
    winner_cache: [Option<bool>; 2],
    interesting_set: FxHashSet<Position>,
    neighbor_counts: Box<[[u8; MAX_BOARD_SIZE]; MAX_BOARD_SIZE]>,
    history: Vec<Move>,
}

impl PositionState {
    // The core API's create_state: rejects any size outside spec.md sec 3's
    // N ∈ {15, 19} rather than silently accepting it.
    pub fn new(size: u8, seed: u64) -> Result<Self, GomokuError> {
        Self::with_keys(size, Arc::new(ZobristKeys::new(size, seed)))
    }

    pub fn with_keys(size: u8, zobrist_keys: Arc<ZobristKeys>) -> Result<Self, GomokuError> {
        Ok(Self {
            board: Board::new(size)?,
            zobrist_keys,
            zobrist_hash: 0,
            winner_cache: [None, None],
            interesting_set: FxHashSet::default(),
            neighbor_counts: Box::new([[0u8; MAX_BOARD_SIZE]; MAX_BOARD_SIZE]),
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn stone_count(&self) -> u32 {
        self.board.stone_count()
    }

    pub fn zobrist(&self) -> u64 {
        self.zobrist_hash
    }

    pub fn zobrist_keys(&self) -> &Arc<ZobristKeys> {
        &self.zobrist_keys
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    // Validated, history-recording entry point for external callers.
    pub fn apply_move(&mut self, x: u8, y: u8, side: Color) -> Result<(), GomokuError> {
        if !self.board.in_bounds(x as i32, y as i32) {
            return Err(GomokuError::IllegalMove);
        }

        let pos = Position::new(x, y);
        if !self.board.is_empty(pos) {
            return Err(GomokuError::IllegalMove);
        }

        self.make_move(pos, side);
        trace!("applied {side} move at {pos}, stone_count={}", self.stone_count());
        Ok(())
    }

    pub fn undo_move(&mut self) -> Result<(), GomokuError> {
        match self.history.last().copied() {
            None => Err(GomokuError::NothingToUndo),
            Some(mv) => {
                self.unmake_move(mv.pos, mv.side);
                trace!("undid {mv}, stone_count={}", self.stone_count());
                Ok(())
            }
        }
    }

    // Low-level mutation used both by apply_move and directly by the search,
    // which make/unmake far more often than it wants validation overhead.
    pub fn make_move(&mut self, pos: Position, side: Color) {
        debug_assert!(self.board.is_empty(pos));

        self.board.set(pos, side.to_cell());
        self.zobrist_hash ^= self.zobrist_keys.key_for(side, pos);
        self.winner_cache = [None, None];
        self.interesting_set.remove(&pos);
        self.on_place(pos);
        self.history.push(Move::new(pos, side));
    }

    pub fn unmake_move(&mut self, pos: Position, side: Color) {
        debug_assert_eq!(self.history.last(), Some(&Move::new(pos, side)));

        self.history.pop();
        self.board.set(pos, Cell::Empty);
        self.zobrist_hash ^= self.zobrist_keys.key_for(side, pos);
        self.winner_cache = [None, None];
        self.on_remove(pos);
    }

    pub fn winner(&mut self, side: Color) -> bool {
        let idx = side.to_index();
        if let Some(cached) = self.winner_cache[idx] {
            return cached;
        }

        let result = self.board.has_five(side);
        self.winner_cache[idx] = Some(result);
        result
    }

    pub fn game_status(&mut self) -> GameStatus {
        if self.winner(Color::Cross) {
            GameStatus::Win(Color::Cross)
        } else if self.winner(Color::Naught) {
            GameStatus::Win(Color::Naught)
        } else if self.stone_count() as u32 == self.size() as u32 * self.size() as u32 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    // The current interesting_set, filtered to still-empty cells, in
    // deterministic (y, x) order so that equal-priority tie-breaking later
    // in move ordering is reproducible (I5).
    //
    // On an empty board the neighbor-count mechanism below has nothing to
    // seed from, so the degenerate case from the spec (the 5x5 region
    // centered on the board) is produced on demand here rather than stored.
    pub fn enumerate_candidates(&self) -> Vec<Position> {
        if self.stone_count() == 0 {
            return center_region(self.size());
        }

        let mut candidates: Vec<Position> = self
            .interesting_set
            .iter()
            .copied()
            .filter(|p| self.board.is_empty(*p))
            .collect();
        candidates.sort_unstable_by_key(|p| (p.y, p.x));
        candidates
    }

    fn neighbors_within_r_int(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let size = self.size() as i32;
        let cx = pos.x as i32;
        let cy = pos.y as i32;
        let r = R_INT as i32;

        (-r..=r).flat_map(move |dy| (-r..=r).filter_map(move |dx| {
            if dx == 0 && dy == 0 {
                return None;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && x < size && y < size {
                Some(Position::new(x as u8, y as u8))
            } else {
                None
            }
        }))
    }

    fn on_place(&mut self, pos: Position) {
        for n in self.neighbors_within_r_int(pos).collect::<Vec<_>>() {
            let before = self.neighbor_counts[n.y as usize][n.x as usize];
            self.neighbor_counts[n.y as usize][n.x as usize] = before + 1;
            if before == 0 && self.board.is_empty(n) {
                self.interesting_set.insert(n);
            }
        }
    }

    fn on_remove(&mut self, pos: Position) {
        for n in self.neighbors_within_r_int(pos).collect::<Vec<_>>() {
            let count = self.neighbor_counts[n.y as usize][n.x as usize] - 1;
            self.neighbor_counts[n.y as usize][n.x as usize] = count;
            if count == 0 && self.board.is_empty(n) {
                self.interesting_set.remove(&n);
            }
        }

        // pos is empty again; its own neighbor counter (tracking the other
        // stones still around it) was untouched by the loop above, since pos
        // is never its own neighbor.
        if self.neighbor_counts[pos.y as usize][pos.x as usize] > 0 {
            self.interesting_set.insert(pos);
        }
    }
}

fn center_region(size: u8) -> Vec<Position> {
    let center = size as i32 / 2;
    let mut positions = Vec::with_capacity(25);

    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let x = center + dx;
            let y = center + dy;
            if x >= 0 && y >= 0 && x < size as i32 && y < size as i32 {
                positions.push(Position::new(x as u8, y as u8));
            }
        }
    }

    positions.sort_unstable_by_key(|p| (p.y, p.x));
    positions
}
