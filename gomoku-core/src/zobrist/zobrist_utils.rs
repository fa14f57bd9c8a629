use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_elements::{Color, Position};

// Unlike a fixed-size board, Gomoku supports two board sizes, so the key
// schedule can't be a compile-time table like a fixed 8x8 game would use.
// It is generated once per PositionState from a caller-supplied seed and
// shared by Arc across clones (read-only after construction).
pub struct ZobristKeys {
    keys: Vec<u64>,
    size: u8,
}

impl ZobristKeys {
    pub fn new(size: u8, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = 2 * size as usize * size as usize;
        let keys = (0..count).map(|_| rng.gen()).collect();
        Self { keys, size }
    }

    pub fn key_for(&self, side: Color, pos: Position) -> u64 {
        let cells = self.size as usize * self.size as usize;
        let idx = side.to_index() * cells + pos.y as usize * self.size as usize + pos.x as usize;
        self.keys[idx]
    }
}
