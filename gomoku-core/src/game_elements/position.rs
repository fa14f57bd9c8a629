use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn chebyshev_distance(&self, other: &Position) -> u8 {
        let dx = (self.x as i16 - other.x as i16).unsigned_abs() as u8;
        let dy = (self.y as i16 - other.y as i16).unsigned_abs() as u8;
        dx.max(dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
