use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

use super::{Color, Position};

// Avoid clashes between the core Result and the formatter Result
type FmtResult = std::fmt::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub side: Color,
}

impl Move {
    pub const fn new(pos: Position, side: Color) -> Self {
        Self { pos, side }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}@{}", self.side, self.pos)
    }
}
