use std::fmt::Display;
use std::ops::Not;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

// Cross always moves first by convention. Kept distinct from Cell so that
// illegal states (a Move with an Empty side) are unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Cross,
    Naught,
}

impl Color {
    // Used for zobrist keys and array indexing
    pub const fn to_index(&self) -> usize {
        match self {
            Self::Cross => 0,
            Self::Naught => 1,
        }
    }

    pub const fn to_cell(&self) -> Cell {
        match self {
            Self::Cross => Cell::Cross,
            Self::Naught => Cell::Naught,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Cross => f.write_str("Cross"),
            Color::Naught => f.write_str("Naught"),
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::Cross => Color::Naught,
            Color::Naught => Color::Cross,
        }
    }
}
