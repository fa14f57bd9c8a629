use std::fmt::{Display, Formatter};
use serde::Serialize;

use crate::game_elements::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Cross,
    Naught,
}

impl Cell {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    // The side that owns this cell, or None if it is empty
    pub const fn side(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Color::Cross),
            Cell::Naught => Some(Color::Naught),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Naught => 'O',
        };
        write!(f, "{}", c)
    }
}
