mod board;
mod cell;
mod error;
mod game_elements;
mod state;
mod zobrist;

pub use board::{is_supported_size, Board, BOARD_SIZE_LARGE, BOARD_SIZE_SMALL, DIRECTIONS, MAX_BOARD_SIZE, WIN_LENGTH};
pub use cell::Cell;
pub use error::GomokuError;
pub use game_elements::{Color, Move, Position};
pub use state::{GameStatus, PositionState};
pub use zobrist::ZobristKeys;

// Radius (Chebyshev) of incremental evaluation around the last move.
pub const R_EVAL: u8 = 3;
