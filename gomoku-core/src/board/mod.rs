mod board;

pub use board::{is_supported_size, Board, BOARD_SIZE_LARGE, BOARD_SIZE_SMALL, DIRECTIONS, MAX_BOARD_SIZE, WIN_LENGTH};
