use std::fmt::{Display, Formatter};

// Value-returned error taxonomy; never thrown for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GomokuError {
    // Position off-board, occupied, or side = Empty. Core state is unchanged.
    IllegalMove,
    // find_best_move called on a state that already has a winner or is full.
    GameOver,
    // undo_move on a state with empty history.
    NothingToUndo,
    // TT allocation or pool creation failed at construction time.
    ResourceExhausted,
}

impl Display for GomokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::IllegalMove => "illegal move",
            Self::GameOver => "game is already over",
            Self::NothingToUndo => "no move to undo",
            Self::ResourceExhausted => "failed to allocate a required resource",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for GomokuError {}
