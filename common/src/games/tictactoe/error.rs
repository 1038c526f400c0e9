use thiserror::Error;

use super::board::CELL_COUNT;

/// A move the game refused. State is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("Cell index {0} is out of range (0..{CELL_COUNT})")]
    OutOfRange(usize),

    #[error("Cell {0} is already marked")]
    Occupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("It is not the human player's turn")]
    NotHumanTurn,
}

/// The search was asked to move on a board where no move can be made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("Board already has a winner")]
    Terminal,

    #[error("Board has no empty cells")]
    Full,

    #[error("Board cannot arise from legal play: {0}")]
    Impossible(&'static str),
}
