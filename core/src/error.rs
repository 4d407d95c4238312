use thiserror::Error;

use crate::Coord2;

/// Why a board configuration was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    /// Width or height is zero.
    EmptyBoard,
    /// At least one cell has to stay free of mines.
    TooManyMines,
    /// A generator produced a layout that does not match the requested mine count.
    MineCountMismatch,
    /// A generator produced the same mine coordinate twice.
    DuplicateMine(Coord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0:?}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Coordinates are outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
