use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

/// Failures talking to, or getting enough data out of, the quiz API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Category {0} not found")]
    NotFound(CategoryId),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Not enough eligible categories, requested {requested} but only {available} available")]
    InsufficientData { requested: usize, available: usize },
}

/// Failures of a whole game setup attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Game setup failed: {0}")]
    Data(#[from] DataError),
    #[error("Game setup failed: category {id} has {available} clues, {required} required")]
    ShortCategory {
        id: CategoryId,
        available: usize,
        required: usize,
    },
    #[error("Game setup failed: {0}")]
    Board(#[from] BoardError),
    #[error("A game setup is already in progress")]
    AlreadyInProgress,
    #[error("Setup result does not belong to the outstanding setup")]
    StaleTicket,
}

/// Misuse of board coordinates; indicates a bookkeeping bug in the caller.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates ({category}, {clue})")]
    InvalidCoords { category: usize, clue: usize },
    #[error("Category {category} has {clues} clues, expected {expected}")]
    UnevenCategory {
        category: usize,
        clues: usize,
        expected: usize,
    },
    #[error("No board is active")]
    NoActiveBoard,
}

pub type DataResult<T> = core::result::Result<T, DataError>;
pub type SetupResult<T> = core::result::Result<T, SetupError>;
pub type Result<T> = core::result::Result<T, BoardError>;
