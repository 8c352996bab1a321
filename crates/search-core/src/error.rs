use thiserror::Error;

use crate::Cell;

pub type SearchResult<T> = Result<T, SearchError>;

/// Ways a search can end without a solved board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The request was rejected before any search began.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// Every branch was explored and none led to a solution. This is an
    /// ordinary outcome for some boards, not a malfunction.
    #[error("the search space was exhausted without finding a solution")]
    NoSolution,
}

/// Why a board search refused its arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("start cell {start} is outside a {rows}x{columns} board")]
    StartOutsideBoard {
        start: Cell,
        rows: usize,
        columns: usize,
    },
    #[error("a {rows}x{columns} board is too large to allocate")]
    BoardTooLarge { rows: usize, columns: usize },
}

impl SearchError {
    pub fn is_no_solution(&self) -> bool {
        matches!(self, SearchError::NoSolution)
    }
}
