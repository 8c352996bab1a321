//! Backtracking search engines for a few classic board and subset puzzles.
//!
//! - [`KnightTour`]: visit every cell of a board exactly once with a knight.
//! - [`NQueens`]: place `n` non-attacking queens on an `n × n` board.
//! - [`SubsetSum`]: every subset of a set of integers that sums to a target.
//!
//! Board searches return the filled [`Grid`] or a [`SearchError`]; running out
//! of branches is reported as [`SearchError::NoSolution`].

mod error;
mod grid;
pub mod solver;

use std::collections::BTreeSet;

pub use error::{InputError, SearchError, SearchResult};
pub use grid::{Cell, Grid};
pub use solver::{KnightTour, NQueens, SearchStats, SubsetSum};

/// Knight's tour of a `rows × columns` board from the given start cell.
pub fn knights_tour(
    rows: usize,
    columns: usize,
    start_row: usize,
    start_column: usize,
) -> SearchResult<Grid> {
    KnightTour::new().solve(rows, columns, start_row, start_column)
}

/// `size` non-attacking queens on a `size × size` board.
pub fn n_queens(size: usize) -> SearchResult<Grid> {
    NQueens::new().solve(size)
}

/// Every non-empty subset of `values` that sums to zero.
pub fn subset_sum(values: &BTreeSet<i64>) -> BTreeSet<BTreeSet<i64>> {
    SubsetSum::new().solve(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{knight, queens};

    #[test]
    fn test_shorthands() {
        let tour = knights_tour(5, 5, 0, 0).unwrap();
        assert!(knight::is_valid_tour(&tour));

        let board = n_queens(8).unwrap();
        assert!(queens::is_valid_placement(&board));
        assert_eq!(n_queens(3), Err(SearchError::NoSolution));

        let values: BTreeSet<i64> = [1, 2, 3, 4, 5].into_iter().collect();
        assert!(subset_sum(&values).is_empty());
    }
}
