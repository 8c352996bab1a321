//! N-queens by backtracking over every currently safe cell.
//!
//! Rather than assigning one queen per row, each step rescans the whole board
//! for cells no placed queen attacks and tries the next queen in each of them,
//! in row-major order. This explores far more branches than the row-by-row
//! formulation but fixes which placement is reported first.

use log::debug;

use super::SearchStats;
use crate::{Cell, Grid, InputError, SearchError, SearchResult};

/// The four diagonal directions a queen attacks along.
const DIAGONALS: [(isize, isize); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// Stateless n-queens solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NQueens;

impl NQueens {
    pub fn new() -> Self {
        Self
    }

    /// Place `size` mutually non-attacking queens on a `size × size` board.
    /// Queen `i` is stored as value `i` in the cell it occupies.
    pub fn solve(&self, size: usize) -> SearchResult<Grid> {
        let (result, stats) = self.solve_with_stats(size);
        debug!(
            "{size}-queens: {} placements, {} backtracks",
            stats.placements, stats.backtracks
        );
        result
    }

    /// Same as [`NQueens::solve`], also reporting how much work the search did.
    pub fn solve_with_stats(&self, size: usize) -> (SearchResult<Grid>, SearchStats) {
        let mut stats = SearchStats::default();
        let Some(mut grid) = Grid::try_new(size, size) else {
            let err = InputError::BoardTooLarge {
                rows: size,
                columns: size,
            };
            return (Err(err.into()), stats);
        };
        debug!("searching {size}-queens");

        // nothing to place on an empty board
        if size == 0 {
            return (Ok(grid), stats);
        }

        for cell in available_cells(&grid) {
            if place(&mut grid, cell, 0, &mut stats) {
                return (Ok(grid), stats);
            }
        }
        debug_assert!(grid.is_all_empty());
        (Err(SearchError::NoSolution), stats)
    }
}

/// Put `queen` on `cell` and try to place the remaining queens. On failure the
/// cell is emptied again before returning.
fn place(grid: &mut Grid, cell: Cell, queen: usize, stats: &mut SearchStats) -> bool {
    grid.set(cell, queen);
    stats.record_placement();
    if queen + 1 == grid.rows() {
        return true;
    }

    for candidate in available_cells(grid) {
        if place(grid, candidate, queen + 1, stats) {
            return true;
        }
    }

    grid.clear(cell);
    stats.record_backtrack();
    false
}

/// Empty cells that no placed queen attacks, in row-major order. Recomputed
/// from scratch on every call.
pub fn available_cells(grid: &Grid) -> Vec<Cell> {
    let mut attacked = vec![false; grid.len()];
    for (queen, _) in grid.occupied() {
        mark_attacks(grid, queen, &mut attacked);
    }

    grid.cells()
        .zip(attacked)
        .filter(|&((_, value), hit)| value.is_none() && !hit)
        .map(|((cell, _), _)| cell)
        .collect()
}

/// Flag every cell sharing a row, column or diagonal with `queen`.
fn mark_attacks(grid: &Grid, queen: Cell, attacked: &mut [bool]) {
    let columns = grid.columns();
    for column in 0..columns {
        attacked[queen.row * columns + column] = true;
    }
    for row in 0..grid.rows() {
        attacked[row * columns + queen.column] = true;
    }
    for (d_row, d_column) in DIAGONALS {
        let mut next = queen.offset(d_row, d_column);
        while let Some(cell) = next.filter(|&c| grid.contains(c)) {
            attacked[cell.row * columns + cell.column] = true;
            next = cell.offset(d_row, d_column);
        }
    }
}

/// Whether two cells lie on a common row, column or diagonal.
pub fn attacks(a: Cell, b: Cell) -> bool {
    a.row == b.row || a.column == b.column || a.row.abs_diff(b.row) == a.column.abs_diff(b.column)
}

/// Check a square grid holds queens `0..size`, each exactly once, with no two
/// attacking each other.
pub fn is_valid_placement(grid: &Grid) -> bool {
    if grid.rows() != grid.columns() {
        return false;
    }
    let size = grid.rows();
    let queens: Vec<(Cell, usize)> = grid.occupied().collect();
    if queens.len() != size {
        return false;
    }

    let mut seen = vec![false; size];
    for &(_, queen) in &queens {
        if queen >= size || seen[queen] {
            return false;
        }
        seen[queen] = true;
    }

    queens.iter().enumerate().all(|(i, &(a, _))| {
        queens[i + 1..].iter().all(|&(b, _)| !attacks(a, b))
    })
}
