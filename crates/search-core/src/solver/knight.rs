//! Knight's tour by plain depth-first backtracking.

use log::debug;

use super::SearchStats;
use crate::{Cell, Grid, InputError, SearchError, SearchResult};

/// Knight offsets in the order candidates are tried. The order decides which
/// of the many valid tours is found first, so it must not change.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// Stateless knight's tour solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnightTour;

impl KnightTour {
    pub fn new() -> Self {
        Self
    }

    /// Find a tour of a `rows × columns` board that starts on
    /// `(start_row, start_column)`. Each cell of the returned grid holds the
    /// step at which the knight visits it.
    pub fn solve(
        &self,
        rows: usize,
        columns: usize,
        start_row: usize,
        start_column: usize,
    ) -> SearchResult<Grid> {
        let (result, stats) = self.solve_with_stats(rows, columns, start_row, start_column);
        debug!(
            "knight's tour {rows}x{columns}: {} placements, {} backtracks",
            stats.placements, stats.backtracks
        );
        result
    }

    /// Same as [`KnightTour::solve`], also reporting how much work the search did.
    pub fn solve_with_stats(
        &self,
        rows: usize,
        columns: usize,
        start_row: usize,
        start_column: usize,
    ) -> (SearchResult<Grid>, SearchStats) {
        let mut stats = SearchStats::default();
        let start = Cell::new(start_row, start_column);
        if start_row >= rows || start_column >= columns {
            let err = InputError::StartOutsideBoard {
                start,
                rows,
                columns,
            };
            return (Err(err.into()), stats);
        }
        let Some(mut grid) = Grid::try_new(rows, columns) else {
            return (Err(InputError::BoardTooLarge { rows, columns }.into()), stats);
        };

        debug!("searching knight's tour on {rows}x{columns} from {start}");
        let result = if tour_from(&mut grid, start, 0, &mut stats) {
            Ok(grid)
        } else {
            debug_assert!(grid.is_all_empty());
            Err(SearchError::NoSolution)
        };
        (result, stats)
    }
}

/// Visit `cell` as step `step` and try to complete the tour from there.
/// On failure the cell is emptied again, leaving the grid exactly as it was.
fn tour_from(grid: &mut Grid, cell: Cell, step: usize, stats: &mut SearchStats) -> bool {
    grid.set(cell, step);
    stats.record_placement();
    // every step fills a distinct cell, so the step count tells when we're full
    if step + 1 == grid.len() {
        return true;
    }

    for next in knight_targets(cell) {
        if grid.is_vacant(next) && tour_from(grid, next, step + 1, stats) {
            return true;
        }
    }

    grid.clear(cell);
    stats.record_backtrack();
    false
}

/// Cells a knight on `cell` could jump to, in [`KNIGHT_MOVES`] order. Only the
/// lower bound is checked here.
pub fn knight_targets(cell: Cell) -> impl Iterator<Item = Cell> {
    KNIGHT_MOVES
        .into_iter()
        .filter_map(move |(d_row, d_column)| cell.offset(d_row, d_column))
}

/// Whether two cells are a single knight move apart.
pub fn is_knight_move(from: Cell, to: Cell) -> bool {
    let d_row = from.row.abs_diff(to.row);
    let d_column = from.column.abs_diff(to.column);
    (d_row == 1 && d_column == 2) || (d_row == 2 && d_column == 1)
}

/// Check that a grid is a complete tour: steps `0..len` each appear once and
/// consecutive steps are a knight move apart.
pub fn is_valid_tour(grid: &Grid) -> bool {
    if grid.is_empty() {
        return false;
    }
    let mut path: Vec<Option<Cell>> = vec![None; grid.len()];
    for (cell, value) in grid.cells() {
        match value {
            Some(step) if step < path.len() && path[step].is_none() => path[step] = Some(cell),
            _ => return false,
        }
    }
    let path: Vec<Cell> = path.into_iter().flatten().collect();
    path.windows(2).all(|pair| is_knight_move(pair[0], pair[1]))
}
