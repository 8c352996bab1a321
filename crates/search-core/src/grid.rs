//! Board state shared by the board backtrackers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) coordinate on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Shift the cell by a signed delta. Returns `None` when either coordinate
    /// would become negative; the upper bound is the board's business.
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add_signed(d_row)?,
            self.column.checked_add_signed(d_column)?,
        ))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A `rows × columns` board. Every cell is either empty or holds the index of
/// the step (or queen) that occupies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major, `rows * columns` long
    cells: Vec<Option<usize>>,
}

/// Unchecked serialized form, validated on the way into a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<usize>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw.rows.checked_mul(raw.columns).ok_or("board too large")?;
        if raw.cells.len() != expected {
            return Err(format!(
                "a {}x{} board needs {} cells, got {}",
                raw.rows,
                raw.columns,
                expected,
                raw.cells.len()
            ));
        }
        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an all-empty board.
    ///
    /// Panics if the board cannot be allocated; see [`Grid::try_new`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::try_new(rows, columns)
            .unwrap_or_else(|| panic!("a {rows}x{columns} board cannot be allocated"))
    }

    /// Create an all-empty board, or `None` when `rows * columns` overflows
    /// or the cells cannot be allocated.
    pub fn try_new(rows: usize, columns: usize) -> Option<Self> {
        let len = rows.checked_mul(columns)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, None);
        Some(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell lies on the board.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "{cell} is off a {}x{} board",
            self.rows,
            self.columns
        );
        cell.row * self.columns + cell.column
    }

    /// Value stored at a cell, `None` if the cell is empty.
    ///
    /// Panics if the cell is off the board.
    pub fn get(&self, cell: Cell) -> Option<usize> {
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, value: usize) {
        let idx = self.index(cell);
        self.cells[idx] = Some(value);
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, cell: Cell) {
        let idx = self.index(cell);
        self.cells[idx] = None;
    }

    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// On the board and not yet occupied.
    #[inline]
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.contains(cell) && self.cells[self.index(cell)].is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_all_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// All cells with their values, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<usize>)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &value)| (Cell::new(idx / columns, idx % columns), value))
    }

    /// Cells that currently hold a value, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, usize)> + '_ {
        self.cells().filter_map(|(cell, value)| value.map(|v| (cell, v)))
    }

    /// Where a given value sits, if anywhere.
    pub fn position_of(&self, value: usize) -> Option<Cell> {
        self.occupied().find(|&(_, v)| v == value).map(|(cell, _)| cell)
    }

    /// Nested row vectors, convenient for callers that want a 2-D view.
    pub fn to_rows(&self) -> Vec<Vec<Option<usize>>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.columns).map(<[_]>::to_vec).collect()
    }
}

/// Fixed-width table, four characters per cell, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            for value in row {
                match value {
                    Some(v) => write!(f, "{:>4}", v)?,
                    None => write!(f, "{:>4}", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.is_all_empty());
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_oversized_boards_are_refused() {
        // cell count overflows usize
        assert!(Grid::try_new(usize::MAX, 2).is_none());
        // cell count fits, its byte size does not
        let side = 1 << (usize::BITS / 2 - 1);
        assert!(Grid::try_new(side, side).is_none());

        assert_eq!(Grid::try_new(2, 3), Some(Grid::new(2, 3)));
        assert!(Grid::try_new(0, usize::MAX).is_some_and(|grid| grid.is_empty()));
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = Grid::new(2, 2);
        let cell = Cell::new(1, 0);
        grid.set(cell, 7);
        assert_eq!(grid.get(cell), Some(7));
        assert!(!grid.is_vacant(cell));
        assert_eq!(grid.position_of(7), Some(cell));

        grid.clear(cell);
        assert!(grid.is_empty_cell(cell));
        assert!(grid.is_all_empty());
    }

    #[test]
    fn test_vacancy_checks_bounds() {
        let grid = Grid::new(2, 3);
        assert!(grid.is_vacant(Cell::new(1, 2)));
        assert!(!grid.is_vacant(Cell::new(2, 0)));
        assert!(!grid.is_vacant(Cell::new(0, 3)));
    }

    #[test]
    fn test_cell_offset() {
        let cell = Cell::new(1, 2);
        assert_eq!(cell.offset(-1, 2), Some(Cell::new(0, 4)));
        assert_eq!(cell.offset(-2, 1), None);
        assert_eq!(cell.offset(1, -3), None);
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(Cell::new(0, 1), 0);
        grid.set(Cell::new(1, 0), 1);
        let order: Vec<Cell> = grid.cells().map(|(cell, _)| cell).collect();
        assert_eq!(
            order,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
        let occupied: Vec<(Cell, usize)> = grid.occupied().collect();
        assert_eq!(occupied, vec![(Cell::new(0, 1), 0), (Cell::new(1, 0), 1)]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3);
        grid.set(Cell::new(0, 0), 0);
        grid.set(Cell::new(1, 2), 12);
        assert_eq!(grid.to_string(), "   0   .   .\n   .   .  12\n");
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 0);
        assert!(grid.is_empty());
        assert!(grid.to_rows().is_empty());
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_serde_shape() {
        let mut grid = Grid::new(1, 2);
        grid.set(Cell::new(0, 1), 3);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rows": 1, "columns": 2, "cells": [null, 3] })
        );

        let back: Grid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = serde_json::json!({ "rows": 2, "columns": 2, "cells": [null, 1] });
        assert!(serde_json::from_value::<Grid>(json).is_err());
    }
}
