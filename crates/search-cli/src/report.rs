//! Turning search outcomes into text or JSON for stdout.

use std::collections::BTreeSet;

use search_core::{Grid, SearchError, SearchResult, SearchStats};
use serde::Serialize;

use crate::error::CliResult;

/// Outcome of a board search, as printed by the binary.
#[derive(Debug, Serialize)]
pub(crate) struct BoardReport {
    pub(crate) puzzle: &'static str,
    pub(crate) solved: bool,
    pub(crate) grid: Option<Grid>,
    pub(crate) stats: SearchStats,
}

impl BoardReport {
    /// Running out of branches is a normal answer; anything else is passed on.
    pub(crate) fn from_search(
        puzzle: &'static str,
        result: SearchResult<Grid>,
        stats: SearchStats,
    ) -> CliResult<Self> {
        let grid = match result {
            Ok(grid) => Some(grid),
            Err(SearchError::NoSolution) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            puzzle,
            solved: grid.is_some(),
            grid,
            stats,
        })
    }

    pub(crate) fn render(&self, json: bool) -> CliResult<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        Ok(match &self.grid {
            Some(grid) => grid.to_string(),
            None => "no solution\n".to_owned(),
        })
    }
}

/// Subsets found by the subset-sum search.
#[derive(Debug, Serialize)]
pub(crate) struct SubsetReport {
    pub(crate) target: i64,
    pub(crate) subsets: Vec<Vec<i64>>,
}

impl SubsetReport {
    pub(crate) fn new(target: i64, found: BTreeSet<BTreeSet<i64>>) -> Self {
        Self {
            target,
            subsets: found
                .into_iter()
                .map(|subset| subset.into_iter().collect())
                .collect(),
        }
    }

    pub(crate) fn render(&self, json: bool) -> CliResult<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        if self.subsets.is_empty() {
            return Ok(format!("no subset sums to {}\n", self.target));
        }
        let mut out = String::new();
        for subset in &self.subsets {
            let line: Vec<String> = subset.iter().map(i64::to_string).collect();
            out.push('{');
            out.push_str(&line.join(", "));
            out.push_str("}\n");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::{Cell, InputError};

    #[test]
    fn test_no_solution_is_a_report() {
        let stats = SearchStats::default();
        let report = BoardReport::from_search("queens", Err(SearchError::NoSolution), stats).unwrap();
        assert!(!report.solved);
        assert_eq!(report.render(false).unwrap(), "no solution\n");
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let err = SearchError::InvalidInput(InputError::StartOutsideBoard {
            start: Cell::new(9, 9),
            rows: 3,
            columns: 3,
        });
        assert!(BoardReport::from_search("knight", Err(err), SearchStats::default()).is_err());
    }

    #[test]
    fn test_board_json() {
        let mut grid = Grid::new(1, 1);
        grid.set(Cell::new(0, 0), 0);
        let stats = SearchStats {
            placements: 1,
            backtracks: 0,
        };
        let report = BoardReport::from_search("knight", Ok(grid), stats).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(true).unwrap()).unwrap();
        assert_eq!(json["puzzle"], "knight");
        assert_eq!(json["solved"], true);
        assert_eq!(json["grid"]["cells"], serde_json::json!([0]));
        assert_eq!(json["stats"]["placements"], 1);
    }

    #[test]
    fn test_subset_text() {
        let found = BTreeSet::from([BTreeSet::from([-2, 2]), BTreeSet::from([0])]);
        let report = SubsetReport::new(0, found);
        assert_eq!(report.render(false).unwrap(), "{-2, 2}\n{0}\n");

        let empty = SubsetReport::new(4, BTreeSet::new());
        assert_eq!(empty.render(false).unwrap(), "no subset sums to 4\n");
    }
}
