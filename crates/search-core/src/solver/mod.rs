//! Search engines.
//!
//! Two board backtrackers (knight's tour, n-queens) mutate a single [`Grid`]
//! in place and undo each abandoned placement on the way back up. The subset
//! enumerator builds its whole combination universe and filters it by sum.
//!
//! [`Grid`]: crate::Grid

pub mod knight;
pub mod queens;
pub mod subset;

use serde::{Deserialize, Serialize};

pub use knight::KnightTour;
pub use queens::NQueens;
pub use subset::SubsetSum;

/// Counters collected while a board search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Markers written to the board, including ones later taken back
    pub placements: u64,
    /// Placements undone after their subtree failed
    pub backtracks: u64,
}

impl SearchStats {
    #[inline]
    pub(crate) fn record_placement(&mut self) {
        self.placements += 1;
    }

    #[inline]
    pub(crate) fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }
}
