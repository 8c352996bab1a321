//! Subset-sum by exhaustive enumeration of index combinations.

use std::collections::BTreeSet;

use log::debug;

/// A combination of positions into the input values.
type Combination = BTreeSet<usize>;

/// Finds every subset of a set of integers whose elements add up to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetSum {
    target: i64,
}

impl Default for SubsetSum {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetSum {
    /// Look for subsets that sum to zero.
    pub fn new() -> Self {
        Self { target: 0 }
    }

    /// Look for subsets that sum to `target`.
    pub fn with_target(target: i64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// All non-empty subsets of `values` whose sum equals the target. An empty
    /// input gives an empty result.
    pub fn solve(&self, values: &BTreeSet<i64>) -> BTreeSet<BTreeSet<i64>> {
        let Some(universe) = universe(values) else {
            return BTreeSet::new();
        };
        let found: BTreeSet<BTreeSet<i64>> = combinations(universe.len(), universe.len())
            .iter()
            .filter(|combination| self.matches(&universe, combination))
            .map(|combination| to_values(&universe, combination))
            .collect();
        debug!(
            "subset-sum over {} values: {} subsets hit {}",
            universe.len(),
            found.len(),
            self.target
        );
        found
    }

    /// One matching subset, preferring the fewest elements; ties go to the
    /// lexicographically smallest index combination.
    pub fn find_first(&self, values: &BTreeSet<i64>) -> Option<BTreeSet<i64>> {
        let universe = universe(values)?;
        combinations(universe.len(), universe.len())
            .iter()
            .filter(|combination| self.matches(&universe, combination))
            .min_by_key(|combination| combination.len())
            .map(|combination| to_values(&universe, combination))
    }

    fn matches(&self, universe: &[i64], combination: &Combination) -> bool {
        // widened so large inputs cannot overflow
        let sum: i128 = combination.iter().map(|&i| i128::from(universe[i])).sum();
        sum == i128::from(self.target)
    }
}

/// The input in ascending order, or `None` when there is nothing to search.
fn universe(values: &BTreeSet<i64>) -> Option<Vec<i64>> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().collect())
}

fn to_values(universe: &[i64], combination: &Combination) -> BTreeSet<i64> {
    combination.iter().map(|&i| universe[i]).collect()
}

/// Every combination of `0..count` with between one and `order` members.
///
/// Order `k` keeps everything from order `k - 1` and extends each of its
/// largest combinations with every index not already present. Sets compare by
/// content, so `{0, 1}` and `{1, 0}` collapse into one entry.
fn combinations(count: usize, order: usize) -> BTreeSet<Combination> {
    if order <= 1 {
        return (0..count).map(|i| Combination::from([i])).collect();
    }

    let previous = combinations(count, order - 1);
    let mut result = previous.clone();
    for index in 0..count {
        for base in previous
            .iter()
            .filter(|c| c.len() == order - 1 && !c.contains(&index))
        {
            let mut extended = base.clone();
            extended.insert(index);
            result.insert(extended);
        }
    }
    result
}
