//! Basic example of using the search engines

use std::collections::BTreeSet;

use search_core::solver::{knight, queens};
use search_core::{KnightTour, NQueens, SearchError, SubsetSum};

fn main() {
    // Knight's tour
    println!("Searching a knight's tour on a 5x5 board from (0, 0)...\n");
    let (result, stats) = KnightTour::new().solve_with_stats(5, 5, 0, 0);
    match result {
        Ok(grid) => {
            println!("{}", grid);
            println!("Valid tour: {}", knight::is_valid_tour(&grid));
        }
        Err(e) => println!("No tour: {}", e),
    }
    println!(
        "Placements: {}, backtracks: {}\n",
        stats.placements, stats.backtracks
    );

    // N-Queens, including the sizes with no answer
    for size in [3, 8] {
        println!("--- {} queens ---\n", size);
        match NQueens::new().solve(size) {
            Ok(grid) => {
                println!("{}", grid);
                println!("Valid placement: {}\n", queens::is_valid_placement(&grid));
            }
            Err(SearchError::NoSolution) => println!("No placement exists\n"),
            Err(e) => println!("Error: {}\n", e),
        }
    }

    // Subset-Sum
    let values: BTreeSet<i64> = [-4, 0, -2, 4, 2, 5].into_iter().collect();
    println!("--- Subsets of {:?} summing to zero ---\n", values);
    for subset in SubsetSum::new().solve(&values) {
        println!("{:?}", subset);
    }

    // Smallest subset hitting a different target
    let solver = SubsetSum::with_target(7);
    if let Some(subset) = solver.find_first(&values) {
        println!("\nSmallest subset summing to {}: {:?}", solver.target(), subset);
    }
}
