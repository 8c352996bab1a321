mod cli;
mod error;
mod report;

use std::collections::BTreeSet;
use std::io::Write;

use clap::Parser;
use log::{error, info, warn, LevelFilter};
use search_core::solver::{knight, queens};
use search_core::{KnightTour, NQueens, SubsetSum};

use cli::{Args, Puzzle};
use error::CliResult;
use report::{BoardReport, SubsetReport};

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

/// Solve the requested puzzle and render what stdout should show.
fn execute(args: Args) -> CliResult<String> {
    let mut output = match args.puzzle {
        Puzzle::Knight {
            rows,
            columns,
            row,
            column,
        } => {
            let (result, stats) = KnightTour::new().solve_with_stats(rows, columns, row, column);
            info!(
                "Knight's tour: {} placements, {} backtracks",
                stats.placements, stats.backtracks
            );
            let report = BoardReport::from_search("knight", result, stats)?;
            if let Some(grid) = &report.grid {
                if !knight::is_valid_tour(grid) {
                    warn!("Returned grid is not a complete knight's tour");
                }
            }
            report.render(args.json)?
        }
        Puzzle::Queens { size } => {
            let (result, stats) = NQueens::new().solve_with_stats(size);
            info!(
                "{size}-queens: {} placements, {} backtracks",
                stats.placements, stats.backtracks
            );
            let report = BoardReport::from_search("queens", result, stats)?;
            if let Some(grid) = &report.grid {
                if !queens::is_valid_placement(grid) {
                    warn!("Returned grid is not a valid queen placement");
                }
            }
            report.render(args.json)?
        }
        Puzzle::SubsetSum {
            target,
            first,
            values,
        } => {
            let values: BTreeSet<i64> = values.into_iter().collect();
            let solver = SubsetSum::with_target(target);
            let found: BTreeSet<BTreeSet<i64>> = if first {
                solver.find_first(&values).into_iter().collect()
            } else {
                solver.solve(&values)
            };
            info!("Subset-sum: {} subsets reach {target}", found.len());
            SubsetReport::new(target, found).render(args.json)?
        }
    };

    if args.json {
        output.push('\n');
    }
    Ok(output)
}

fn run() -> CliResult<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let output = execute(args)?;
    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

/// `NoSolution` never reaches here as an error, so only rejected input and
/// output failures exit non-zero.
fn exit_code<T>(result: &CliResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() {
    let result = run();
    if let Err(e) = &result {
        error!("Execution failed, error: {e}");
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use search_core::{InputError, SearchError};

    fn execute_args(args: &[&str]) -> CliResult<String> {
        execute(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_no_solution_exits_cleanly() {
        let result = execute_args(&["board-search", "queens", "3"]);
        assert_eq!(exit_code(&result), 0);
        assert_eq!(result.unwrap(), "no solution\n");

        let result = execute_args(&["board-search", "knight", "--rows", "3", "--columns", "3"]);
        assert_eq!(exit_code(&result), 0);
        assert_eq!(result.unwrap(), "no solution\n");
    }

    #[test]
    fn test_invalid_input_exits_with_failure() {
        let result = execute_args(&[
            "board-search",
            "knight",
            "--rows",
            "3",
            "--columns",
            "3",
            "--row",
            "5",
        ]);
        assert_eq!(exit_code(&result), 1);
        assert!(matches!(
            result,
            Err(CliError::Search(SearchError::InvalidInput(
                InputError::StartOutsideBoard { .. }
            )))
        ));
    }

    #[test]
    fn test_solved_output() {
        let result = execute_args(&["board-search", "queens", "4"]);
        assert_eq!(exit_code(&result), 0);
        assert_eq!(
            result.unwrap(),
            "   .   0   .   .\n   .   .   .   1\n   2   .   .   .\n   .   .   3   .\n"
        );

        let json = execute_args(&["board-search", "queens", "2", "--json"]).unwrap();
        assert!(json.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["solved"], false);

        let subsets = execute_args(&["board-search", "subset-sum", "--", "-1", "1", "2"]).unwrap();
        assert_eq!(subsets, "{-1, 1}\n");
    }
}
