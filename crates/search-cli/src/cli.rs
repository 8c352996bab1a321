use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
pub(crate) struct Args {
    /// Log search progress and statistics to stderr.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Print results as JSON instead of a table.
    #[arg(long, global = true)]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) puzzle: Puzzle,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Puzzle {
    /// Find a knight's tour of a rectangular board.
    Knight {
        /// Number of rows on the board.
        #[arg(long, default_value_t = 8)]
        rows: usize,

        /// Number of columns on the board.
        #[arg(long, default_value_t = 8)]
        columns: usize,

        /// Row the knight starts on (0-based).
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// Column the knight starts on (0-based).
        #[arg(long, default_value_t = 0)]
        column: usize,
    },
    /// Place non-attacking queens on a square board.
    Queens {
        /// The size of the chess board.
        size: usize,
    },
    /// List every subset of the given integers that sums to the target.
    ///
    /// Duplicate values are collapsed; the input is treated as a set.
    #[command(name = "subset-sum")]
    SubsetSum {
        /// The sum each reported subset must reach.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        target: i64,

        /// Report only the smallest matching subset.
        #[arg(long)]
        first: bool,

        /// The input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}
