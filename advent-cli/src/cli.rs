//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code puzzle runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code puzzle solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Root directory of puzzle inputs, laid out as `{year}/day{dd}.txt`
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "./inputs")]
    pub input_dir: PathBuf,

    /// Read the input of a single puzzle from this file (needs --year and --day)
    #[arg(long, requires_all = ["year", "day"])]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn filters_and_tags() {
        let args =
            Args::try_parse_from(["advent", "-y", "2024", "-d", "7", "-p", "2", "-t", "grid,dp"])
                .unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2024), Some(7), Some(2)));
        assert_eq!(args.tags, vec!["grid", "dp"]);
    }

    #[test]
    fn repeated_verbose_counts() {
        let args = Args::try_parse_from(["advent", "-vvv"]).unwrap();
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn rejects_out_of_range_day() {
        assert!(Args::try_parse_from(["advent", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "-p", "3"]).is_err());
    }

    #[test]
    fn single_input_needs_year_and_day() {
        assert!(Args::try_parse_from(["advent", "--input", "in.txt", "-y", "2024"]).is_err());
        let args =
            Args::try_parse_from(["advent", "--input", "in.txt", "-y", "2024", "-d", "1"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
    }
}
