//! Puzzle solutions, one module per day

pub mod year_2023;
pub mod year_2024;

/// Parse `input` and answer `part`, panicking on failure
#[cfg(test)]
pub(crate) fn solve<S: advent_solver::Solver>(input: &str, part: u8) -> String {
    use advent_solver::{AocParser, SolverExt};

    let mut shared = <S as AocParser>::parse(input).expect("input parses");
    S::solve_part_checked_range(&mut shared, part).expect("part solves")
}
