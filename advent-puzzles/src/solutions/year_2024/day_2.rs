use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::{fields_to_ints, parse_lines, to_parse_error};

/// Red-Nosed Reports
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "sequences"])]
pub struct RedNosedReports;

/// Strictly monotone with steps of 1 to 3
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let mut diffs = levels.tuple_windows().map(|(a, b)| b - a);
    diffs.clone().all(|d| (1..=3).contains(&d)) || diffs.all(|d| (-3..=-1).contains(&d))
}

/// Safe after removing at most one level
fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, &v)| v),
            )
        })
}

impl AocParser for RedNosedReports {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, fields_to_ints).map_err(to_parse_error)
    }
}

impl PartSolver<1> for RedNosedReports {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for RedNosedReports {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}
