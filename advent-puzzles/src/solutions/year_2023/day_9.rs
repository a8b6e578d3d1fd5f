use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::ensure;

use crate::utils::{fields_to_ints, parse_lines, to_parse_error};

/// Mirage Maintenance
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["2023", "recursion"])]
pub struct MirageMaintenance;

/// Next value of a sequence by repeated differences
fn extrapolate(values: &[i64]) -> i64 {
    let Some(&last) = values.last() else {
        return 0;
    };
    if values.iter().all(|&v| v == values[0]) {
        return last;
    }
    let diffs: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    last + extrapolate(&diffs)
}

impl AocParser for MirageMaintenance {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let values = fields_to_ints(line)?;
            ensure!(!values.is_empty(), "empty history");
            Ok(values)
        })
        .map_err(to_parse_error)
    }
}

impl PartSolver<1> for MirageMaintenance {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|history| extrapolate(history))
            .sum::<i64>()
            .to_string())
    }
}

impl PartSolver<2> for MirageMaintenance {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Extrapolating backwards is extrapolating the reversed history
        Ok(shared
            .iter()
            .map(|history| {
                let reversed: Vec<i64> = history.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum::<i64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<MirageMaintenance>(SAMPLE, 1), "114");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<MirageMaintenance>(SAMPLE, 2), "2");
    }

    #[test]
    fn single_value_history_repeats() {
        assert_eq!(extrapolate(&[7]), 7);
        assert_eq!(solve::<MirageMaintenance>("-4\n", 2), "-4");
    }
}
