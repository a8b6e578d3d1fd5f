use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, ensure};
use rayon::prelude::*;

use crate::utils::{fields_to_ints, parse_lines, to_parse_error};

/// Bridge Repair
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "recursion"])]
pub struct BridgeRepair;

#[derive(Debug)]
pub struct Equation {
    total: u64,
    operands: Vec<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    /// `None` on overflow; such candidates can never reach the total
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Concat => {
                let digits = rhs.checked_ilog10().map_or(1, |d| d + 1);
                lhs.checked_mul(10u64.checked_pow(digits)?)?.checked_add(rhs)
            }
        }
    }
}

impl Equation {
    fn solvable(&self, operators: &[Operator]) -> bool {
        fn reach(target: u64, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
            match rest.split_first() {
                None => acc == target,
                // Without zero operands no operator decreases the value
                Some(_) if acc > target && !rest.contains(&0) => false,
                Some((&next, tail)) => operators.iter().any(|op| {
                    op.apply(acc, next)
                        .is_some_and(|value| reach(target, value, tail, operators))
                }),
            }
        }

        match self.operands.split_first() {
            Some((&first, rest)) => reach(self.total, first, rest, operators),
            None => false,
        }
    }
}

fn calibration(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .par_iter()
        .filter(|eq| eq.solvable(operators))
        .map(|eq| eq.total)
        .sum()
}

impl AocParser for BridgeRepair {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (total, operands) = line.split_once(':').context("no ':' in equation")?;
            let operands = fields_to_ints(operands)?;
            ensure!(!operands.is_empty(), "equation has no operands");
            Ok(Equation {
                total: total.trim().parse::<u64>().context("test value")?,
                operands,
            })
        })
        .map_err(to_parse_error)
    }
}

impl PartSolver<1> for BridgeRepair {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, &[Operator::Add, Operator::Mul]).to_string())
    }
}

impl PartSolver<2> for BridgeRepair {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let operators = [Operator::Add, Operator::Mul, Operator::Concat];
        Ok(calibration(shared, &operators).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<BridgeRepair>(SAMPLE, 1), "3749");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<BridgeRepair>(SAMPLE, 2), "11387");
    }

    #[test]
    fn concatenation() {
        assert_eq!(Operator::Concat.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concat.apply(7, 0), Some(70));
        assert_eq!(Operator::Concat.apply(u64::MAX / 2, 10), None);
    }
}
