use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

/// Mull It Over
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "regex"])]
pub struct MullItOver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// Instructions in program order; the whole input is one memory stream
fn decode(memory: &str) -> Result<Vec<Instruction>, ParseError> {
    let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .map_err(|e| ParseError::Other(e.to_string()))?;

    pattern
        .captures_iter(memory)
        .map(|caps| match &caps[0] {
            "do()" => Ok(Instruction::Do),
            "don't()" => Ok(Instruction::Dont),
            _ => {
                let operand = |i: usize| {
                    caps[i]
                        .parse::<u64>()
                        .map_err(|e| ParseError::InvalidFormat(format!("{}: {e}", &caps[0])))
                };
                Ok(Instruction::Mul(operand(1)?, operand(2)?))
            }
        })
        .collect()
}

impl AocParser for MullItOver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        decode(input)
    }
}

impl PartSolver<1> for MullItOver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .iter()
            .map(|ins| match ins {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for MullItOver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, sum) = shared
            .iter()
            .fold((true, 0u64), |(enabled, sum), ins| match *ins {
                Instruction::Do => (true, sum),
                Instruction::Dont => (false, sum),
                Instruction::Mul(a, b) if enabled => (enabled, sum + a * b),
                Instruction::Mul(..) => (enabled, sum),
            });
        Ok(sum.to_string())
    }
}
