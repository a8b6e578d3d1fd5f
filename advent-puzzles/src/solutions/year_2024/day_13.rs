use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, bail};
use regex::Regex;

use crate::utils::to_parse_error;

/// Claw Contraption
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["2024", "math"])]
pub struct ClawContraption;

const COST_A: i64 = 3;
const COST_B: i64 = 1;
const PRESS_LIMIT: i64 = 100;
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Presses `(a, b)` that land exactly on the prize, if any
    ///
    /// The buttons give two linear equations; a zero determinant means
    /// parallel buttons, which are treated as unwinnable.
    fn presses(&self) -> Option<(i64, i64)> {
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }
        let a = self.prize.0 * self.b.1 - self.prize.1 * self.b.0;
        let b = self.a.0 * self.prize.1 - self.a.1 * self.prize.0;
        if a % det != 0 || b % det != 0 {
            return None;
        }
        let (a, b) = (a / det, b / det);
        (a >= 0 && b >= 0).then_some((a, b))
    }

    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let (a, b) = self.presses()?;
        if limit.is_some_and(|l| a > l || b > l) {
            return None;
        }
        Some(a * COST_A + b * COST_B)
    }

    fn shifted(self) -> Self {
        Self {
            prize: (self.prize.0 + PRIZE_OFFSET, self.prize.1 + PRIZE_OFFSET),
            ..self
        }
    }
}

fn parse_machine(xy: &Regex, block: &str) -> anyhow::Result<Machine> {
    let pairs = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let caps = xy.captures(line).with_context(|| format!("no X/Y in {line:?}"))?;
            Ok::<_, anyhow::Error>((caps[1].parse::<i64>()?, caps[2].parse::<i64>()?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let [a, b, prize] = pairs[..] else {
        bail!("expected 3 lines per machine, got {}", pairs.len());
    };
    Ok(Machine { a, b, prize })
}

fn total_tokens<'a>(machines: impl Iterator<Item = &'a Machine>, limit: Option<i64>) -> i64 {
    machines
        .enumerate()
        .filter_map(|(i, m)| {
            let tokens = m.tokens(limit);
            log::debug!("machine {}: {tokens:?}", i + 1);
            tokens
        })
        .sum()
}

impl AocParser for ClawContraption {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let xy = Regex::new(r"X[+=](\d+), Y[+=](\d+)")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .enumerate()
            .map(|(i, block)| {
                parse_machine(&xy, block)
                    .with_context(|| format!("machine {}", i + 1))
                    .map_err(to_parse_error)
            })
            .collect()
    }
}

impl PartSolver<1> for ClawContraption {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared.iter(), Some(PRESS_LIMIT)).to_string())
    }
}

impl PartSolver<2> for ClawContraption {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shifted: Vec<Machine> = shared.iter().map(|m| m.shifted()).collect();
        Ok(total_tokens(shifted.iter(), None).to_string())
    }
}
