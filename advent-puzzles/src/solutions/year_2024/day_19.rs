use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, VecBackend};

/// Linen Layout
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["2024", "dp", "strings"])]
pub struct LinenLayout;

#[derive(Debug)]
pub struct Onsen<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
    /// Arrangement counts per design, filled by whichever part runs first
    arrangements: Option<Vec<u64>>,
}

/// Ways to build `design` from towel `patterns`
fn arrangements(patterns: &[&str], design: &str) -> u64 {
    let ways = DpCache::new(
        VecBackend::with_capacity(design.len() + 1),
        |&pos: &usize| {
            patterns
                .iter()
                .filter(|p| design[pos..].starts_with(**p))
                .map(|p| pos + p.len())
                .collect()
        },
        |&pos: &usize, deps: Vec<u64>| {
            if pos == design.len() {
                1
            } else {
                deps.iter().sum()
            }
        },
    );
    ways.get(&0)
}

impl Onsen<'_> {
    fn arrangements(&mut self) -> &[u64] {
        let (patterns, designs) = (&self.patterns, &self.designs);
        self.arrangements.get_or_insert_with(|| {
            designs
                .iter()
                .map(|design| {
                    let n = arrangements(patterns, design);
                    log::debug!("{design}: {n} arrangements");
                    n
                })
                .collect()
        })
    }
}

impl AocParser for LinenLayout {
    type SharedData<'a> = Onsen<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let patterns: Vec<&str> = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("no towel patterns".into()))?
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            return Err(ParseError::MissingData("no towel patterns".into()));
        }
        Ok(Onsen {
            patterns,
            designs: lines.collect(),
            arrangements: None,
        })
    }
}

impl PartSolver<1> for LinenLayout {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.arrangements().iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for LinenLayout {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.arrangements().iter().sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<LinenLayout>(SAMPLE, 1), "6");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<LinenLayout>(SAMPLE, 2), "16");
    }

    #[test]
    fn per_design_counts() {
        let patterns = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        assert_eq!(arrangements(&patterns, "brwrr"), 2);
        assert_eq!(arrangements(&patterns, "rrbgbr"), 6);
        assert_eq!(arrangements(&patterns, "ubwu"), 0);
    }

    #[test]
    fn parts_share_counts() {
        let mut onsen = LinenLayout::parse(SAMPLE).unwrap();
        assert_eq!(onsen.arrangements().len(), 8);
        assert!(onsen.arrangements.is_some());
    }
}
