use std::cmp::Ordering;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, ensure};

use crate::utils::{Set, parse_lines, strings_to_ints, to_parse_error};

/// Print Queue
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "sorting"])]
pub struct PrintQueue;

#[derive(Debug)]
pub struct Manual {
    /// `(before, after)` page pairs
    rules: Set<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Manual {
    /// Only rules whose pages both appear in an update constrain it
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.has(&(a, b)) {
            Ordering::Less
        } else if self.rules.has(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .iter()
            .enumerate()
            .all(|(i, &a)| update[i + 1..].iter().all(|&b| !self.rules.has(&(b, a))))
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

fn parse_manual(input: &str) -> anyhow::Result<Manual> {
    let (rules, updates) = input
        .split_once("\n\n")
        .context("expected a blank line between rules and updates")?;

    let rules = parse_lines(rules, |line| {
        let (before, after) = line.split_once('|').context("rule without '|'")?;
        Ok((before.trim().parse::<u32>()?, after.trim().parse::<u32>()?))
    })
    .context("rules")?
    .into_iter()
    .collect();

    let updates = parse_lines(updates, |line| {
        let pages: Vec<u32> = strings_to_ints(line.split(','))?;
        ensure!(!pages.is_empty(), "empty update");
        Ok(pages)
    })
    .context("updates")?;

    Ok(Manual { rules, updates })
}

impl AocParser for PrintQueue {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(&input.replace("\r\n", "\n")).map_err(to_parse_error)
    }
}

impl PartSolver<1> for PrintQueue {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for PrintQueue {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|update| !shared.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| shared.compare(a, b));
                log::debug!("reordered {update:?} -> {fixed:?}");
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<PrintQueue>(SAMPLE, 1), "143");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<PrintQueue>(SAMPLE, 2), "123");
    }

    #[test]
    fn rules_for_absent_pages_are_ignored() {
        // 3|1 exists but 3 is not in the update
        let input = "3|1\n1|2\n\n1,2\n";
        assert_eq!(solve::<PrintQueue>(input, 1), "2");
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert!(PrintQueue::parse("1|2\n1,2\n").is_err());
    }
}
