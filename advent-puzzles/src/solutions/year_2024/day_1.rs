use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::bail;
use rustc_hash::FxHashMap;

use crate::utils::{fields_to_ints, parse_lines, to_parse_error};

/// Historian Hysteria
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct HistorianHysteria;

#[derive(Debug)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for HistorianHysteria {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let ids: Vec<i64> = fields_to_ints(line)?;
            match ids[..] {
                [l, r] => Ok((l, r)),
                _ => bail!("expected two location ids, found {}", ids.len()),
            }
        })
        .map_err(to_parse_error)?;

        let (left, right) = pairs.into_iter().unzip();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for HistorianHysteria {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut left = shared.left.clone();
        let mut right = shared.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let distance: i64 = left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for HistorianHysteria {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
        for &r in &shared.right {
            *counts.entry(r).or_default() += 1;
        }

        let similarity: i64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
