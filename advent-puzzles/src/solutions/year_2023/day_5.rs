use std::ops::Range;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, bail};

use crate::utils::{fields_to_ints, to_parse_error};

/// If You Give A Seed A Fertilizer
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "intervals"])]
pub struct Almanac;

/// One `destination source length` line of a map
#[derive(Debug, Clone, Copy)]
struct Shift {
    source: i64,
    length: i64,
    offset: i64,
}

impl Shift {
    fn source_range(&self) -> Range<i64> {
        self.source..self.source + self.length
    }
}

/// Ordered maps from seed to location
#[derive(Debug)]
pub struct Input {
    seeds: Vec<i64>,
    layers: Vec<Vec<Shift>>,
}

fn parse_input(input: &str) -> anyhow::Result<Input> {
    let mut lines = input.lines().map(str::trim);
    let seeds_line = lines.next().context("missing seeds line")?;
    let seeds = seeds_line
        .strip_prefix("seeds:")
        .with_context(|| format!("unexpected seed line: {seeds_line}"))
        .and_then(fields_to_ints)?;

    let mut layers: Vec<Vec<Shift>> = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        if line.ends_with("map:") {
            layers.push(Vec::new());
            continue;
        }
        let layer = layers
            .last_mut()
            .with_context(|| format!("line {}: range before any map header", idx + 2))?;
        let values: Vec<i64> =
            fields_to_ints(line).with_context(|| format!("line {}", idx + 2))?;
        let [destination, source, length] = values[..] else {
            bail!("line {}: expected 3 numbers, found {}", idx + 2, values.len());
        };
        layer.push(Shift {
            source,
            length,
            offset: destination - source,
        });
    }

    Ok(Input { seeds, layers })
}

impl Input {
    fn location(&self, seed: i64) -> i64 {
        self.layers.iter().fold(seed, |value, layer| {
            layer
                .iter()
                .find(|shift| shift.source_range().contains(&value))
                .map_or(value, |shift| value + shift.offset)
        })
    }
}

/// Push every range through one map, splitting where shifts partially overlap
fn remap(ranges: Vec<Range<i64>>, layer: &[Shift]) -> Vec<Range<i64>> {
    let mut mapped = Vec::new();
    let mut pending = ranges;

    for shift in layer {
        let source = shift.source_range();
        let mut unmatched = Vec::new();
        for range in pending {
            let lo = range.start.max(source.start);
            let hi = range.end.min(source.end);
            if lo < hi {
                mapped.push(lo + shift.offset..hi + shift.offset);
                if range.start < lo {
                    unmatched.push(range.start..lo);
                }
                if hi < range.end {
                    unmatched.push(hi..range.end);
                }
            } else {
                unmatched.push(range);
            }
        }
        pending = unmatched;
    }

    // Values outside every shift map to themselves
    mapped.extend(pending);
    mapped
}

impl AocParser for Almanac {
    type SharedData<'a> = Input;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_input(input).map_err(to_parse_error)
    }
}

impl PartSolver<1> for Almanac {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.location(seed))
            .min()
            .map(|loc| loc.to_string())
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

impl PartSolver<2> for Almanac {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::failed("seed ranges must come in pairs"));
        }
        let seeds: Vec<Range<i64>> = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .collect();
        let locations = shared
            .layers
            .iter()
            .fold(seeds, |ranges, layer| remap(ranges, layer));
        log::debug!("{} location ranges", locations.len());

        locations
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.start)
            .min()
            .map(|loc| loc.to_string())
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}
