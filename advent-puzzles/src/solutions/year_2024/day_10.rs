use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::{Coordinate, Grid, Set, to_parse_error};

/// Hoof It
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "grid", "dp"])]
pub struct HoofIt;

const PEAK: u8 = 9;

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Coordinate> + '_ {
    map.cells().filter(|(_, h)| **h == 0).map(|(c, _)| c)
}

/// Neighbours exactly one step higher
fn uphill(map: &Grid<u8>, c: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
    let next = map.get(c).map(|h| h + 1);
    c.neighbors()
        .filter(move |n| next.is_some() && map.get(*n).copied() == next)
}

fn peaks_reachable(map: &Grid<u8>, start: Coordinate) -> usize {
    let mut seen = Set::from([start]);
    let mut stack = vec![start];
    let mut peaks = 0;
    while let Some(c) = stack.pop() {
        if map.get(c) == Some(&PEAK) {
            peaks += 1;
            continue;
        }
        for n in uphill(map, c) {
            if seen.put(n) {
                stack.push(n);
            }
        }
    }
    peaks
}

impl AocParser for HoofIt {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::load_digits(input).map_err(to_parse_error)
    }
}

impl PartSolver<1> for HoofIt {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        let score: usize = trailheads(map).map(|c| peaks_reachable(map, c)).sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for HoofIt {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        let width = map.width();
        let at = |idx: usize| Coordinate::new((idx % width) as i32, (idx / width) as i32);

        // Distinct trails from a cell to any peak
        let ratings = DpCache::new(
            VecBackend::with_capacity(width * map.height()),
            |&idx: &usize| {
                uphill(map, at(idx))
                    .filter_map(|n| map.index_of(n))
                    .collect()
            },
            |&idx: &usize, deps: Vec<u64>| {
                if map.get(at(idx)) == Some(&PEAK) {
                    1
                } else {
                    deps.iter().sum()
                }
            },
        );

        let total: u64 = trailheads(map)
            .filter_map(|c| map.index_of(c))
            .map(|idx| ratings.get(&idx))
            .sum();
        log::debug!("rated trails through {} cells", ratings.len());
        Ok(total.to_string())
    }
}
