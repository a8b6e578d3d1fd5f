use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, HashMapBackend};
use crate::utils::{fields_to_ints, to_parse_error};

/// Plutonian Pebbles
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "dp"])]
pub struct PlutonianPebbles;

/// What a single stone turns into after one blink, `None` once it outgrows `u64`
fn change(stone: u64) -> Option<Vec<u64>> {
    if stone == 0 {
        return Some(vec![1]);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Some(vec![stone / half, stone % half])
    } else {
        Some(vec![stone.checked_mul(2024)?])
    }
}

fn overflow(stone: u64) -> SolveError {
    SolveError::failed(format!("stone {stone} overflows after a blink"))
}

/// One blink over the whole row
fn blink(stones: &[u64]) -> Result<Vec<u64>, SolveError> {
    let mut next = Vec::with_capacity(stones.len() * 2);
    for &stone in stones {
        next.extend(change(stone).ok_or_else(|| overflow(stone))?);
    }
    Ok(next)
}

/// Stones in the row after `blinks` blinks, memoised on `(stone, blinks left)`
fn count_after(stones: &[u64], blinks: u32) -> Result<u64, SolveError> {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(stone, left): &(u64, u32)| match left {
            0 => Vec::new(),
            _ => change(stone)
                .unwrap_or_default()
                .into_iter()
                .map(|s| (s, left - 1))
                .collect(),
        },
        |&(stone, left): &(u64, u32), deps: Vec<Option<u64>>| match left {
            0 => Some(1),
            _ => {
                change(stone)?;
                deps.into_iter().try_fold(0u64, |acc, d| acc.checked_add(d?))
            }
        },
    );

    let mut total = 0u64;
    for &stone in stones {
        let count = cache.get(&(stone, blinks)).ok_or_else(|| overflow(stone))?;
        total = total
            .checked_add(count)
            .ok_or_else(|| SolveError::failed("stone count overflows u64"))?;
    }
    log::debug!("{} distinct (stone, blinks) states", cache.len());
    Ok(total)
}

impl AocParser for PlutonianPebbles {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones: Vec<u64> = fields_to_ints(input).map_err(to_parse_error)?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(stones)
    }
}

impl PartSolver<1> for PlutonianPebbles {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut stones = shared.clone();
        for n in 1..=25 {
            stones = blink(&stones)?;
            log::trace!("after {n} blinks: {} stones", stones.len());
        }
        Ok(stones.len().to_string())
    }
}

impl PartSolver<2> for PlutonianPebbles {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_after(shared, 75)?.to_string())
    }
}
