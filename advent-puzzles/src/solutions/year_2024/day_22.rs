use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;

use crate::utils::{parse_lines, to_parse_error};

/// Monkey Market
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, tags = ["2024", "simulation"])]
pub struct MonkeyMarket;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;
/// Price changes lie in `-9..=9`, so four of them pack into a base-19 key
const KEYS: usize = 19 * 19 * 19 * 19;

fn next_secret(secret: u64) -> u64 {
    let secret = ((secret * 64) ^ secret) % PRUNE;
    let secret = ((secret / 32) ^ secret) % PRUNE;
    ((secret * 2048) ^ secret) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

/// Bananas each change sequence would fetch across all buyers
fn bananas_by_sequence(seeds: &[u64]) -> Vec<u32> {
    let mut totals = vec![0u32; KEYS];
    // Last buyer (1-based) that already sold on a sequence
    let mut sold_to = vec![0usize; KEYS];

    for (buyer, &seed) in seeds.iter().enumerate() {
        let prices: Vec<i32> = secrets(seed).take(ROUNDS + 1).map(|s| (s % 10) as i32).collect();
        let mut key = 0usize;
        for (i, pair) in prices.windows(2).enumerate() {
            let change = (pair[1] - pair[0] + 9) as usize;
            key = (key * 19 + change) % KEYS;
            if i >= 3 && sold_to[key] != buyer + 1 {
                sold_to[key] = buyer + 1;
                totals[key] += pair[1] as u32;
            }
        }
    }
    totals
}

impl AocParser for MonkeyMarket {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let seeds = parse_lines(input, |line| Ok(line.trim().parse::<u64>()?))
            .map_err(to_parse_error)?;
        // Secrets stay below PRUNE, so only the seed can overflow the mixing steps
        match seeds.iter().find(|&&seed| seed >= PRUNE) {
            Some(seed) => Err(ParseError::InvalidFormat(format!(
                "secret {seed} is not below {PRUNE}"
            ))),
            None => Ok(seeds),
        }
    }
}

impl PartSolver<1> for MonkeyMarket {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .par_iter()
            .filter_map(|&seed| secrets(seed).nth(ROUNDS))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for MonkeyMarket {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let totals = bananas_by_sequence(shared);
        let (key, best) = totals
            .iter()
            .enumerate()
            .max_by_key(|&(_, total)| *total)
            .ok_or_else(|| SolveError::failed("no buyers"))?;
        log::debug!("best change sequence key {key}: {best} bananas");
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    #[test]
    fn secret_sequence() {
        let first: Vec<u64> = secrets(123).skip(1).take(3).collect();
        assert_eq!(first, vec![15887950, 16495136, 527345]);
    }

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<MonkeyMarket>("1\n10\n100\n2024\n", 1), "37327623");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<MonkeyMarket>("1\n2\n3\n2024\n", 2), "23");
    }

    #[test]
    fn first_sale_per_buyer_only() {
        // 123 reaches price 6 after changes -1,-1,0,2
        let key = [-1i32, -1, 0, 2]
            .iter()
            .fold(0usize, |k, &c| k * 19 + (c + 9) as usize);
        assert_eq!(bananas_by_sequence(&[123])[key], 6);
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(MonkeyMarket::parse("12\nabc\n").is_err());
    }

    #[test]
    fn rejects_secrets_outside_the_prune_range() {
        assert!(MonkeyMarket::parse("1\n16777216\n").is_err());
        assert!(MonkeyMarket::parse("18446744073709551615\n").is_err());
        assert_eq!(MonkeyMarket::parse("16777215\n").unwrap(), vec![16777215]);
    }
}
