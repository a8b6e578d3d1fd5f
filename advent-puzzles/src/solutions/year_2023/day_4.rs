use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;

use crate::utils::{Set, fields_to_ints, parse_lines, to_parse_error};

/// Scratchcards
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "sets"])]
pub struct Scratchcards;

#[derive(Debug)]
pub struct Card {
    winning: Set<u32>,
    numbers: Vec<u32>,
}

impl Card {
    fn matches(&self) -> usize {
        self.numbers.iter().filter(|n| self.winning.has(n)).count()
    }

    fn score(&self) -> u32 {
        match self.matches() {
            0 => 0,
            m => 1 << (m - 1),
        }
    }
}

fn parse_card(line: &str) -> anyhow::Result<Card> {
    let (_, after) = line.split_once(':').context("no ':' in card")?;
    let (winning, numbers) = after.split_once('|').context("no '|' in card")?;

    Ok(Card {
        winning: fields_to_ints(winning)
            .context("winning numbers")?
            .into_iter()
            .collect(),
        numbers: fields_to_ints(numbers).context("card numbers")?,
    })
}

impl AocParser for Scratchcards {
    type SharedData<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_card).map_err(to_parse_error)
    }
}

impl PartSolver<1> for Scratchcards {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Card::score).sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Scratchcards {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Every card starts with one copy; wins copy the following cards
        let mut copies = vec![1u64; shared.len()];
        for (i, card) in shared.iter().enumerate() {
            let count = copies[i];
            let end = (i + card.matches()).min(shared.len() - 1);
            for copy in &mut copies[i + 1..=end] {
                *copy += count;
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<Scratchcards>(SAMPLE, 1), "13");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<Scratchcards>(SAMPLE, 2), "30");
    }

    #[test]
    fn malformed_card_reports_line() {
        let err = Scratchcards::parse("Card 1: 1 2 | 3\nCard 2 1 2 3\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: line 2: no ':' in card");
    }
}
