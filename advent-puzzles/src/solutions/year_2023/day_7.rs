use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, anyhow};

use crate::utils::{parse_lines, to_parse_error};

/// Camel Cards
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct CamelCards;

const CARD_ORDER: &[u8; 13] = b"23456789TJQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Jokers join whichever other card is most frequent
    fn classify(cards: &[u8; 5], jokers_wild: bool) -> HandType {
        let mut counts = [0u8; 13];
        let mut jokers = 0;
        for &card in cards {
            if jokers_wild && card == b'J' {
                jokers += 1;
            } else if let Some(idx) = CARD_ORDER.iter().position(|&c| c == card) {
                counts[idx] += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts[0] += jokers;

        match (counts[0], counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    /// Comparable strength: hand type, then card values left to right
    fn strength(&self, jokers_wild: bool) -> (HandType, [u8; 5]) {
        let values = self.cards.map(|card| match card {
            b'J' if jokers_wild => 0,
            _ => CARD_ORDER
                .iter()
                .position(|&c| c == card)
                .map_or(0, |idx| idx as u8 + 1),
        });
        (HandType::classify(&self.cards, jokers_wild), values)
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .context("expected `<cards> <bid>`")?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand must have 5 cards: {cards:?}"))?;
    if let Some(bad) = cards.iter().find(|c| !CARD_ORDER.contains(c)) {
        return Err(anyhow!("unknown card {:?}", *bad as char));
    }
    let bid = bid.trim().parse().context("bid")?;
    Ok(Hand { cards, bid })
}

fn total_winnings(hands: &[Hand], jokers_wild: bool) -> u64 {
    let mut ranked: Vec<_> = hands
        .iter()
        .map(|hand| (hand.strength(jokers_wild), hand.bid))
        .collect();
    ranked.sort_unstable();
    ranked
        .iter()
        .zip(1u64..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for CamelCards {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_hand).map_err(to_parse_error)
    }
}

impl PartSolver<1> for CamelCards {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for CamelCards {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<CamelCards>(SAMPLE, 1), "6440");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<CamelCards>(SAMPLE, 2), "5905");
    }

    #[test]
    fn classifies_hands() {
        assert_eq!(HandType::classify(b"AAAAA", false), HandType::FiveOfAKind);
        assert_eq!(HandType::classify(b"23332", false), HandType::FullHouse);
        assert_eq!(HandType::classify(b"23432", false), HandType::TwoPair);
        assert_eq!(HandType::classify(b"KTJJT", false), HandType::TwoPair);
        assert_eq!(HandType::classify(b"KTJJT", true), HandType::FourOfAKind);
        assert_eq!(HandType::classify(b"JJJJJ", true), HandType::FiveOfAKind);
    }

    #[test]
    fn rejects_bad_hand() {
        assert!(CamelCards::parse("32T3 765\n").is_err());
        assert!(CamelCards::parse("32T3X 765\n").is_err());
    }
}
