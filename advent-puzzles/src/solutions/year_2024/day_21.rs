use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, bail};

use crate::utils::dp_cache::{DpCache, HashMapBackend};
use crate::utils::{Coordinate, parse_lines, to_parse_error};

/// Keypad Conundrum
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 21, tags = ["2024", "dp", "pathfinding"])]
pub struct KeypadConundrum;

/// A keypad layout, row by row; the space is the gap no arm may hover over
struct Keypad {
    rows: &'static [&'static str],
}

const NUMERIC: Keypad = Keypad {
    rows: &["789", "456", "123", " 0A"],
};

const DIRECTIONAL: Keypad = Keypad {
    rows: &[" ^A", "<v>"],
};

impl Keypad {
    fn position(&self, key: char) -> Option<Coordinate> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.chars()
                .position(|c| c == key)
                .map(|x| Coordinate::new(x as i32, y as i32))
        })
    }

    /// Presses that move the arm from `from` to `to` and push it
    ///
    /// Left moves go first and right moves last, which keeps the robots
    /// upstream on as few distinct keys as possible; the order flips when the
    /// corner would cross the gap.
    fn path(&self, from: char, to: char) -> Vec<char> {
        let (Some(a), Some(b), Some(gap)) =
            (self.position(from), self.position(to), self.position(' '))
        else {
            return vec!['A'];
        };
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let horizontal = std::iter::repeat_n(if dx < 0 { '<' } else { '>' }, dx.unsigned_abs() as usize);
        let vertical = std::iter::repeat_n(if dy < 0 { '^' } else { 'v' }, dy.unsigned_abs() as usize);

        let horizontal_first = if dx < 0 {
            Coordinate::new(b.x, a.y) != gap
        } else {
            Coordinate::new(a.x, b.y) == gap
        };
        let mut presses: Vec<char> = if horizontal_first {
            horizontal.chain(vertical).collect()
        } else {
            vertical.chain(horizontal).collect()
        };
        presses.push('A');
        presses
    }
}

/// Key pairs of a press sequence, the arm starting on `A`
fn steps(presses: &[char]) -> impl Iterator<Item = (char, char)> + '_ {
    std::iter::once('A').chain(presses.iter().copied()).zip(presses.iter().copied())
}

#[derive(Debug)]
pub struct DoorCode {
    keys: Vec<char>,
    value: u64,
}

/// Sum of `presses * numeric value` with `robots` directional keypads in between
fn complexity(codes: &[DoorCode], robots: u32) -> u64 {
    // Human presses needed to push `to` on a directional keypad `depth` levels up
    let cost = DpCache::new(
        HashMapBackend::new(),
        |&(from, to, depth): &(char, char, u32)| match depth {
            0 => Vec::new(),
            _ => steps(&DIRECTIONAL.path(from, to))
                .map(|(a, b)| (a, b, depth - 1))
                .collect(),
        },
        |&(_, _, depth): &(char, char, u32), deps: Vec<u64>| match depth {
            0 => 1,
            _ => deps.iter().sum(),
        },
    );

    codes
        .iter()
        .map(|code| {
            let presses: u64 = steps(&code.keys)
                .flat_map(|(from, to)| {
                    let path = NUMERIC.path(from, to);
                    steps(&path)
                        .map(|(a, b)| cost.get(&(a, b, robots)))
                        .collect::<Vec<_>>()
                })
                .sum();
            log::debug!("{}: {presses} presses", code.keys.iter().collect::<String>());
            presses * code.value
        })
        .sum()
}

impl AocParser for KeypadConundrum {
    type SharedData<'a> = Vec<DoorCode>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let line = line.trim();
            if let Some(bad) = line.chars().find(|&c| c == ' ' || NUMERIC.position(c).is_none()) {
                bail!("{bad:?} is not a numeric keypad key");
            }
            let digits: String = line.chars().filter(char::is_ascii_digit).collect();
            let value = digits
                .parse::<u64>()
                .with_context(|| format!("code {line:?} has no numeric part"))?;
            Ok(DoorCode {
                keys: line.chars().collect(),
                value,
            })
        })
        .map_err(to_parse_error)
    }
}

impl PartSolver<1> for KeypadConundrum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(complexity(shared, 2).to_string())
    }
}

impl PartSolver<2> for KeypadConundrum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(complexity(shared, 25).to_string())
    }
}
