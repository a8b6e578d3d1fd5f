use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::utils::{Coordinate, Grid, Set, to_parse_error};

/// Resonant Collinearity
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid", "geometry"])]
pub struct ResonantCollinearity;

#[derive(Debug)]
pub struct Antennas {
    grid: Grid<char>,
    by_frequency: FxHashMap<char, Vec<Coordinate>>,
}

impl Antennas {
    /// Count antinodes; `harmonics` extends them along the whole line
    fn antinodes(&self, harmonics: bool) -> usize {
        let mut found = Set::new();
        for positions in self.by_frequency.values() {
            for (&a, &b) in positions.iter().tuple_combinations() {
                let delta = b - a;
                for (start, step) in [(b, delta), (a, Coordinate::new(0, 0) - delta)] {
                    let mut c = if harmonics { start } else { start + step };
                    while self.grid.in_bounds(c) {
                        log::trace!("antinode of {a} and {b}: {c}");
                        found.put(c);
                        if !harmonics {
                            break;
                        }
                        c += step;
                    }
                }
            }
        }
        found.len()
    }
}

impl AocParser for ResonantCollinearity {
    type SharedData<'a> = Antennas;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::load_chars(input).map_err(to_parse_error)?;
        let mut by_frequency: FxHashMap<char, Vec<Coordinate>> = FxHashMap::default();
        for (c, &cell) in grid.cells() {
            if cell.is_ascii_alphanumeric() {
                by_frequency.entry(cell).or_default().push(c);
            }
        }
        Ok(Antennas { grid, by_frequency })
    }
}

impl PartSolver<1> for ResonantCollinearity {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(false).to_string())
    }
}

impl PartSolver<2> for ResonantCollinearity {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<ResonantCollinearity>(SAMPLE, 1), "14");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<ResonantCollinearity>(SAMPLE, 2), "34");
    }

    #[test]
    fn lone_antenna_has_no_antinodes() {
        assert_eq!(solve::<ResonantCollinearity>("...\n.a.\n...\n", 2), "0");
    }

    #[test]
    fn harmonics_example() {
        let input = "T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        assert_eq!(solve::<ResonantCollinearity>(input, 2), "9");
    }
}
