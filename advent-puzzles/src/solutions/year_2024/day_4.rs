use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::{Coordinate, Direction, Grid, to_parse_error};

/// Ceres Search
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct CeresSearch;

/// Whether `word` is spelled from `start` walking in `direction`
fn spells(grid: &Grid<char>, start: Coordinate, direction: Direction, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(i, ch)| grid.get(start + direction.offset() * i as i32) == Some(&ch))
}

fn count_word(grid: &Grid<char>, word: &str) -> usize {
    grid.coordinates()
        .map(|start| {
            Direction::ALL
                .into_iter()
                .filter(|&d| spells(grid, start, d, word))
                .inspect(|d| log::trace!("{word} at {start} heading {d:?}"))
                .count()
        })
        .sum()
}

/// An `A` whose two diagonals each read `MAS` in either direction
fn is_x_mas(grid: &Grid<char>, center: Coordinate) -> bool {
    let diagonal_is_mas = |a: Direction| {
        let ends = (
            grid.get(center.step(a)),
            grid.get(center.step(a.opposite())),
        );
        matches!(ends, (Some('M'), Some('S')) | (Some('S'), Some('M')))
    };
    grid.get(center) == Some(&'A')
        && diagonal_is_mas(Direction::UpLeft)
        && diagonal_is_mas(Direction::UpRight)
}

impl AocParser for CeresSearch {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::load_chars(input).map_err(to_parse_error)
    }
}

impl PartSolver<1> for CeresSearch {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_word(shared, "XMAS").to_string())
    }
}

impl PartSolver<2> for CeresSearch {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let crosses = shared
            .coordinates()
            .filter(|&c| is_x_mas(shared, c))
            .count();
        Ok(crosses.to_string())
    }
}
