use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::{Coordinate, Direction, Grid, Set, to_parse_error};

/// Garden Groups
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["2024", "grid", "flood-fill"])]
pub struct GardenGroups;

/// A connected patch of one plant type
#[derive(Debug)]
pub struct Region {
    plant: char,
    cells: Vec<Coordinate>,
    perimeter: usize,
    sides: usize,
}

fn same_plant(garden: &Grid<char>, c: Coordinate, plant: char) -> bool {
    garden.get(c) == Some(&plant)
}

/// Corners at `c`; a region has as many straight sides as corners
fn corners(garden: &Grid<char>, c: Coordinate, plant: char) -> usize {
    Direction::ORTHOGONAL
        .into_iter()
        .filter(|&d| {
            let a = same_plant(garden, c.step(d), plant);
            let b = same_plant(garden, c.step(d.turn_right()), plant);
            let diagonal = same_plant(garden, c.step(d).step(d.turn_right()), plant);
            (!a && !b) || (a && b && !diagonal)
        })
        .count()
}

fn regions(garden: &Grid<char>) -> Vec<Region> {
    let mut assigned = Set::new();
    let mut found = Vec::new();

    for (start, &plant) in garden.cells() {
        if !assigned.put(start) {
            continue;
        }
        let mut region = Region {
            plant,
            cells: Vec::new(),
            perimeter: 0,
            sides: 0,
        };
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            region.cells.push(c);
            region.sides += corners(garden, c, plant);
            for n in c.neighbors() {
                if !same_plant(garden, n, plant) {
                    region.perimeter += 1;
                } else if assigned.put(n) {
                    stack.push(n);
                }
            }
        }
        log::trace!(
            "region {} at {start}: area {} perimeter {} sides {}",
            region.plant,
            region.cells.len(),
            region.perimeter,
            region.sides
        );
        found.push(region);
    }
    found
}

impl AocParser for GardenGroups {
    type SharedData<'a> = Vec<Region>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let garden = Grid::load_chars(input).map_err(to_parse_error)?;
        Ok(regions(&garden))
    }
}

impl PartSolver<1> for GardenGroups {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.cells.len() * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for GardenGroups {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.cells.len() * r.sides).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SMALL: &str = "AAAA
BBCD
BBCC
EEEC
";

    const LARGE: &str = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn part1_samples() {
        assert_eq!(solve::<GardenGroups>(SMALL, 1), "140");
        assert_eq!(solve::<GardenGroups>(LARGE, 1), "1930");
    }

    #[test]
    fn part2_samples() {
        assert_eq!(solve::<GardenGroups>(SMALL, 2), "80");
        assert_eq!(solve::<GardenGroups>(LARGE, 2), "1206");
    }

    #[test]
    fn nested_regions_count_inner_sides() {
        let input = "EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
";
        assert_eq!(solve::<GardenGroups>(input, 2), "236");
    }

    #[test]
    fn region_shapes() {
        let garden = Grid::load_chars(SMALL).unwrap();
        let regions = regions(&garden);
        let c = regions.iter().find(|r| r.plant == 'C').unwrap();
        assert_eq!((c.cells.len(), c.perimeter, c.sides), (4, 10, 8));
    }
}
