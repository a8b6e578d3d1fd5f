use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use rayon::prelude::*;

use crate::utils::{Coordinate, Direction, Grid, Set, to_parse_error};

/// Guard Gallivant
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct GuardGallivant;

#[derive(Debug)]
pub struct Lab {
    grid: Grid<char>,
    guard: Coordinate,
}

enum Walk {
    Exits(Set<Coordinate>),
    Loops,
}

impl Lab {
    fn blocked(&self, c: Coordinate, extra: Option<Coordinate>) -> bool {
        extra == Some(c) || self.grid.get(c) == Some(&'#')
    }

    /// Walk the guard until she leaves the map or repeats a `(cell, heading)` state
    fn walk(&self, extra: Option<Coordinate>) -> Walk {
        let mut seen = vec![0u8; self.grid.width() * self.grid.height()];
        let mut visited = Set::new();
        let (mut pos, mut dir) = (self.guard, Direction::Up);

        loop {
            let Some(idx) = self.grid.index_of(pos) else {
                return Walk::Exits(visited);
            };
            let bit = 1 << (dir as u8 / 2);
            if seen[idx] & bit != 0 {
                return Walk::Loops;
            }
            seen[idx] |= bit;
            visited.put(pos);

            let ahead = pos.step(dir);
            if self.blocked(ahead, extra) {
                dir = dir.turn_right();
            } else {
                pos = ahead;
            }
        }
    }
}

impl AocParser for GuardGallivant {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::load_chars(input).map_err(to_parse_error)?;
        let guard = grid
            .find(&'^')
            .context("map has no guard '^'")
            .map_err(to_parse_error)?;
        Ok(Lab { grid, guard })
    }
}

impl PartSolver<1> for GuardGallivant {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match shared.walk(None) {
            Walk::Exits(visited) => Ok(visited.len().to_string()),
            Walk::Loops => Err(SolveError::failed("guard never leaves the map")),
        }
    }
}

impl PartSolver<2> for GuardGallivant {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Walk::Exits(path) = shared.walk(None) else {
            return Err(SolveError::failed("guard never leaves the map"));
        };

        // Only cells on the original path can change the route
        let lab = &*shared;
        let candidates: Vec<Coordinate> = path.into_iter().filter(|&c| c != lab.guard).collect();
        let loops = candidates
            .par_iter()
            .filter(|&&obstacle| matches!(lab.walk(Some(obstacle)), Walk::Loops))
            .count();
        Ok(loops.to_string())
    }
}
