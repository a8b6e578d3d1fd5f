use std::collections::VecDeque;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;

use crate::utils::{Coordinate, Direction, Grid, Set, to_parse_error};

/// Warehouse Woes
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["2024", "grid", "simulation"])]
pub struct WarehouseWoes;

const WALL: char = '#';
const EMPTY: char = '.';
const ROBOT: char = '@';

#[derive(Debug, Clone)]
pub struct Warehouse {
    map: Grid<char>,
    moves: Vec<Direction>,
}

impl Warehouse {
    /// The double-width warehouse of the second half
    fn widened(&self) -> anyhow::Result<Self> {
        let rows = self
            .map
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|&c| match c {
                        'O' => ['[', ']'],
                        ROBOT => [ROBOT, EMPTY],
                        other => [other, other],
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            map: Grid::from_rows(rows)?,
            moves: self.moves.clone(),
        })
    }
}

/// Cells that move when `robot` pushes towards `dir`, or `None` if a wall blocks
fn pushed_cells(map: &Grid<char>, robot: Coordinate, dir: Direction) -> Option<Vec<Coordinate>> {
    let vertical = matches!(dir, Direction::Up | Direction::Down);
    let mut seen = Set::from([robot]);
    let mut queue = VecDeque::from([robot]);
    let mut moving = Vec::new();

    while let Some(c) = queue.pop_front() {
        moving.push(c);
        let next = c.step(dir);
        let mut ahead = vec![next];
        match map.get(next).copied()? {
            WALL => return None,
            '[' if vertical => ahead.push(next.step(Direction::Right)),
            ']' if vertical => ahead.push(next.step(Direction::Left)),
            'O' | '[' | ']' => {}
            _ => continue,
        }
        for n in ahead {
            if seen.put(n) {
                queue.push_back(n);
            }
        }
    }
    Some(moving)
}

/// Run every move, returning the final map
fn simulate(warehouse: &Warehouse) -> anyhow::Result<Grid<char>> {
    let mut map = warehouse.map.clone();
    let mut robot = map.find(&ROBOT).context("warehouse has no robot")?;

    for &dir in &warehouse.moves {
        let Some(cells) = pushed_cells(&map, robot, dir) else {
            continue;
        };
        let contents: Vec<char> = cells
            .iter()
            .map(|&c| map.get(c).copied().unwrap_or(EMPTY))
            .collect();
        for &c in &cells {
            map.set(c, EMPTY);
        }
        for (&c, content) in cells.iter().zip(contents) {
            map.set(c.step(dir), content);
        }
        robot = robot.step(dir);
    }
    log::trace!("final warehouse:\n{map}");
    Ok(map)
}

/// Sum of `100 * y + x` over the left edge of every box
fn gps_sum(map: &Grid<char>) -> i64 {
    map.cells()
        .filter(|(_, c)| matches!(c, 'O' | '['))
        .map(|(p, _)| 100 * i64::from(p.y) + i64::from(p.x))
        .sum()
}

fn solve_warehouse(warehouse: &Warehouse) -> Result<String, SolveError> {
    let map = simulate(warehouse).map_err(|e| SolveError::failed(format!("{e:#}")))?;
    Ok(gps_sum(&map).to_string())
}

impl AocParser for WarehouseWoes {
    type SharedData<'a> = Warehouse;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (map, moves) = input
            .trim_start_matches('\n')
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line before the moves".into()))?;
        let map = Grid::load_chars(map).map_err(to_parse_error)?;
        let moves = moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Direction::from_arrow(c).with_context(|| format!("not a move: {c:?}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(to_parse_error)?;
        Ok(Warehouse { map, moves })
    }
}

impl PartSolver<1> for WarehouseWoes {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_warehouse(shared)
    }
}

impl PartSolver<2> for WarehouseWoes {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let wide = shared
            .widened()
            .map_err(|e| SolveError::failed(format!("{e:#}")))?;
        solve_warehouse(&wide)
    }
}
