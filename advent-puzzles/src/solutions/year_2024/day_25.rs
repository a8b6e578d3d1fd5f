use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, bail};
use itertools::iproduct;

use crate::utils::{Grid, to_parse_error};

/// Code Chronicle
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, tags = ["2024", "schematics"])]
pub struct CodeChronicle;

#[derive(Debug, Default)]
pub struct Schematics {
    locks: Vec<Vec<usize>>,
    keys: Vec<Vec<usize>>,
    /// Free space between the top and bottom rows of a schematic
    space: usize,
}

impl Schematics {
    fn add(&mut self, block: &str) -> anyhow::Result<()> {
        let grid = Grid::load_chars(block)?;
        let (Some(top), Some(bottom)) = (grid.rows().first(), grid.rows().last()) else {
            bail!("empty schematic");
        };
        let space = grid.height().checked_sub(2).context("schematic too short")?;
        if self.space != 0 && self.space != space {
            bail!("schematic has {} rows, expected {}", grid.height(), self.space + 2);
        }
        self.space = space;
        if top.iter().all(|&c| c == '#') {
            self.locks.push(heights(&grid));
        } else if bottom.iter().all(|&c| c == '#') {
            self.keys.push(heights(&grid));
        } else {
            bail!("neither a lock nor a key");
        }
        Ok(())
    }

    fn fits(&self, lock: &[usize], key: &[usize]) -> bool {
        lock.len() == key.len() && lock.iter().zip(key).all(|(l, k)| l + k <= self.space)
    }
}

/// Pin heights per column, not counting the solid base row
fn heights(schematic: &Grid<char>) -> Vec<usize> {
    (0..schematic.width())
        .map(|x| {
            schematic
                .rows()
                .iter()
                .filter(|row| row[x] == '#')
                .count()
                .saturating_sub(1)
        })
        .collect()
}

impl AocParser for CodeChronicle {
    type SharedData<'a> = Schematics;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematics = Schematics::default();
        let input = input.replace("\r\n", "\n");
        for (i, block) in input.split("\n\n").filter(|b| !b.trim().is_empty()).enumerate() {
            schematics
                .add(block)
                .with_context(|| format!("schematic {}", i + 1))
                .map_err(to_parse_error)?;
        }
        Ok(schematics)
    }
}

impl PartSolver<1> for CodeChronicle {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let pairs = iproduct!(&shared.locks, &shared.keys)
            .filter(|(lock, key)| shared.fits(lock, key))
            .count();
        log::debug!(
            "{} locks, {} keys, {pairs} fitting pairs",
            shared.locks.len(),
            shared.keys.len()
        );
        Ok(pairs.to_string())
    }
}
