//! Rectangular 2-D grids loaded from line-based text

use anyhow::{Context, bail};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use super::parse::strings_to_ints;

/// A cell position; `x` grows rightwards, `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// The four orthogonal neighbours, clockwise from up
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        Direction::ORTHOGONAL.into_iter().map(move |d| self.step(d))
    }

    pub fn manhattan(self, other: Coordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.y, self.x)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

/// Compass directions on a grid whose `y` axis points down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// Up, right, down, left
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// All eight directions, clockwise from up
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    pub fn offset(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(0, -1),
            Direction::UpRight => Coordinate::new(1, -1),
            Direction::Right => Coordinate::new(1, 0),
            Direction::DownRight => Coordinate::new(1, 1),
            Direction::Down => Coordinate::new(0, 1),
            Direction::DownLeft => Coordinate::new(-1, 1),
            Direction::Left => Coordinate::new(-1, 0),
            Direction::UpLeft => Coordinate::new(-1, -1),
        }
    }

    fn rotate(self, eighths: usize) -> Direction {
        let idx = Self::ALL.iter().position(|&d| d == self).unwrap_or(0);
        Self::ALL[(idx + eighths) % 8]
    }

    /// Quarter turn clockwise
    pub fn turn_right(self) -> Direction {
        self.rotate(2)
    }

    /// Quarter turn counter-clockwise
    pub fn turn_left(self) -> Direction {
        self.rotate(6)
    }

    pub fn opposite(self) -> Direction {
        self.rotate(4)
    }

    /// Direction for a move character (`^ > v <`)
    pub fn from_arrow(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// A grid stored as rows of cells
///
/// Rows are expected to have equal length; the loaders enforce it. All
/// coordinate accessors are bounds checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build from rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> anyhow::Result<Self> {
        if let Some(first) = rows.first()
            && let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != first.len())
        {
            bail!(
                "row {} has {} cells, expected {}",
                idx + 1,
                row.len(),
                first.len()
            );
        }
        Ok(Self { rows })
    }

    /// A `width` x `height` grid filled with `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows: vec![vec![value; width]; height],
        }
    }

    /// Load from text, mapping each line with `parse_row`. Blank lines are skipped.
    pub fn load_with<F>(text: &str, mut parse_row: F) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> anyhow::Result<Vec<T>>,
    {
        let rows = text
            .lines()
            .map(str::trim_end)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_row(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, 0 for an empty grid
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        self.get(c).is_some()
    }

    pub fn get(&self, c: Coordinate) -> Option<&T> {
        let (x, y) = (usize::try_from(c.x).ok()?, usize::try_from(c.y).ok()?);
        self.rows.get(y)?.get(x)
    }

    pub fn get_mut(&mut self, c: Coordinate) -> Option<&mut T> {
        let (x, y) = (usize::try_from(c.x).ok()?, usize::try_from(c.y).ok()?);
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Overwrite a cell, returning the previous value when `c` is in bounds
    pub fn set(&mut self, c: Coordinate, value: T) -> Option<T> {
        self.get_mut(c).map(|cell| std::mem::replace(cell, value))
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// All coordinates in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<T> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    /// Coordinates paired with their cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Coordinate::new(x as i32, y as i32), cell))
        })
    }

    /// Flat row-major index of an in-bounds coordinate
    pub fn index_of(&self, c: Coordinate) -> Option<usize> {
        self.in_bounds(c)
            .then(|| c.y as usize * self.width() + c.x as usize)
    }

    /// First cell equal to `value`, row-major
    pub fn find(&self, value: &T) -> Option<Coordinate>
    where
        T: PartialEq,
    {
        self.cells().find(|(_, cell)| *cell == value).map(|(c, _)| c)
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }
}

impl Grid<char> {
    /// One character per cell
    pub fn load_chars(text: &str) -> anyhow::Result<Self> {
        Self::load_with(text, |line| Ok(line.chars().collect()))
    }
}

impl Grid<u8> {
    /// One decimal digit per cell
    pub fn load_digits(text: &str) -> anyhow::Result<Self> {
        Self::load_with(text, |line| {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .with_context(|| format!("not a digit: {c:?}"))
                })
                .collect()
        })
    }
}

impl<T> Grid<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Values separated by `delimiter` on each line
    pub fn load_delimited(text: &str, delimiter: &str) -> anyhow::Result<Self> {
        Self::load_with(text, |line| strings_to_ints(line.split(delimiter)))
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
