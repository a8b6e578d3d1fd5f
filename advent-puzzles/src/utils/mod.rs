//! Helpers shared by the puzzle solutions

pub mod dp_cache;
pub mod grid;
pub mod parse;
pub mod set;

pub use grid::{Coordinate, Direction, Grid};
pub use parse::{fields_to_ints, parse_lines, strings_to_ints, to_parse_error};
pub use set::Set;
