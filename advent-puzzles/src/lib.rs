//! Advent of Code 2023 and 2024 puzzle solutions
//!
//! Each solution is an independent solver registered through
//! `AutoRegisterSolver`; linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them. Shared helpers
//! live in [`utils`].

pub mod solutions;
pub mod utils;
