//! Advent puzzle solver framework
//!
//! Every puzzle is an independent solver: it parses its own input into an
//! ephemeral structure and answers one or more parts from it. This crate only
//! supplies the plumbing that lets a runner pick a puzzle by `(year, day)` and
//! ask it for a part without knowing its concrete types.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the solver's shared data
//! - [`PartSolver<N>`] answers part `N` from that data
//! - [`Solver`] dispatches a runtime part number to the right [`PartSolver`];
//!   `#[derive(AocSolver)]` writes it for you
//! - [`SolverInstance`] / [`DynSolver`] erase the concrete solver type and time
//!   parsing and solving
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to solver
//!   factories, filled from [`SolverPlugin`]s submitted with
//!   `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code generated from `AutoRegisterSolver`
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};
