//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data every part of a solver works from
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError};
///
/// struct Reports;
///
/// impl AocParser for Reports {
///     type SharedData<'a> = Vec<Vec<i32>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_whitespace()
///                     .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///                     .collect()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Reports::parse("1 2\n3").unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to share.
    ///
    /// Owned structures are the common case; borrow from the input
    /// (`&'a str`, `Vec<&'a [u8]>`) when no transformation is needed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` of a puzzle
///
/// Parts receive the shared data mutably so a later part can reuse what an
/// earlier one computed.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle solver with a runtime part dispatch
///
/// Usually derived with `#[derive(AocSolver)]`, which forwards part `k` to
/// `<Self as PartSolver<k>>::solve`.
pub trait Solver: AocParser {
    /// Number of parts this solver answers
    const PARTS: u8;

    /// Solve `part` (1-based)
    ///
    /// # Returns
    /// * `Err(SolveError::PartNotImplemented)` - `part` has no implementation
    /// * `Err(SolveError::SolveFailed)` - the input has no answer for this part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects part `0` and parts above
    /// [`Solver::PARTS`] with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
