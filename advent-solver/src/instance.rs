//! Type-erased solver instances with timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval around one parse or solve step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `f`, returning its output and the interval it took
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Span) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Span { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part of a puzzle
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Puzzle input parsed by `S`, answering parts on demand
///
/// `shared` may borrow from the input, hence the lifetime. Parts run against
/// the same shared data, so part 2 sees whatever part 1 left behind.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse(input));
        log::trace!("{year}/{day} parsed in {}", parsed.duration());

        Ok(Self {
            year,
            day,
            shared: shared?,
            parsed,
        })
    }
}

/// What the executor needs from a parsed puzzle, with the solver type erased
///
/// # Example
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{} part {}: {}", solver.year(), solver.day(), result.part, result.answer);
///     }
///     println!("parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, rejecting numbers outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started and finished
    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AocParser, PartSolver};

    /// Part 1 counts words and remembers them; part 2 reads what part 1 left
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl PartSolver<1> for Words {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared.1 = Some(shared.0.len());
            Ok(shared.0.len().to_string())
        }
    }

    impl PartSolver<2> for Words {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .1
                .map(|n| (n * 10).to_string())
                .ok_or_else(|| SolveError::failed("part 1 has not run"))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn span_measures_closure() {
        let (value, span) = Span::measure(|| 7);
        assert_eq!(value, 7);
        assert!(span.end >= span.start);
        assert!(span.duration() >= TimeDelta::zero());
    }

    #[test]
    fn parts_share_state() {
        let mut instance = SolverInstance::<Words>::new(2021, 3, "a b c").unwrap();
        assert!(instance.solve(2).is_err());

        let part1 = instance.solve(1).unwrap();
        assert_eq!((part1.part, part1.answer.as_str()), (1, "3"));
        assert_eq!(instance.solve(2).unwrap().answer, "30");
    }

    #[test]
    fn parse_failure_is_reported() {
        assert!(matches!(
            SolverInstance::<Words>::new(2021, 3, "  \n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn rejects_parts_out_of_range() {
        let mut instance = SolverInstance::<Words>::new(2021, 3, "a").unwrap();
        assert_eq!(instance.parts(), 2);
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }
}
