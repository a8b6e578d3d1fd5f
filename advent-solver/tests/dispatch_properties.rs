//! Property-based tests for part dispatch and part range checks

use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Sum on part 1, product on part 2
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Answers any part it is asked for, echoing the number
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

/// Part 2 reuses what part 1 left in the shared data
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Cached;

struct CachedData {
    numbers: Vec<i64>,
    sum: Option<i64>,
}

impl AocParser for Cached {
    type SharedData<'a> = CachedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(CachedData {
            numbers: SumProduct::parse(input)?,
            sum: None,
        })
    }
}

impl PartSolver<1> for Cached {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Cached {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((sum * 2).to_string())
    }
}

fn to_input(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn derived_dispatch_matches_part_solver(
        numbers in prop::collection::vec(-20i64..20, 1..6),
        part in 1u8..=2,
    ) {
        let input = to_input(&numbers);
        let mut via_dispatch = SumProduct::parse(&input).unwrap();
        let mut direct = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut direct),
            _ => <SumProduct as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn derived_dispatch_rejects_undeclared_parts(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn checked_range_rejects_zero_and_overflow(part in 0u8..=255) {
        let result = Echo::<2>::solve_part_checked_range(&mut (), part);
        if part == 0 || part > 2 {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    #[test]
    fn shared_data_carries_between_parts(numbers in prop::collection::vec(0i64..100, 1..6)) {
        let mut shared = Cached::parse(&to_input(&numbers)).unwrap();
        let sum: i64 = numbers.iter().sum();

        prop_assert_eq!(Cached::solve_part(&mut shared, 1).unwrap(), sum.to_string());
        prop_assert_eq!(Cached::solve_part(&mut shared, 2).unwrap(), (sum * 2).to_string());
    }
}

#[test]
fn single_part_solver_rejects_part_two() {
    let result = Echo::<1>::solve_part_checked_range(&mut (), 2);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn part_two_without_part_one_fails_cleanly() {
    let mut shared = Cached::parse("4\n5").unwrap();
    let err = Cached::solve_part(&mut shared, 2).unwrap_err();
    assert!(matches!(err, SolveError::SolveFailed(_)));
    assert_eq!(err.to_string(), "Solve failed: part 1 has not run");
}
