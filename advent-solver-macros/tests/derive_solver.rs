use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

struct Stats {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct ThreeParts;

impl AocParser for ThreeParts {
    type SharedData<'a> = Stats;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Stats { numbers, sum: None })
    }
}

impl PartSolver<1> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.sum.unwrap_or_else(|| shared.numbers.iter().sum());
        if shared.numbers.is_empty() {
            return Err(SolveError::failed("no numbers"));
        }
        Ok(format!("{:.2}", sum as f64 / shared.numbers.len() as f64))
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .numbers
            .iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::failed("no numbers"))
    }
}

/// Borrowing shared data with a declared but unfinished second part
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Borrowing;

impl AocParser for Borrowing {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split(',').collect())
    }
}

impl PartSolver<1> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.join("+"))
    }
}

#[test]
fn declares_part_count() {
    assert_eq!(ThreeParts::PARTS, 3);
    assert_eq!(Borrowing::PARTS, 1);
}

#[test]
fn dispatches_every_declared_part() {
    let mut shared = ThreeParts::parse("10\n20\n33").unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 1).unwrap(), "63");
    assert_eq!(shared.sum, Some(63));
    assert_eq!(ThreeParts::solve_part(&mut shared, 2).unwrap(), "21.00");
    assert_eq!(ThreeParts::solve_part(&mut shared, 3).unwrap(), "33");
}

#[test]
fn later_parts_do_not_require_earlier_ones() {
    let mut shared = ThreeParts::parse("1\n2").unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 2).unwrap(), "1.50");
}

#[test]
fn undeclared_part_is_not_implemented() {
    let mut shared = ThreeParts::parse("1").unwrap();
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn errors_from_part_solvers_pass_through() {
    let mut shared = Stats {
        numbers: Vec::new(),
        sum: None,
    };
    let err = ThreeParts::solve_part(&mut shared, 3).unwrap_err();
    assert_eq!(err.to_string(), "Solve failed: no numbers");
}

#[test]
fn borrowed_shared_data_works() {
    let input = String::from("a,b,c");
    let mut shared = Borrowing::parse(&input).unwrap();
    assert_eq!(Borrowing::solve_part(&mut shared, 1).unwrap(), "a+b+c");
}
