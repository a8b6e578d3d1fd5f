use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

/// Trebuchet?! calibration values
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Trebuchet;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Trebuchet {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().filter(|l| !l.trim().is_empty()).collect())
    }
}

impl PartSolver<1> for Trebuchet {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_calibration(shared, digit_at).to_string())
    }
}

impl PartSolver<2> for Trebuchet {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_calibration(shared, digit_or_word_at).to_string())
    }
}

fn digit_at(line: &str, i: usize) -> Option<u32> {
    line.as_bytes()
        .get(i)
        .and_then(|&b| (b as char).to_digit(10))
}

/// Spelled-out digits may overlap (`eightwo` holds both 8 and 2)
fn digit_or_word_at(line: &str, i: usize) -> Option<u32> {
    digit_at(line, i).or_else(|| {
        let rest = line.get(i..)?;
        SPELLED
            .iter()
            .position(|word| rest.starts_with(word))
            .map(|idx| idx as u32 + 1)
    })
}

/// Lines without any digit contribute 0
fn sum_calibration(lines: &[&str], digit: fn(&str, usize) -> Option<u32>) -> u32 {
    lines
        .iter()
        .map(|line| {
            let mut digits = (0..line.len()).filter_map(|i| digit(line, i));
            let value = match digits.next() {
                Some(first) => first * 10 + digits.last().unwrap_or(first),
                None => 0,
            };
            log::trace!("{line} -> {value}");
            value
        })
        .sum()
}
