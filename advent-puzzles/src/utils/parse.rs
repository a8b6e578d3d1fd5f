//! Input conversion helpers

use advent_solver::ParseError;
use anyhow::Context;
use std::str::FromStr;

/// Parse every string into `T`, failing on the first bad element
pub fn strings_to_ints<'a, T, I>(strings: I) -> anyhow::Result<Vec<T>>
where
    I: IntoIterator<Item = &'a str>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    strings
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            s.trim()
                .parse()
                .with_context(|| format!("failed to parse value at index {i}: {s:?}"))
        })
        .collect()
}

/// [`strings_to_ints`] over the whitespace separated fields of `line`
pub fn fields_to_ints<T>(line: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    strings_to_ints(line.split_whitespace())
}

/// Parse each non-blank line, tagging failures with the 1-based line number
pub fn parse_lines<T, F>(input: &str, mut parse: F) -> anyhow::Result<Vec<T>>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse(line.trim_end()).with_context(|| format!("line {}", idx + 1)))
        .collect()
}

/// Flatten an error chain into a [`ParseError::InvalidFormat`]
pub fn to_parse_error(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_all_values() {
        let ints: Vec<i32> = strings_to_ints(["3", "-4", " 5"]).unwrap();
        assert_eq!(ints, vec![3, -4, 5]);
    }

    #[test]
    fn reports_failing_index() {
        let err = strings_to_ints::<i32, _>(["1", "2", "x"]).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse value at index 2"));
    }

    #[test]
    fn line_numbers_skip_blank_lines_but_count_them() {
        let err = parse_lines("1\n\nfoo\n", |l| Ok(l.parse::<u8>()?)).unwrap_err();
        let parse_error = to_parse_error(err);
        match parse_error {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("line 3: "), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn fields_round_trip(values in prop::collection::vec(any::<i64>(), 0..20)) {
            let line = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("  ");
            prop_assert_eq!(fields_to_ints::<i64>(&line).unwrap(), values);
        }
    }
}
