//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Failure to read a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file {} not found", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be read
    #[error("Input unavailable for {year}/{day}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver execution failed
    #[error("{0}")]
    Solver(#[from] advent_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two errors into a flat [`ExecutorError::Multiple`]
    ///
    /// Existing `Multiple` lists are concatenated rather than nested, keeping
    /// `first`'s errors ahead of `second`'s.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> ArcExecutorError {
        ExecutorError::ChannelSend.into()
    }

    fn count(err: &ArcExecutorError) -> usize {
        match err.inner() {
            ExecutorError::Multiple(v) => v.len(),
            _ => 1,
        }
    }

    #[test]
    fn combining_flattens() {
        let two = ArcExecutorError::combine(single(), single());
        assert_eq!(count(&two), 2);
        let three = ArcExecutorError::combine(two.clone(), single());
        assert_eq!(count(&three), 3);
        let four = ArcExecutorError::combine(single(), three);
        assert_eq!(count(&four), 4);
        let six = ArcExecutorError::combine(two.clone(), four);
        assert_eq!(count(&six), 6);
        assert_eq!(six.to_string(), "Multiple errors occurred (6 total)");
    }

    #[test]
    fn combine_opt_keeps_lone_error() {
        let err = ArcExecutorError::combine_opt(None, single());
        assert_eq!(count(&err), 1);
    }

    #[test]
    fn input_error_mentions_puzzle() {
        let err = ExecutorError::Input {
            year: 2024,
            day: 3,
            source: InputError::Missing(PathBuf::from("inputs/2024/day03.txt")),
        };
        assert_eq!(
            err.to_string(),
            "Input unavailable for 2024/3: input file inputs/2024/day03.txt not found"
        );
    }
}
