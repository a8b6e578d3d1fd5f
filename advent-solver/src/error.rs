//! Error types for the solver framework

use thiserror::Error;

/// Error produced while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section of the input is missing
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error produced while answering a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or exceeds the solver's declared part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but has no answer for this part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a plain message as a [`SolveError::SolveFailed`]
    pub fn failed(msg: impl Into<String>) -> Self {
        SolveError::SolveFailed(msg.into().into())
    }
}

/// Error type for looking up and running a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A factory already exists for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
