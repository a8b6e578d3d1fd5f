//! Read-only store of puzzle inputs on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Puzzle inputs laid out as `{root}/{year}/day{day:02}.txt`
///
/// An explicit file, when given, stands in for every puzzle; the CLI only
/// allows that together with a single year and day.
#[derive(Debug, Clone)]
pub struct InputStore {
    root: PathBuf,
    file: Option<PathBuf>,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root, file: None }
    }

    /// Store that always reads `file`
    pub fn single(root: PathBuf, file: PathBuf) -> Self {
        Self {
            root,
            file: Some(file),
        }
    }

    /// Where the input for a year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.file {
            Some(file) => file.clone(),
            None => self
                .root
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(input) => {
                log::debug!("read {} bytes from {}", input.len(), path.display());
                Ok(input)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}
