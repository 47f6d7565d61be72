use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a ranking file. Every variant names the file,
/// and the row-level ones carry the 1-based line number.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file {}, line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },
    #[error("file {}, line {line}: {source}", path.display())]
    Csv {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("file {}, line {line}: column {column} is not an integer: '{value}'", path.display())]
    InvalidInteger {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },
}

impl InputError {
    pub fn line(&self) -> Option<u64> {
        match self {
            InputError::Open { .. } => None,
            InputError::Read { line, .. }
            | InputError::Csv { line, .. }
            | InputError::InvalidInteger { line, .. } => Some(*line),
        }
    }
}
