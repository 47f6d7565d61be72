use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use super::error::InputError;
use crate::scoring::RankRow;

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).trim(csv::Trim::All);
    builder
}

/// Lazy reader yielding one integer row per subject.
///
/// Every physical line is one subject. A blank line is a subject with no
/// items (it scores 0), so row `i` always corresponds to line `i + 1`.
/// The csv reader would skip blank lines, so lines are split here and
/// each one is parsed as a single record.
pub struct RowReader<R> {
    path: PathBuf,
    lines: Lines<BufReader<R>>,
    line: u64,
}

impl RowReader<File> {
    /// Open a ranking file from disk
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path, file))
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any byte source. `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, rdr: R) -> Self {
        Self {
            path: path.into(),
            lines: BufReader::new(rdr).lines(),
            line: 0,
        }
    }

    fn parse_line(&self, text: &str) -> Result<RankRow, InputError> {
        if text.is_empty() {
            return Ok(RankRow::new());
        }

        let record = match builder().from_reader(text.as_bytes()).records().next() {
            Some(Ok(record)) => record,
            Some(Err(source)) => {
                return Err(InputError::Csv {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                })
            }
            None => return Ok(RankRow::new()),
        };

        record
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                field.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                    path: self.path.clone(),
                    line: self.line,
                    column: idx + 1,
                    value: field.to_string(),
                })
            })
            .collect()
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RankRow, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lines.next()?;
        self.line += 1;
        Some(match result {
            Ok(text) => self.parse_line(&text),
            Err(source) => Err(InputError::Read {
                path: self.path.clone(),
                line: self.line,
                source,
            }),
        })
    }
}

/// Read every row of a ranking file, failing on the first bad line.
pub fn read_rows(path: &Path) -> Result<Vec<RankRow>, InputError> {
    RowReader::open(path)?.collect()
}
