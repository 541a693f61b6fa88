use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::SummaryError;

/// Lazily parsed measurements from a one-value-per-line text file.
///
/// The file handle lives exactly as long as the series; dropping it (after
/// exhaustion or on the first error) closes the file. Empty lines are skipped;
/// every other line is trimmed and must parse as a float.
#[derive(Debug)]
pub struct MeasurementSeries {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_index: usize,
}

impl MeasurementSeries {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SummaryError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "opened measurement source");

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_index: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for MeasurementSeries {
    type Item = Result<f64, SummaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            self.line_index += 1;

            let raw = match raw {
                Ok(raw) => raw,
                Err(source) => {
                    return Some(Err(SummaryError::Read {
                        path: self.path.clone(),
                        line: self.line_index,
                        source,
                    }))
                }
            };

            // `lines` already strips `\n` and `\r\n`; whitespace-only lines go to the parser.
            if raw.is_empty() {
                continue;
            }
            let trimmed = raw.trim();

            return Some(trimmed.parse::<f64>().map_err(|source| SummaryError::Parse {
                path: self.path.clone(),
                line: self.line_index,
                value: trimmed.to_string(),
                source,
            }));
        }
    }
}
