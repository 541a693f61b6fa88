use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line} of {}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("{} line {line} is not a number ({value:?}): {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}
