//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The suite already holds the maximum number of test cases
    #[error("capacity error: a test suite holds at most {max} test cases")]
    Capacity { max: usize },

    /// A test case was requested by an index the suite doesn't have
    #[error("test id {id} is out of range, the suite holds {len} test cases")]
    TestIdOutOfRange { id: usize, len: usize },

    /// A value range whose lower bound lies above its upper bound
    #[error("invalid value range [{low}, {high}]")]
    InvalidRange { low: i64, high: i64 },

    /// More unique values were requested than the range contains
    #[error("cannot draw {requested} unique values from a range of {available} values")]
    RangeTooSmall { requested: usize, available: u128 },

    /// Creating or writing an output file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to an already opened stream (e.g. stdout) failed
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// Serialized test case not matching the line format
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub(crate) fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
