use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// An enum for describing and handling the errors encountered while reading
/// git history, parsing it, or writing any of the generated files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to query git with `{command}`: {reason}")]
    Acquisition { command: String, reason: String },

    #[error("failed to parse '{value}' as a commit date")]
    DateFormat {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("malformed log record: {0:?}")]
    MalformedRecord(String),

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("non-ASCII chars found: {0:?}")]
    NonAscii(Vec<char>),

    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot get current directory")]
    CurrentDir,

    #[error("fatal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
