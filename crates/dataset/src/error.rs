use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a ranking table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file does not exist.
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Low-level IO failures other than a missing file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The delimited text could not be parsed.
    #[error("failed to parse dataset: {0}")]
    Parse(String),
    /// The input had no header row.
    #[error("dataset is empty: no header row")]
    Empty,
    /// A required column is absent after header normalization.
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return DatasetError::Parse(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => DatasetError::Io(io_err),
            other => DatasetError::Parse(format!("{other:?}")),
        }
    }
}
