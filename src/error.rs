// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Export text that cannot be turned into a rectangular table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no table rows found")]
    NoHeader,

    #[error("line {line}: expected {expected} cells, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ParseError,
    },

    #[error("failed to load cache '{}': {source}", path.display())]
    Cache {
        path: PathBuf,
        source: csv::Error,
    },
}

/// An attribute cell that is present but not an integer.
#[derive(Debug, Error)]
#[error("column '{column}', row {row}: '{value}' is not an integer")]
pub struct NormalizationError {
    pub column: String,
    /// 1-based data row (header excluded).
    pub row: usize,
    pub value: String,
}

/// A scheme asked for a column this table does not have.
#[derive(Debug, Error)]
#[error("scheme '{scheme}' needs column '{column}', which the table does not have")]
pub struct ConfigurationError {
    pub scheme: &'static str,
    pub column: String,
}

#[derive(Debug, Error)]
#[error("unknown column '{0}'")]
pub struct ColumnNotFoundError(pub String);

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to normalize '{}': {source}", path.display())]
    Normalization {
        path: PathBuf,
        source: NormalizationError,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    ColumnNotFound(#[from] ColumnNotFoundError),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("CSV error in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
