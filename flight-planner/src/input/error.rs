//! Flight loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while loading flights from CSV.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input file could not be opened
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row could not be read
    #[error("invalid CSV header: {0}")]
    Header(#[source] csv::Error),

    /// Header row lacks a required column
    #[error("missing column {0:?}")]
    MissingColumn(&'static str),

    /// Row could not be read or a field has the wrong type
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Row parsed but does not describe a valid flight
    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: DomainError,
    },
}

impl LoadError {
    /// 1-based data row that failed, if the error is tied to a row.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::Csv { row, .. } | LoadError::Record { row, .. } => Some(*row),
            LoadError::Io { .. } | LoadError::Header(_) | LoadError::MissingColumn(_) => None,
        }
    }
}
