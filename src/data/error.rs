use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification shown to the user alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Directory or file could not be read.
    Filesystem,
    /// File was read but is not valid tabular CSV.
    Parse,
}

/// Everything that can go wrong while listing or loading CSV files.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("cannot list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no columns to parse in {}", path.display())]
    NoColumns { path: PathBuf },
}

impl BrowserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrowserError::ListDir { .. }
            | BrowserError::Open { .. }
            | BrowserError::Read { .. } => ErrorKind::Filesystem,
            BrowserError::Parse { .. } | BrowserError::NoColumns { .. } => ErrorKind::Parse,
        }
    }
}
