use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a sample file was rejected.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file is too large ({size_kib:.1} KiB, limit is {max_kib} KiB)")]
    TooLarge { size_kib: f64, max_kib: u64 },
    #[error("file is empty")]
    Empty,
    #[error("cannot open file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Discriminant of [`LoadError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    TooLarge,
    Empty,
    Unreadable,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::TooLarge { .. } => LoadErrorKind::TooLarge,
            LoadError::Empty => LoadErrorKind::Empty,
            LoadError::Unreadable { .. } => LoadErrorKind::Unreadable,
        }
    }

    /// Message for a dialog or status line, asking for a different file.
    pub fn user_message(&self) -> String {
        format!("{self}, please choose another file")
    }
}
