//! Fatal error taxonomy for a session.
//!
//! Per-URL failures never show up here; they are classified inside the
//! validator and end up in the invalid-URL set instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A referenced input file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing a URL file failed for another reason.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but could not be parsed.
    #[error("invalid config at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl SessionError {
    /// Maps an I/O error on `path`, turning `NotFound` into its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            SessionError::NotFound { path }
        } else {
            SessionError::Io { path, source }
        }
    }
}
