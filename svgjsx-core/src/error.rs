use std::path::PathBuf;

use thiserror::Error;

/// Result type for svgjsx-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A file store operation failed.
    #[error("failed to {action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every numbered variant of the candidate is already taken.
    #[error("no free file name left for '{candidate}' after {attempts} attempts")]
    NoDistinctPath { candidate: PathBuf, attempts: u32 },
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
