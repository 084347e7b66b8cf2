//! Error types for contao-fs

use std::path::PathBuf;

/// Result type for contao-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in contao-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the Contao 3 nor the Contao 2 constants file exists.
    #[error("Could not find constants.php in {root}")]
    ConstantsNotFound { root: PathBuf },

    #[error("Failed to remove {path} after retrying: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
