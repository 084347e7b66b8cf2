//! Error types for contao-core

use std::path::PathBuf;

/// Result type for contao-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in contao-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The constants file does not define the framework version
    #[error("Could not detect the Contao version: {path} does not define VERSION")]
    MissingVersion { path: PathBuf },

    /// The framework version is not a dotted numeric version
    #[error("Invalid Contao version '{version}'")]
    InvalidVersion { version: String },

    /// The version-specific configuration file is missing
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// The project manifest has an unexpected shape
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// An external collaborator reported a failure
    #[error("{action} failed: {message}")]
    Collaborator { action: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from contao-fs
    #[error(transparent)]
    Fs(#[from] contao_fs::Error),

    /// Legacy file error from contao-legacy
    #[error(transparent)]
    Legacy(#[from] contao_legacy::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn collaborator(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator {
            action: action.into(),
            message: message.into(),
        }
    }
}
