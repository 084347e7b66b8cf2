//! Error types for contao-legacy

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] contao_fs::Error),

    #[error("Unterminated {what} starting at line {line}")]
    Unterminated { what: &'static str, line: usize },

    #[error("Failed to parse {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}
