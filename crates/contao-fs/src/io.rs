//! Reading legacy files and removing cache directories

use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Recursively delete a directory.
///
/// A directory that is already gone counts as removed. Errors that are
/// usually caused by another process touching the tree at the same time
/// (`DirectoryNotEmpty`, `ResourceBusy`, `Interrupted`) are retried for a
/// short while before giving up.
pub fn remove_dir_all(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_elapsed_time(Some(Duration::from_millis(500)))
        .build();

    let op = || match fs::remove_dir_all(&native_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) if is_transient(&e) => {
            tracing::debug!(path = %native_path.display(), error = %e, "Retrying removal");
            Err(backoff::Error::transient(e))
        }
        Err(e) => Err(backoff::Error::permanent(e)),
    };

    backoff::retry(policy, op).map_err(|e| {
        let source = match e {
            backoff::Error::Permanent(err) => err,
            backoff::Error::Transient { err, .. } => err,
        };
        Error::RemoveFailed {
            path: native_path.clone(),
            source,
        }
    })
}

fn is_transient(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::DirectoryNotEmpty | ErrorKind::ResourceBusy | ErrorKind::Interrupted
    )
}
