//! Invalidation of Contao's internal cache

use contao_fs::{ContaoPath, NormalizedPath};

use crate::host::Io;

/// Subdirectories of `system/cache` rebuilt by Contao on demand.
pub const CACHE_DIRS: [&str; 4] = ["config", "dca", "language", "sql"];

/// A cache directory that could not be removed.
#[derive(Debug)]
pub struct CacheFailure {
    pub dir: String,
    pub error: contao_fs::Error,
}

/// Outcome of [`clean_cache`].
#[derive(Debug, Default)]
pub struct CacheReport {
    /// Directories that were removed
    pub removed: Vec<String>,
    /// Directories that did not exist
    pub skipped: Vec<String>,
    pub failures: Vec<CacheFailure>,
}

impl CacheReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Remove the internal cache directories below `<root>/system/cache`.
///
/// Every directory is attempted independently. Failures are collected and
/// reported as warnings once all four have been processed.
pub fn clean_cache(io: &mut dyn Io, root: &NormalizedPath) -> CacheReport {
    clean_cache_with(io, root, contao_fs::io::remove_dir_all)
}

/// [`clean_cache`] with a custom directory remover.
pub fn clean_cache_with<F>(io: &mut dyn Io, root: &NormalizedPath, mut remove: F) -> CacheReport
where
    F: FnMut(&NormalizedPath) -> contao_fs::Result<()>,
{
    let cache_root = root.join(ContaoPath::CacheDir.as_str());
    let mut report = CacheReport::default();

    for dir in CACHE_DIRS {
        let path = cache_root.join(dir);
        if !path.is_dir() {
            report.skipped.push(dir.to_string());
            continue;
        }

        io.write(&format!("Clean contao internal {dir} cache"));
        match remove(&path) {
            Ok(()) => report.removed.push(dir.to_string()),
            Err(error) => {
                tracing::warn!(path = %path, %error, "Failed to remove cache directory");
                report.failures.push(CacheFailure {
                    dir: dir.to_string(),
                    error,
                });
            }
        }
    }

    for failure in &report.failures {
        io.warn(&format!(
            "Could not clean contao internal {} cache: {}",
            failure.dir, failure.error
        ));
    }

    report
}
