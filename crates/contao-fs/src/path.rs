//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Contao and Composer both build their paths by string concatenation, so
/// the plugin keeps paths in the same textual form and converts to a
/// platform-native `PathBuf` only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// The current working directory of the process, without UNC prefixes
    /// on Windows.
    pub fn current_dir() -> crate::Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| crate::Error::io(".", e))?;
        Self::canonicalize(cwd)
    }

    /// Canonicalize an existing path, without UNC prefixes on Windows.
    ///
    /// Relative paths are taken relative to the process's working directory.
    pub fn canonicalize(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let canonical = dunce::canonicalize(path).map_err(|e| crate::Error::io(path, e))?;
        Ok(Self::new(canonical))
    }

    /// This path if it is absolute and free of `.`/`..` segments, otherwise
    /// its canonical form. Textual operations such as [`parent`](Self::parent)
    /// are only meaningful on the former.
    pub fn to_absolute(&self) -> crate::Result<Self> {
        if self.is_absolute() && !self.has_dot_segments() {
            Ok(self.clone())
        } else {
            Self::canonicalize(self.to_native())
        }
    }

    fn has_dot_segments(&self) -> bool {
        self.inner.split('/').any(|segment| segment == "." || segment == "..")
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment_normalized = segment.as_ref().replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Resolve `segment` against this path.
    ///
    /// Absolute segments (leading slash or a drive letter) replace the base,
    /// relative ones are joined onto it.
    pub fn resolve(&self, segment: &str) -> Self {
        let candidate = Self::new(segment);
        if candidate.is_absolute() {
            candidate
        } else {
            self.join(segment)
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Whether the path is absolute, either rooted or carrying a drive letter.
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 3
                && bytes[0].is_ascii_alphabetic()
                && bytes[1] == b':'
                && bytes[2] == b'/')
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
