//! Process-wide installation state
//!
//! The installation root, the framework constants and the global
//! configuration are resolved lazily and at most once. The context is
//! created when the plugin is activated and threaded through every call;
//! its `Option` fields are the initialization guards.

use contao_fs::NormalizedPath;
use contao_legacy::{Constants, LegacyConfig};

use crate::Result;
use crate::version::FrameworkVersion;

/// Memoized state about the Contao installation.
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Directory the host was started in
    pub(crate) cwd: NormalizedPath,
    pub(crate) root: Option<NormalizedPath>,
    pub(crate) constants: Option<Constants>,
    pub(crate) version: Option<FrameworkVersion>,
    pub(crate) config: Option<LegacyConfig>,
}

impl InstallContext {
    /// Create a context for a host running in `cwd`.
    ///
    /// A relative `cwd` is made absolute when the root is first resolved.
    pub fn new(cwd: impl Into<NormalizedPath>) -> Self {
        Self {
            cwd: cwd.into(),
            root: None,
            constants: None,
            version: None,
            config: None,
        }
    }

    /// Create a context for the process's current working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(NormalizedPath::current_dir()?))
    }

    pub fn cwd(&self) -> &NormalizedPath {
        &self.cwd
    }

    /// The installation root, if it has been resolved.
    pub fn root(&self) -> Option<&NormalizedPath> {
        self.root.as_ref()
    }

    /// The framework version, if the constants file has been loaded.
    pub fn version(&self) -> Option<&FrameworkVersion> {
        self.version.as_ref()
    }

    pub fn constants(&self) -> Option<&Constants> {
        self.constants.as_ref()
    }

    /// The global configuration, if it has been loaded.
    pub fn config(&self) -> Option<&LegacyConfig> {
        self.config.as_ref()
    }

    /// Whether both the constants and the configuration are loaded.
    pub fn is_bootstrapped(&self) -> bool {
        self.version.is_some() && self.config.is_some()
    }
}
