//! Conventional paths inside a Contao installation and its project.

use std::path::Path;

/// Well-known locations, relative to the installation root (or, for
/// [`ContaoPath::VendorCore`], relative to the Composer project directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContaoPath {
    /// Contao 3+ constants file
    ConstantsV3,
    /// Contao 2 constants file
    ConstantsV2,
    /// Default configuration loaded for Contao 3+
    DefaultConfig,
    /// Configuration loaded for Contao 2
    LegacyConfig,
    /// Optional local overrides layered on top of the configuration
    LocalConfig,
    /// Parent of the internal cache directories
    CacheDir,
    /// Local artifact repository directory
    ArtifactPackages,
    /// Contao core installed as a Composer dependency
    VendorCore,
}

impl ContaoPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConstantsV3 => "system/config/constants.php",
            Self::ConstantsV2 => "system/constants.php",
            Self::DefaultConfig => "system/config/default.php",
            Self::LegacyConfig => "system/config/config.php",
            Self::LocalConfig => "system/config/localconfig.php",
            Self::CacheDir => "system/cache",
            Self::ArtifactPackages => "composer/packages",
            Self::VendorCore => "vendor/contao/core",
        }
    }
}

impl AsRef<Path> for ContaoPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ContaoPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ContaoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
