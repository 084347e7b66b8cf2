//! Command implementations for contao-cli

pub mod activate;
pub mod cache;
pub mod config;
pub mod dispatch;
pub mod root;

pub use activate::run_activate;
pub use cache::run_clean_cache;
pub use config::run_config;
pub use dispatch::run_dispatch;
pub use root::run_root;

use std::path::Path;

use contao_core::{HostContext, InstallContext, RootPackage};
use contao_fs::NormalizedPath;

const MANIFEST_FILE: &str = "composer.json";

/// The project directory and its root package.
pub(crate) struct Project {
    pub dir: NormalizedPath,
    pub package: RootPackage,
}

impl Project {
    /// Load `composer.json` from `dir`. A missing manifest yields an empty
    /// root package.
    ///
    /// `dir` is canonicalized, so a relative `--project-dir` such as `.`
    /// still has its real parent as the default installation root.
    pub fn load(dir: &Path) -> crate::error::Result<Self> {
        let dir = NormalizedPath::canonicalize(dir)?;
        let manifest = dir.join(MANIFEST_FILE);

        let package = if manifest.is_file() {
            RootPackage::load(&manifest)?
        } else {
            tracing::debug!(path = %manifest, "No manifest, using an empty root package");
            RootPackage::new()
        };

        Ok(Self { dir, package })
    }

    pub fn context(&self) -> InstallContext {
        InstallContext::new(self.dir.clone())
    }

    pub fn into_host(self) -> (InstallContext, HostContext) {
        let context = self.context();
        (context, HostContext::new(self.package))
    }
}
