//! Installation layout detection
//!
//! Contao 3 keeps its constants in `system/config/constants.php`, Contao 2 in
//! `system/constants.php`. The layout is probed in that order.

use crate::{ContaoPath, Error, NormalizedPath, Result};

/// Layout mode enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Contao 3 and later
    Contao3,
    /// Contao 2
    Contao2,
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contao3 => write!(f, "Contao 3"),
            Self::Contao2 => write!(f, "Contao 2"),
        }
    }
}

/// A detected Contao installation layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// The installation root
    pub root: NormalizedPath,
    /// Which constants file convention the root follows
    pub mode: LayoutMode,
}

impl InstallLayout {
    /// Detect the layout of the installation at `root`.
    ///
    /// Fails with [`Error::ConstantsNotFound`] when neither constants file
    /// exists; such a root is not a usable installation.
    pub fn detect(root: &NormalizedPath) -> Result<Self> {
        let mode = if root.join(ContaoPath::ConstantsV3.as_str()).is_file() {
            LayoutMode::Contao3
        } else if root.join(ContaoPath::ConstantsV2.as_str()).is_file() {
            LayoutMode::Contao2
        } else {
            return Err(Error::ConstantsNotFound {
                root: root.to_native(),
            });
        };

        tracing::debug!(root = %root, %mode, "Detected installation layout");

        Ok(Self {
            root: root.clone(),
            mode,
        })
    }

    /// Path of the constants file for this layout.
    pub fn constants_file(&self) -> NormalizedPath {
        match self.mode {
            LayoutMode::Contao3 => self.root.join(ContaoPath::ConstantsV3.as_str()),
            LayoutMode::Contao2 => self.root.join(ContaoPath::ConstantsV2.as_str()),
        }
    }
}
