//! The host runtime as seen by the plugin
//!
//! The dependency manager owns the root package, the repository set, the
//! installer set and the user-facing output channel. The plugin mutates
//! them in place and never removes or reorders what is already there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::package::RootPackage;

/// User-visible output channel.
pub trait Io {
    /// Write an informational line.
    fn write(&mut self, message: &str);

    /// Write a warning line.
    fn warn(&mut self, message: &str);
}

/// A line written to a [`BufferedIo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoMessage {
    Info(String),
    Warning(String),
}

/// An [`Io`] that keeps everything in memory.
#[derive(Debug, Default)]
pub struct BufferedIo {
    messages: Vec<IoMessage>,
}

impl BufferedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[IoMessage] {
        &self.messages
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                IoMessage::Info(s) => Some(s.as_str()),
                IoMessage::Warning(_) => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                IoMessage::Warning(s) => Some(s.as_str()),
                IoMessage::Info(_) => None,
            })
            .collect()
    }
}

impl Io for BufferedIo {
    fn write(&mut self, message: &str) {
        self.messages.push(IoMessage::Info(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.messages.push(IoMessage::Warning(message.to_string()));
    }
}

/// Repository types the plugin registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    /// A local directory of package archives
    Artifact,
    /// A remote Composer repository
    Composer,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact => write!(f, "artifact"),
            Self::Composer => write!(f, "composer"),
        }
    }
}

/// A repository entry in the shape Composer uses in `repositories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    #[serde(rename = "type")]
    pub kind: RepositoryKind,
    pub url: String,
}

impl RepositoryDescriptor {
    pub fn new(kind: RepositoryKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// The host's ordered, append-only repository set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositorySet {
    repositories: Vec<RepositoryDescriptor>,
}

impl RepositorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a repository after all existing ones.
    pub fn add(&mut self, repository: RepositoryDescriptor) {
        self.repositories.push(repository);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryDescriptor> {
        self.repositories.iter()
    }

    pub fn as_slice(&self) -> &[RepositoryDescriptor] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

/// Package types handled by the Contao module installer.
pub const MODULE_PACKAGE_TYPES: [&str; 2] = ["contao-module", "legacy-contao-module"];

/// An installer registered with the host's installation manager.
///
/// The installer itself (shadow copies and symlinks into the Contao tree)
/// lives outside this crate; only its registration is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallerDescriptor {
    pub name: String,
    pub package_types: Vec<String>,
}

impl InstallerDescriptor {
    /// The installer deploying Contao modules into the installation root.
    pub fn module_installer() -> Self {
        Self {
            name: "contao-module-installer".to_string(),
            package_types: MODULE_PACKAGE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn supports(&self, package_type: &str) -> bool {
        self.package_types.iter().any(|t| t == package_type)
    }
}

/// Mutable host state shared with the plugin.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    pub package: RootPackage,
    pub repositories: RepositorySet,
    pub installers: Vec<InstallerDescriptor>,
}

impl HostContext {
    pub fn new(package: RootPackage) -> Self {
        Self {
            package,
            repositories: RepositorySet::new(),
            installers: Vec::new(),
        }
    }
}
