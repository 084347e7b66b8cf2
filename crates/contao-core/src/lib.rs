//! Core of the Contao Composer plugin
//!
//! This crate ties the Contao installation to the dependency manager's
//! lifecycle:
//!
//! - **Root resolution**: find the installation root and load the legacy
//!   constants and configuration exactly once ([`InstallContext`])
//! - **Repository registration**: local artifact directory and the legacy
//!   package mirror ([`registrar`])
//! - **Requirement injection**: keep the plugin package required ([`requires`])
//! - **Lifecycle orchestration**: map host events to side effects ([`lifecycle`])
//!
//! # Architecture
//!
//! ```text
//!                  contao-cli
//!                      |
//!                 contao-core
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!      contao-fs  <---------  contao-legacy
//! ```
//!
//! # Example
//!
//! ```no_run
//! use contao_core::{BufferedIo, HostContext, InstallContext, NoopCollaborators, Plugin, RootPackage};
//!
//! fn example() -> contao_core::Result<()> {
//!     let package = RootPackage::load(&"composer.json".into())?;
//!     let mut host = HostContext::new(package);
//!     let mut io = BufferedIo::new();
//!
//!     let mut plugin = Plugin::new(InstallContext::from_current_dir()?, NoopCollaborators);
//!     plugin.activate(&mut host, &mut io)?;
//!     plugin.dispatch_named("post-update-cmd", serde_json::Value::Null, &mut host, &mut io)?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod collaborators;
pub mod context;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod locator;
pub mod package;
pub mod plugin;
pub mod registrar;
pub mod requires;
pub mod version;

pub use cache::{CACHE_DIRS, CacheFailure, CacheReport, clean_cache, clean_cache_with};
pub use collaborators::{Collaborators, NoopCollaborators};
pub use context::InstallContext;
pub use error::{Error, Result};
pub use host::{
    BufferedIo, HostContext, InstallerDescriptor, Io, IoMessage, RepositoryDescriptor,
    RepositoryKind, RepositorySet,
};
pub use lifecycle::{Action, DispatchReport, EventKind, LifecycleEvent};
pub use locator::locate_root;
pub use package::RootPackage;
pub use plugin::{Activation, Plugin, SUBSCRIBED_EVENTS};
pub use registrar::{
    LEGACY_REPOSITORY_URL, register_artifact_repository_if_present, register_legacy_repository,
};
pub use requires::{PLUGIN_CONSTRAINT, PLUGIN_PACKAGE, ensure_requirement};
pub use version::FrameworkVersion;
