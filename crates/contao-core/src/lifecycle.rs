//! Lifecycle events emitted by the host
//!
//! Each event kind maps to a fixed sequence of actions:
//!
//! | Event | Actions |
//! |---|---|
//! | `pre-update-cmd` | config manipulation |
//! | `post-update-cmd` | resolve root, runonce stub, cache invalidation |
//! | `post-autoload-dump` | post-autoload handler |
//! | `pre-file-download` | none |
//!
//! Events are handled synchronously and completely, one at a time.

use std::fmt;

use contao_fs::NormalizedPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::cache::{CacheReport, clean_cache};
use crate::collaborators::Collaborators;
use crate::context::InstallContext;
use crate::host::{HostContext, Io};

/// Events the plugin reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Before dependencies are updated
    PreUpdateCmd,
    /// After dependencies have been updated and installed
    PostUpdateCmd,
    /// After the autoloader has been generated
    PostAutoloadDump,
    /// Before a package archive is downloaded
    PreFileDownload,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreUpdateCmd => write!(f, "pre-update-cmd"),
            Self::PostUpdateCmd => write!(f, "post-update-cmd"),
            Self::PostAutoloadDump => write!(f, "post-autoload-dump"),
            Self::PreFileDownload => write!(f, "pre-file-download"),
        }
    }
}

impl EventKind {
    /// Parse an event from its host name.
    ///
    /// `pre-update` and `post-update` are accepted as short forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pre-update-cmd" | "pre-update" => Some(Self::PreUpdateCmd),
            "post-update-cmd" | "post-update" => Some(Self::PostUpdateCmd),
            "post-autoload-dump" => Some(Self::PostAutoloadDump),
            "pre-file-download" => Some(Self::PreFileDownload),
            _ => None,
        }
    }

    /// List all canonical event names
    pub fn all_names() -> &'static [&'static str] {
        &[
            "pre-update-cmd",
            "post-update-cmd",
            "post-autoload-dump",
            "pre-file-download",
        ]
    }
}

/// An event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent {
    pub kind: EventKind,
    /// Event-specific data, passed through to collaborators untouched
    pub payload: Value,
}

impl LifecycleEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: Value::Null,
        }
    }

    /// Build an event from a host event name; `None` for events the plugin
    /// does not handle.
    pub fn from_name(name: &str, payload: Value) -> Option<Self> {
        EventKind::parse(name).map(|kind| Self { kind, payload })
    }
}

/// A side effect performed while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ManipulateConfig,
    CreateRunonce,
    CleanCache,
    PostAutoloadDump,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManipulateConfig => write!(f, "Config manipulation"),
            Self::CreateRunonce => write!(f, "Runonce creation"),
            Self::CleanCache => write!(f, "Cache cleaning"),
            Self::PostAutoloadDump => write!(f, "Post autoload dump"),
        }
    }
}

/// What handling one event did.
#[derive(Debug)]
pub struct DispatchReport {
    pub event: EventKind,
    /// Actions attempted, in order
    pub actions: Vec<Action>,
    /// Actions that failed and were reported as warnings
    pub failed: Vec<Action>,
    /// Installation root, for events that needed it
    pub root: Option<NormalizedPath>,
    pub cache: Option<CacheReport>,
}

impl DispatchReport {
    fn new(event: EventKind) -> Self {
        Self {
            event,
            actions: Vec::new(),
            failed: Vec::new(),
            root: None,
            cache: None,
        }
    }

    fn record(&mut self, io: &mut dyn Io, action: Action, result: Result<()>) {
        self.actions.push(action);
        if let Err(e) = result {
            tracing::warn!(%action, error = %e, "Collaborator failed");
            io.warn(&format!("{action} failed: {e}"));
            self.failed.push(action);
        }
    }
}

/// Handle one event.
///
/// Only failing to resolve the installation root is an error; collaborator
/// and cache failures are reported through `io` and recorded in the report.
pub fn dispatch<C: Collaborators>(
    event: &LifecycleEvent,
    ctx: &mut InstallContext,
    host: &mut HostContext,
    io: &mut dyn Io,
    collaborators: &mut C,
) -> Result<DispatchReport> {
    tracing::debug!(event = %event.kind, "Dispatching lifecycle event");
    let mut report = DispatchReport::new(event.kind);

    match event.kind {
        EventKind::PreUpdateCmd => {
            let result = collaborators.manipulate_config(io, host);
            report.record(io, Action::ManipulateConfig, result);
        }
        EventKind::PostUpdateCmd => {
            let root = ctx.resolve_root(host.package.extra())?;

            let result = collaborators.create_runonce(io, &root);
            report.record(io, Action::CreateRunonce, result);

            let cache = clean_cache(io, &root);
            report.actions.push(Action::CleanCache);
            if !cache.is_success() {
                report.failed.push(Action::CleanCache);
            }
            report.cache = Some(cache);
            report.root = Some(root);
        }
        EventKind::PostAutoloadDump => {
            let result = collaborators.post_autoload_dump(io, event);
            report.record(io, Action::PostAutoloadDump, result);
        }
        EventKind::PreFileDownload => {
            // Reserved extension point.
        }
    }

    Ok(report)
}
