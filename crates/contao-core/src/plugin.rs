//! Plugin entry points
//!
//! The host activates the plugin once per run and then delivers lifecycle
//! events through the subscribed handlers.

use contao_fs::NormalizedPath;
use serde_json::Value;

use crate::Result;
use crate::collaborators::Collaborators;
use crate::context::InstallContext;
use crate::host::{HostContext, InstallerDescriptor, Io};
use crate::lifecycle::{self, DispatchReport, EventKind, LifecycleEvent};
use crate::registrar::{register_artifact_repository_if_present, register_legacy_repository};
use crate::requires::{PLUGIN_CONSTRAINT, PLUGIN_PACKAGE, ensure_requirement};

/// Host event subscriptions: event identifier to handler name.
pub const SUBSCRIBED_EVENTS: &[(&str, &str)] = &[
    ("command", "handle_command"),
    ("pre-file-download", "handle_pre_download"),
];

/// What activation changed in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub root: NormalizedPath,
    /// Whether the plugin requirement was added to the root package
    pub requirement_injected: bool,
    /// Whether the local artifact repository was registered
    pub artifact_repository: bool,
}

/// The Contao installer plugin.
#[derive(Debug)]
pub struct Plugin<C> {
    context: InstallContext,
    collaborators: C,
}

impl<C: Collaborators> Plugin<C> {
    pub fn new(context: InstallContext, collaborators: C) -> Self {
        Self {
            context,
            collaborators,
        }
    }

    pub fn context(&self) -> &InstallContext {
        &self.context
    }

    pub fn collaborators(&self) -> &C {
        &self.collaborators
    }

    /// Event subscriptions to register with the host.
    pub fn subscribed_events() -> &'static [(&'static str, &'static str)] {
        SUBSCRIBED_EVENTS
    }

    /// Wire the plugin into the host.
    ///
    /// Registers the module installer, injects the plugin requirement,
    /// then resolves the installation root and registers the artifact and
    /// legacy repositories, in that order. Changes made before a failing
    /// step stay in place.
    pub fn activate(&mut self, host: &mut HostContext, _io: &mut dyn Io) -> Result<Activation> {
        host.installers.push(InstallerDescriptor::module_installer());

        let requirement_injected =
            ensure_requirement(&mut host.package, PLUGIN_PACKAGE, PLUGIN_CONSTRAINT);

        let root = self.context.resolve_root(host.package.extra())?;
        let artifact_repository = register_artifact_repository_if_present(host, &root);
        register_legacy_repository(host);

        tracing::info!(
            root = %root,
            requirement_injected,
            artifact_repository,
            "Plugin activated"
        );

        Ok(Activation {
            root,
            requirement_injected,
            artifact_repository,
        })
    }

    /// Handle a host command event.
    pub fn handle_command(
        &mut self,
        event: &LifecycleEvent,
        host: &mut HostContext,
        io: &mut dyn Io,
    ) -> Result<DispatchReport> {
        lifecycle::dispatch(event, &mut self.context, host, io, &mut self.collaborators)
    }

    /// Handle a pre-download event. Reserved; does nothing yet.
    pub fn handle_pre_download(
        &mut self,
        event: &LifecycleEvent,
        host: &mut HostContext,
        io: &mut dyn Io,
    ) -> Result<DispatchReport> {
        lifecycle::dispatch(event, &mut self.context, host, io, &mut self.collaborators)
    }

    /// Route an event to its subscribed handler.
    pub fn dispatch(
        &mut self,
        event: &LifecycleEvent,
        host: &mut HostContext,
        io: &mut dyn Io,
    ) -> Result<DispatchReport> {
        match event.kind {
            EventKind::PreFileDownload => self.handle_pre_download(event, host, io),
            EventKind::PreUpdateCmd | EventKind::PostUpdateCmd | EventKind::PostAutoloadDump => {
                self.handle_command(event, host, io)
            }
        }
    }

    /// Route an event by host name. Unknown names are ignored.
    pub fn dispatch_named(
        &mut self,
        name: &str,
        payload: Value,
        host: &mut HostContext,
        io: &mut dyn Io,
    ) -> Result<Option<DispatchReport>> {
        let Some(event) = LifecycleEvent::from_name(name, payload) else {
            tracing::debug!(event = name, "Ignoring unsubscribed event");
            return Ok(None);
        };
        self.dispatch(&event, host, io).map(Some)
    }
}
