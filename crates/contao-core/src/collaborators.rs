//! External collaborators invoked from lifecycle events
//!
//! Config manipulation, runonce generation and the post-autoload step are
//! implemented elsewhere. The orchestrator only knows their call contracts.

use contao_fs::NormalizedPath;

use crate::Result;
use crate::host::{HostContext, Io};
use crate::lifecycle::LifecycleEvent;

/// The side-effecting tools the orchestrator drives.
pub trait Collaborators {
    /// Adjust the host configuration before an update (`pre-update-cmd`).
    fn manipulate_config(&mut self, io: &mut dyn Io, host: &mut HostContext) -> Result<()>;

    /// Write the global runonce stub into the installation root.
    fn create_runonce(&mut self, io: &mut dyn Io, root: &NormalizedPath) -> Result<()>;

    /// Hook run after the autoloader has been dumped.
    fn post_autoload_dump(&mut self, io: &mut dyn Io, event: &LifecycleEvent) -> Result<()>;
}

/// Collaborators that do nothing besides logging the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollaborators;

impl Collaborators for NoopCollaborators {
    fn manipulate_config(&mut self, _io: &mut dyn Io, _host: &mut HostContext) -> Result<()> {
        tracing::debug!("No config manipulator configured");
        Ok(())
    }

    fn create_runonce(&mut self, _io: &mut dyn Io, root: &NormalizedPath) -> Result<()> {
        tracing::debug!(root = %root, "No runonce writer configured");
        Ok(())
    }

    fn post_autoload_dump(&mut self, _io: &mut dyn Io, event: &LifecycleEvent) -> Result<()> {
        tracing::debug!(event = %event.kind, "No post-autoload handler configured");
        Ok(())
    }
}
