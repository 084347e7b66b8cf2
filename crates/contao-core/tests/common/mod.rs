//! Test doubles shared by the contao-core integration tests.

use contao_core::{Collaborators, Error, HostContext, Io, LifecycleEvent, Result};
use contao_fs::NormalizedPath;

/// One collaborator call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ManipulateConfig,
    CreateRunonce(NormalizedPath),
    PostAutoloadDump(serde_json::Value),
}

/// Collaborators that record every call and announce it through `io`, so
/// ordering against the plugin's own output can be asserted.
#[derive(Debug, Default)]
pub struct RecordingCollaborators {
    pub calls: Vec<Call>,
    /// Calls that should fail, matched by name
    pub failing: Vec<&'static str>,
}

impl RecordingCollaborators {
    pub fn failing(names: &[&'static str]) -> Self {
        Self {
            calls: Vec::new(),
            failing: names.to_vec(),
        }
    }

    fn outcome(&self, name: &'static str) -> Result<()> {
        if self.failing.contains(&name) {
            Err(Error::collaborator(name, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl Collaborators for RecordingCollaborators {
    fn manipulate_config(&mut self, io: &mut dyn Io, _host: &mut HostContext) -> Result<()> {
        io.write("manipulate config");
        self.calls.push(Call::ManipulateConfig);
        self.outcome("manipulate_config")
    }

    fn create_runonce(&mut self, io: &mut dyn Io, root: &NormalizedPath) -> Result<()> {
        io.write("create runonce");
        self.calls.push(Call::CreateRunonce(root.clone()));
        self.outcome("create_runonce")
    }

    fn post_autoload_dump(&mut self, io: &mut dyn Io, event: &LifecycleEvent) -> Result<()> {
        io.write("post autoload dump");
        self.calls.push(Call::PostAutoloadDump(event.payload.clone()));
        self.outcome("post_autoload_dump")
    }
}
