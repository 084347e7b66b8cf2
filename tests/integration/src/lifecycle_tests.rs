//! A full host run: activation followed by every subscribed event.

use contao_core::{
    Action, BufferedIo, Collaborators, EventKind, HostContext, InstallContext, Io, IoMessage,
    LifecycleEvent, Plugin, Result, RootPackage,
};
use contao_fs::NormalizedPath;
use contao_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Writes a marker line per call and creates the runonce file like the real
/// writer does.
#[derive(Default)]
struct MarkerCollaborators;

impl Collaborators for MarkerCollaborators {
    fn manipulate_config(&mut self, io: &mut dyn Io, host: &mut HostContext) -> Result<()> {
        io.write(&format!(
            "manipulate config ({} requirements)",
            host.package.requires().len()
        ));
        Ok(())
    }

    fn create_runonce(&mut self, io: &mut dyn Io, root: &NormalizedPath) -> Result<()> {
        let path = root.join("system/runonce.php");
        std::fs::write(path.to_native(), "<?php\n")?;
        io.write(&format!("runonce at {}", path.as_str()));
        Ok(())
    }

    fn post_autoload_dump(&mut self, io: &mut dyn Io, event: &LifecycleEvent) -> Result<()> {
        io.write(&format!("post autoload {}", event.payload));
        Ok(())
    }
}

#[test]
fn host_run_over_vendored_installation() {
    let project = TestProject::new();
    let core = project.contao3_at("vendor/contao/core", "3.5.1");
    project.cache_dirs_at("vendor/contao/core", &["dca", "sql"]);

    let mut host = HostContext::new(RootPackage::parse(r#"{"require": {"contao/core": "3.5.*"}}"#).unwrap());
    let mut plugin = Plugin::new(InstallContext::new(project.root()), MarkerCollaborators);
    let mut io = BufferedIo::new();

    let activation = plugin.activate(&mut host, &mut io).unwrap();
    assert_eq!(activation.root, NormalizedPath::new(&core));

    let run = [
        ("pre-update-cmd", json!(null)),
        ("pre-file-download", json!({"url": "https://example.org/a.zip"})),
        ("post-update-cmd", json!(null)),
        ("post-autoload-dump", json!({"optimize": true})),
        ("post-package-install", json!(null)),
    ];
    let mut handled = Vec::new();
    for (name, payload) in run {
        if let Some(report) = plugin
            .dispatch_named(name, payload, &mut host, &mut io)
            .unwrap()
        {
            handled.push((report.event, report.actions));
        }
    }

    assert_eq!(
        handled,
        vec![
            (EventKind::PreUpdateCmd, vec![Action::ManipulateConfig]),
            (EventKind::PreFileDownload, vec![]),
            (EventKind::PostUpdateCmd, vec![Action::CreateRunonce, Action::CleanCache]),
            (EventKind::PostAutoloadDump, vec![Action::PostAutoloadDump]),
        ]
    );

    let runonce = NormalizedPath::new(&core).join("system/runonce.php");
    assert_eq!(
        io.messages(),
        &[
            // The plugin requirement is already injected when config is manipulated.
            IoMessage::Info("manipulate config (2 requirements)".to_string()),
            IoMessage::Info(format!("runonce at {}", runonce.as_str())),
            IoMessage::Info("Clean contao internal dca cache".to_string()),
            IoMessage::Info("Clean contao internal sql cache".to_string()),
            IoMessage::Info("post autoload {\"optimize\":true}".to_string()),
        ]
    );

    assert!(runonce.is_file());
    project.assert_not_exists("vendor/contao/core/system/cache/dca");
    project.assert_not_exists("vendor/contao/core/system/cache/sql");
}

#[test]
fn post_update_without_prior_activation_resolves_root_itself() {
    let project = TestProject::new();
    project.contao2_at(".", "2.11.7");
    project.cache_dirs_at(".", &["language"]);

    let mut host = HostContext::default();
    let mut plugin = Plugin::new(InstallContext::new(project.path("composer")), MarkerCollaborators);
    let mut io = BufferedIo::new();

    let report = plugin
        .dispatch(&LifecycleEvent::new(EventKind::PostUpdateCmd), &mut host, &mut io)
        .unwrap();

    assert_eq!(report.root, Some(NormalizedPath::new(project.root())));
    assert!(report.cache.unwrap().is_success());
    project.assert_exists("system/runonce.php");
    project.assert_not_exists("system/cache/language");
}
