//! Installation layout scenarios
//!
//! Each test builds an on-disk installation the way it is found in the wild
//! and runs plugin activation against it.

use contao_core::{
    BufferedIo, HostContext, InstallContext, LEGACY_REPOSITORY_URL, NoopCollaborators,
    PLUGIN_PACKAGE, Plugin, RepositoryKind, RootPackage, locate_root,
};
use contao_fs::{InstallLayout, LayoutMode, NormalizedPath};
use contao_legacy::LegacyValue;
use contao_test_utils::install;
use contao_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use serde_json::json;

fn activate(cwd: impl Into<NormalizedPath>, manifest: &str) -> (Plugin<NoopCollaborators>, HostContext) {
    let mut host = HostContext::new(RootPackage::parse(manifest).unwrap());
    let mut plugin = Plugin::new(InstallContext::new(cwd), NoopCollaborators);
    plugin.activate(&mut host, &mut BufferedIo::new()).unwrap();
    (plugin, host)
}

// =============================================================================
// Root location
// =============================================================================

#[test]
fn explicit_root_is_relative_to_working_directory() {
    let root = locate_root(
        &NormalizedPath::new("/srv/site"),
        &json!({"contao": {"root": "app"}}),
    );
    assert_eq!(root.as_str(), "/srv/site/app");
}

#[test]
fn classic_layout_uses_parent_of_composer_directory() {
    let project = TestProject::new();
    project.contao3_at(".", "3.5.1");
    project.composer_json("composer", r#"{"name": "local/website"}"#);

    let (plugin, host) = activate(project.path("composer"), r#"{"name": "local/website"}"#);

    let root = NormalizedPath::new(project.root());
    assert_eq!(plugin.context().root(), Some(&root));
    assert_eq!(InstallLayout::detect(&root).unwrap().mode, LayoutMode::Contao3);
    assert_eq!(host.package.requires()[PLUGIN_PACKAGE], "*");
}

#[test]
fn vendored_core_is_used_without_override() {
    let project = TestProject::new();
    project.contao3_at("vendor/contao/core", "3.5.2");

    let (plugin, _host) = activate(project.root(), "{}");

    assert_eq!(
        plugin.context().root(),
        Some(&NormalizedPath::new(project.path("vendor/contao/core")))
    );
    assert_eq!(plugin.context().version().unwrap().as_str(), "3.5.2");
}

#[test]
fn empty_explicit_root_falls_back_to_defaults() {
    let project = TestProject::new();
    project.contao3_at("vendor/contao/core", "3.5.2");

    let (plugin, _host) = activate(project.root(), r#"{"extra": {"contao": {"root": "0"}}}"#);

    assert_eq!(
        plugin.context().root(),
        Some(&NormalizedPath::new(project.path("vendor/contao/core")))
    );
}

// =============================================================================
// Legacy bootstrap
// =============================================================================

#[test]
fn contao2_installation_layers_localconfig_over_config() {
    let project = TestProject::new();
    project.contao2_at(".", "2.11.7");
    project.write(
        "system/config/localconfig.php",
        &install::localconfig(&[
            ("websiteTitle", "'Acme Corp'"),
            ("displayErrors", "true"),
            ("adminEmail", "'admin@example.org'"),
            ("inactiveModules", "array('calendar', 'news')"),
        ]),
    );

    let (plugin, _host) = activate(project.path("composer"), "{}");

    let context = plugin.context();
    assert_eq!(context.version().unwrap().major(), 2);
    assert_eq!(context.constants().unwrap().build(), Some("0".to_string()));

    let config = context.config().unwrap();
    assert_eq!(config.get_str("websiteTitle"), Some("Acme Corp"));
    assert_eq!(config.get_bool("displayErrors"), Some(true));
    assert_eq!(config.get_str("characterSet"), Some("utf-8"));
    assert_eq!(config.get_int("maxResultsPerPage"), Some(500));
    assert_eq!(
        config.get("inactiveModules"),
        Some(&LegacyValue::List(vec![
            LegacyValue::Str("calendar".to_string()),
            LegacyValue::Str("news".to_string()),
        ]))
    );
}

#[test]
fn contao3_constants_inside_conditionals_are_not_defined() {
    let project = TestProject::new();
    project.contao3_at(".", "3.5.1");

    let (plugin, _host) = activate(project.path("composer"), "{}");

    let constants = plugin.context().constants().unwrap();
    assert_eq!(constants.get("LONG_TERM_SUPPORT"), Some(&LegacyValue::Bool(true)));
    assert!(!constants.contains("BYPASS_TOKEN_CHECK"));
    // Expressions that need PHP to evaluate are kept verbatim.
    assert!(matches!(
        plugin.context().config().unwrap().get("timeZone"),
        Some(LegacyValue::Expr(_))
    ));
}

// =============================================================================
// Repositories
// =============================================================================

#[test]
fn repositories_are_appended_after_user_repositories() {
    let project = TestProject::new();
    project.contao3_at(".", "3.5.1");
    project.artifacts_at(".");

    let mut host = HostContext::new(RootPackage::new());
    host.repositories.add(contao_core::RepositoryDescriptor::new(
        RepositoryKind::Composer,
        "https://packages.example.org",
    ));
    let mut plugin = Plugin::new(InstallContext::new(project.path("composer")), NoopCollaborators);
    plugin.activate(&mut host, &mut BufferedIo::new()).unwrap();

    let kinds: Vec<_> = host.repositories.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RepositoryKind::Composer, RepositoryKind::Artifact, RepositoryKind::Composer]
    );
    assert_eq!(host.repositories.as_slice()[2].url, LEGACY_REPOSITORY_URL);
}
