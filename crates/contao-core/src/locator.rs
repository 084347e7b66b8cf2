//! Installation root resolution and bootstrap loading
//!
//! The root is looked up once per context:
//!
//! 1. `extra.contao.root` from the root package, relative to the working
//!    directory
//! 2. `vendor/contao/core` below the working directory, when present
//! 3. otherwise the parent of the working directory (the classic
//!    `<contao>/composer/composer.json` layout)
//!
//! After the root is known, the constants file and the version-specific
//! configuration are loaded unless the context already holds them.

use contao_fs::{ContaoPath, InstallLayout, NormalizedPath};
use contao_legacy::{Constants, LegacyConfig, LegacyDocument};
use serde_json::Value;

use crate::context::InstallContext;
use crate::version::FrameworkVersion;
use crate::{Error, Result};

/// Section of the root package's `extra` holding plugin settings.
pub const EXTRA_SECTION: &str = "contao";

/// Key inside [`EXTRA_SECTION`] naming an explicit installation root.
pub const EXTRA_ROOT_KEY: &str = "root";

/// Compute the installation root candidate without touching the context.
///
/// `cwd` is expected to be absolute; the fallback to its parent is purely
/// textual. At the filesystem root, which has no parent, the root itself is
/// used.
pub fn locate_root(cwd: &NormalizedPath, extra: &Value) -> NormalizedPath {
    if let Some(explicit) = explicit_root(extra) {
        let root = cwd.resolve(&explicit);
        tracing::debug!(root = %root, "Using root from extra.contao.root");
        return root;
    }

    let vendor_root = cwd.join(ContaoPath::VendorCore.as_str());
    if vendor_root.is_dir() {
        tracing::debug!(root = %vendor_root, "Using vendored Contao core");
        return vendor_root;
    }

    let root = cwd.parent().unwrap_or_else(|| cwd.clone());
    tracing::debug!(root = %root, "Using parent of working directory");
    root
}

/// `extra.contao.root` as a path, if it is set and not empty.
///
/// Emptiness follows PHP: `""`, `"0"`, `0` and `null` count as unset.
/// Numbers are taken as their decimal text, other non-string values are
/// ignored.
fn explicit_root(extra: &Value) -> Option<String> {
    match extra.get(EXTRA_SECTION)?.get(EXTRA_ROOT_KEY)? {
        Value::String(root) if !root.is_empty() && root != "0" => Some(root.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::String(_) | Value::Number(_) | Value::Null => None,
        other => {
            tracing::warn!(value = %other, "Ignoring extra.contao.root that is neither a string nor a number");
            None
        }
    }
}

impl InstallContext {
    /// Resolve the installation root and make sure the framework
    /// constants and configuration are loaded.
    ///
    /// The first resolution wins: later calls return the memoized root
    /// even if `extra` or the directory layout changed. The root stays
    /// memoized when loading the bootstrap files fails.
    ///
    /// A working directory that is relative or contains `.`/`..` segments is
    /// canonicalized first, so that its parent is the real parent directory.
    pub fn resolve_root(&mut self, extra: &Value) -> Result<NormalizedPath> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => {
                self.cwd = self.cwd.to_absolute()?;
                let root = locate_root(&self.cwd, extra);
                tracing::info!(root = %root, "Resolved Contao installation root");
                self.root = Some(root.clone());
                root
            }
        };

        let version = self.ensure_constants(&root)?;
        self.ensure_config(&root, &version)?;

        Ok(root)
    }

    fn ensure_constants(&mut self, root: &NormalizedPath) -> Result<FrameworkVersion> {
        if let Some(version) = &self.version {
            return Ok(version.clone());
        }

        let layout = InstallLayout::detect(root)?;
        let path = layout.constants_file();
        let document = LegacyDocument::load(&path)?;

        let mut constants = Constants::new();
        constants.apply(&document);

        let raw = constants.version().ok_or_else(|| Error::MissingVersion {
            path: path.to_native(),
        })?;
        let version = FrameworkVersion::parse(&raw)?;

        tracing::info!(
            version = %version,
            layout = %layout.mode,
            "Loaded Contao constants"
        );

        self.constants = Some(constants);
        self.version = Some(version.clone());
        Ok(version)
    }

    fn ensure_config(&mut self, root: &NormalizedPath, version: &FrameworkVersion) -> Result<()> {
        if self.config.is_some() {
            return Ok(());
        }

        let main = if version.uses_default_config() {
            ContaoPath::DefaultConfig
        } else {
            ContaoPath::LegacyConfig
        };
        let main_path = root.join(main.as_str());
        if !main_path.is_file() {
            return Err(Error::ConfigNotFound {
                path: main_path.to_native(),
            });
        }

        let mut config = LegacyConfig::new();
        config.apply(&LegacyDocument::load(&main_path)?);

        let local_path = root.join(ContaoPath::LocalConfig.as_str());
        if local_path.is_file() {
            config.apply(&LegacyDocument::load(&local_path)?);
        } else {
            tracing::debug!(path = %local_path, "No local configuration");
        }

        tracing::debug!(entries = config.len(), "Loaded Contao configuration");
        self.config = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contao_test_utils::project::TestProject;
    use serde_json::json;

    #[test]
    fn test_explicit_root_scenario() {
        let cwd = NormalizedPath::new("/srv/site");
        let root = locate_root(&cwd, &json!({"contao": {"root": "app"}}));
        assert_eq!(root.as_str(), "/srv/site/app");
    }

    #[test]
    fn test_default_is_parent_of_cwd() {
        let cwd = NormalizedPath::new("/srv/site/composer");
        assert_eq!(locate_root(&cwd, &Value::Null).as_str(), "/srv/site");
    }

    #[test]
    fn test_empty_explicit_root_is_ignored() {
        let cwd = NormalizedPath::new("/srv/site/composer");
        for extra in [
            json!({"contao": {"root": ""}}),
            json!({"contao": {"root": "0"}}),
            json!({"contao": {"root": null}}),
            json!({"contao": {"root": 0}}),
            json!({"contao": {"root": true}}),
            json!({"contao": {"root": ["app"]}}),
            json!({"contao": "app"}),
            json!({"other": {"root": "app"}}),
        ] {
            assert_eq!(locate_root(&cwd, &extra).as_str(), "/srv/site", "{extra}");
        }
    }

    #[test]
    fn test_numeric_explicit_root_is_a_directory_name() {
        let cwd = NormalizedPath::new("/srv/site");
        assert_eq!(
            locate_root(&cwd, &json!({"contao": {"root": 5}})).as_str(),
            "/srv/site/5"
        );
    }

    #[test]
    fn test_relative_cwd_is_made_absolute_before_taking_parent() {
        let project = TestProject::new();
        project.contao3_at(".", "3.5.1");
        project.mkdir("composer");

        // Textually the parent of `composer/.` is `composer`.
        let relative = project.path("composer").join(".");
        let mut ctx = InstallContext::new(relative);
        let root = ctx.resolve_root(&Value::Null).unwrap();

        assert_eq!(root, NormalizedPath::canonicalize(project.root()).unwrap());
        assert!(ctx.cwd().is_absolute());
    }

    #[test]
    fn test_vendored_core_wins_over_parent() {
        let project = TestProject::new();
        project.contao3_at("vendor/contao/core", "3.2");

        let cwd = NormalizedPath::new(project.root());
        let root = locate_root(&cwd, &Value::Null);
        assert_eq!(root, cwd.join("vendor/contao/core"));
    }

    #[test]
    fn test_explicit_root_wins_over_vendored_core() {
        let project = TestProject::new();
        project.contao3_at("vendor/contao/core", "3.2");
        project.contao3_at("app", "3.5");

        let cwd = NormalizedPath::new(project.root());
        let root = locate_root(&cwd, &json!({"contao": {"root": "app"}}));
        assert_eq!(root, cwd.join("app"));
    }

    #[test]
    fn test_resolve_loads_contao3_bootstrap() {
        let project = TestProject::new();
        project.contao3_at("app", "3.5");
        project.write("app/system/config/localconfig.php",
            "<?php\n$GLOBALS['TL_CONFIG']['websiteTitle'] = 'Local';\n");

        let mut ctx = InstallContext::new(project.root());
        let root = ctx.resolve_root(&json!({"contao": {"root": "app"}})).unwrap();

        assert_eq!(root, NormalizedPath::new(project.path("app")));
        assert_eq!(ctx.version().unwrap().as_str(), "3.5");
        assert!(ctx.is_bootstrapped());
        let config = ctx.config().unwrap();
        assert_eq!(config.get_str("websiteTitle"), Some("Local"));
        assert_eq!(config.get_str("characterSet"), Some("utf-8"));
    }

    #[test]
    fn test_resolve_loads_contao2_bootstrap() {
        let project = TestProject::new();
        project.contao2_at(".", "2.11");
        project.mkdir("composer");

        let mut ctx = InstallContext::new(project.path("composer"));
        let root = ctx.resolve_root(&Value::Null).unwrap();

        assert_eq!(root, NormalizedPath::new(project.root()));
        assert_eq!(ctx.version().unwrap().major(), 2);
        assert_eq!(
            ctx.config().unwrap().get_str("websiteTitle"),
            Some("Contao Open Source CMS")
        );
    }

    #[test]
    fn test_missing_constants_is_fatal_and_names_root() {
        let project = TestProject::new();
        project.mkdir("app/system/config");

        let mut ctx = InstallContext::new(project.root());
        let err = ctx
            .resolve_root(&json!({"contao": {"root": "app"}}))
            .unwrap_err();

        assert!(matches!(err, Error::Fs(contao_fs::Error::ConstantsNotFound { .. })));
        assert!(err.to_string().contains("Could not find constants.php in"));
        assert!(err.to_string().ends_with("app"), "got: {err}");
        // The root stays memoized even though bootstrapping failed.
        assert!(ctx.root().is_some());
        assert!(ctx.version().is_none());
    }

    #[test]
    fn test_constants_without_version_is_fatal() {
        let project = TestProject::new();
        project.write("system/constants.php", "<?php define('BUILD', '1');");
        project.mkdir("composer");

        let mut ctx = InstallContext::new(project.path("composer"));
        let err = ctx.resolve_root(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::MissingVersion { .. }));
    }

    #[test]
    fn test_missing_main_config_is_fatal() {
        let project = TestProject::new();
        project.write("system/config/constants.php", "<?php define('VERSION', '3.1');");
        project.mkdir("composer");

        let mut ctx = InstallContext::new(project.path("composer"));
        let err = ctx.resolve_root(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { ref path } if path.ends_with("default.php")));
    }
}
