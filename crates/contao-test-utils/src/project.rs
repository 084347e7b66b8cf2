//! [`TestProject`] builder for on-disk Contao installations.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::install;

/// A temporary project directory with helpers to lay out Contao
/// installations and assert on the result.
///
/// # Example
///
/// ```rust,no_run
/// use contao_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.contao3_at(".", "3.5.1");
/// project.cache_dirs_at(".", &["dca", "sql"]);
/// project.assert_exists("system/cache/dca");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `rel` below the root. `"."` is the root itself.
    pub fn path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() || rel == "." {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }

    /// Create a directory and its parents.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Lay out a Contao 3 installation at `rel`: `system/config/constants.php`
    /// and `system/config/default.php`.
    pub fn contao3_at(&self, rel: &str, version: &str) -> PathBuf {
        let root = self.mkdir(rel);
        let config = root.join("system/config");
        fs::create_dir_all(&config).unwrap();
        fs::write(config.join("constants.php"), install::constants_v3(version, "0")).unwrap();
        fs::write(config.join("default.php"), install::DEFAULT_CONFIG_V3).unwrap();
        root
    }

    /// Lay out a Contao 2 installation at `rel`: `system/constants.php` and
    /// `system/config/config.php`.
    pub fn contao2_at(&self, rel: &str, version: &str) -> PathBuf {
        let root = self.mkdir(rel);
        let config = root.join("system/config");
        fs::create_dir_all(&config).unwrap();
        fs::write(root.join("system/constants.php"), install::constants_v2(version, "0")).unwrap();
        fs::write(config.join("config.php"), install::LEGACY_CONFIG_V2).unwrap();
        root
    }

    /// Create `system/cache/<dir>` below `rel` for every `dir`, each with a
    /// cached file inside.
    pub fn cache_dirs_at(&self, rel: &str, dirs: &[&str]) {
        let cache = self.path(rel).join("system/cache");
        for dir in dirs {
            let path = cache.join(dir);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("cached.php"), "<?php return array();\n").unwrap();
        }
    }

    /// Create the local artifact repository `composer/packages` below `rel`.
    pub fn artifacts_at(&self, rel: &str) -> PathBuf {
        let path = self.path(rel).join("composer/packages");
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `composer.json` at `rel` (a directory) with the given contents.
    pub fn composer_json(&self, rel: &str, json: &str) -> PathBuf {
        let dir = self.mkdir(rel);
        let path = dir.join("composer.json");
        fs::write(&path, json).unwrap();
        path
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(path.exists(), "Expected path to exist: {}", path.display());
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(!path.exists(), "Expected path NOT to exist: {}", path.display());
    }
}
