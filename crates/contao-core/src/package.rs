//! The host's root package
//!
//! Only the parts of `composer.json` the plugin reads or writes are modelled:
//! the package name, its `require` map and the free-form `extra` section.

use std::collections::BTreeMap;

use contao_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// The project manifest as seen by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootPackage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Package name to version constraint
    #[serde(default, rename = "require")]
    requires: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    extra: Value,
}

impl RootPackage {
    /// Create an empty root package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the relevant parts of a `composer.json` document.
    ///
    /// # Example
    ///
    /// ```
    /// use contao_core::RootPackage;
    ///
    /// let package = RootPackage::parse(r#"{
    ///     "name": "acme/site",
    ///     "require": {"contao/core": "~3.2"},
    ///     "extra": {"contao": {"root": "app"}}
    /// }"#).unwrap();
    ///
    /// assert_eq!(package.requires()["contao/core"], "~3.2");
    /// assert_eq!(package.extra()["contao"]["root"], "app");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let package: RootPackage = serde_json::from_str(content)?;
        Ok(package)
    }

    /// Load a `composer.json` file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        Self::parse(&content).map_err(|e| Error::InvalidManifest {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Builder-style setter for the `extra` section.
    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = extra;
        self
    }

    pub fn requires(&self) -> &BTreeMap<String, String> {
        &self.requires
    }

    /// Replace the requirement map.
    pub fn set_requires(&mut self, requires: BTreeMap<String, String>) {
        self.requires = requires;
    }

    pub fn extra(&self) -> &Value {
        &self.extra
    }
}
