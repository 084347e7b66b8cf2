//! Constants defined by the framework bootstrap files.

use std::collections::BTreeMap;

use crate::document::LegacyDocument;
use crate::value::LegacyValue;

/// Constant name holding the framework version.
pub const VERSION: &str = "VERSION";

/// Constant name holding the framework build number.
pub const BUILD: &str = "BUILD";

/// Defined constants, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constants {
    values: BTreeMap<String, LegacyValue>,
}

impl Constants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define every constant of `document`, returning how many were new.
    ///
    /// Constants cannot be redefined; a second definition is ignored.
    pub fn apply(&mut self, document: &LegacyDocument) -> usize {
        let mut defined = 0;
        for (name, value) in document.defines() {
            if self.values.contains_key(name) {
                tracing::warn!(constant = name, "Constant already defined, ignoring redefinition");
                continue;
            }
            self.values.insert(name.to_string(), value.clone());
            defined += 1;
        }
        defined
    }

    pub fn get(&self, name: &str) -> Option<&LegacyValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The `VERSION` constant as a string.
    pub fn version(&self) -> Option<String> {
        self.get(VERSION).and_then(LegacyValue::to_php_string)
    }

    /// The `BUILD` constant as a string.
    pub fn build(&self) -> Option<String> {
        self.get(BUILD).and_then(LegacyValue::to_php_string)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LegacyValue)> {
        self.values.iter()
    }
}
