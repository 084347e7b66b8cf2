//! The `TL_CONFIG` configuration array.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::LegacyDocument;
use crate::parser::StatementKind;
use crate::value::{KeySegment, LegacyValue, assign};

/// Configuration values assigned to `$GLOBALS['TL_CONFIG']`.
///
/// Files are applied in load order, so a later file (typically
/// `localconfig.php`) overrides individual keys of an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LegacyConfig {
    entries: BTreeMap<String, LegacyValue>,
}

impl LegacyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay the assignments of `document`, returning how many were applied.
    pub fn apply(&mut self, document: &LegacyDocument) -> usize {
        let mut applied = 0;
        for statement in document.statements() {
            if let StatementKind::Assign { keys, value } = &statement.kind {
                self.set(keys, value.clone());
                applied += 1;
            }
        }
        applied
    }

    pub fn set(&mut self, keys: &[KeySegment], value: LegacyValue) {
        assign(&mut self.entries, keys, value);
    }

    pub fn get(&self, key: &str) -> Option<&LegacyValue> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(LegacyValue::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(LegacyValue::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(LegacyValue::as_int)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LegacyValue)> {
        self.entries.iter()
    }
}
