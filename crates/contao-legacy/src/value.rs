//! Typed values read from legacy files.

use std::collections::BTreeMap;

use serde::Serialize;

/// A value assigned to a constant or configuration key.
///
/// Literals are decoded; anything the reader cannot evaluate statically
/// (constant references, concatenations, function calls) is kept verbatim
/// as [`LegacyValue::Expr`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegacyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<LegacyValue>),
    Map(BTreeMap<String, LegacyValue>),
    Expr(String),
}

impl LegacyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string a scalar converts to when PHP uses it as a string.
    pub fn to_php_string(&self) -> Option<String> {
        match self {
            Self::Null => Some(String::new()),
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::List(_) | Self::Map(_) | Self::Expr(_) => None,
        }
    }
}

/// One `[...]` subscript on the left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    Key(String),
    /// Empty brackets, `[]`
    Append,
}

/// Assign `value` at the nested position named by `keys`.
///
/// Intermediate entries are created as maps. A list met on the way is
/// converted into a map keyed by its indexes; a scalar is replaced.
pub(crate) fn assign(
    map: &mut BTreeMap<String, LegacyValue>,
    keys: &[KeySegment],
    value: LegacyValue,
) {
    let Some((first, rest)) = keys.split_first() else {
        return;
    };

    let key = match first {
        KeySegment::Key(k) => k.clone(),
        KeySegment::Append => next_index(map).to_string(),
    };

    if rest.is_empty() {
        map.insert(key, value);
        return;
    }

    let slot = map.entry(key).or_default();
    let nested = match std::mem::take(slot) {
        LegacyValue::Map(m) => m,
        LegacyValue::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => BTreeMap::new(),
    };
    *slot = LegacyValue::Map(nested);

    if let LegacyValue::Map(m) = slot {
        assign(m, rest, value);
    }
}

/// The index PHP would use for the next appended element.
pub(crate) fn next_index(map: &BTreeMap<String, LegacyValue>) -> i64 {
    map.keys()
        .filter_map(|k| k.parse::<i64>().ok())
        .max()
        .map_or(0, |max| max + 1)
}
