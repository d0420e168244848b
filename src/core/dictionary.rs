//! Flattening of nested locale JSON into dotted keys.
//!
//! `{ "a": { "b": "x" } }` becomes `{ "a.b": "x" }`. Values of the form
//! `@:target` are linked messages and are replaced with the value stored at
//! `target`, one hop only.

use std::collections::BTreeMap;

use serde_json::Value;

/// Prefix marking a value that links to another key.
pub const ALIAS_MARKER: &str = "@:";

/// Flat mapping of dotted keys to display strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Flatten a parsed JSON tree.
///
/// Only string leaves produce entries; numbers, booleans, nulls and arrays
/// carry no display text and are skipped. Alias resolution runs after the
/// whole tree is collected so a link may point at a key declared later.
pub fn flatten(tree: &Value) -> Dictionary {
    let mut candidates = BTreeMap::new();
    collect_strings(tree, None, &mut candidates);

    let entries = candidates
        .iter()
        .map(|(key, value)| (key.clone(), resolve_alias(value, &candidates)))
        .collect();

    Dictionary { entries }
}

/// `prefix` is `None` only for the root value, which has no key of its own.
/// An empty key is still a key: `{"": "x"}` yields the entry `""`.
fn collect_strings(value: &Value, prefix: Option<String>, result: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = match prefix.as_deref() {
                    Some(parent) if !parent.is_empty() => format!("{}.{}", parent, key),
                    _ => key.clone(),
                };
                collect_strings(val, Some(new_prefix), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key, s.clone());
            }
        }
        _ => {}
    }
}

/// Returns the linked value, or `value` unchanged when it is not a link, the
/// target is missing, or the target is itself a link.
fn resolve_alias(value: &str, candidates: &BTreeMap<String, String>) -> String {
    let Some(target) = value.strip_prefix(ALIAS_MARKER) else {
        return value.to_string();
    };

    match candidates.get(target) {
        Some(resolved) if !resolved.starts_with(ALIAS_MARKER) => resolved.clone(),
        _ => value.to_string(),
    }
}
