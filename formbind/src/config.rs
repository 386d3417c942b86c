//! Configuration snapshots, submitted form data and update fragments.
//!
//! Inputs never own configuration. They read a snapshot through
//! [`ConfigSource`] when rendering, read a [`FormData`] when parsing, and hand
//! back an [`Update`] that the caller merges into its store.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// Update fragment produced by parsing: field id to new value.
///
/// Most inputs produce at most one entry. An empty update means the field was
/// not submitted and the stored value must be left unchanged.
pub type Update = Map<String, Value>;

/// Read access to a configuration snapshot.
pub trait ConfigSource {
    /// Returns the stored value for `key`, if any.
    fn get_value(&self, key: &str) -> Option<&Value>;

    /// Whether `key` is present in the snapshot.
    fn contains_key(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }
}

impl ConfigSource for Map<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ConfigSource for HashMap<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ConfigSource for BTreeMap<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Merges a parsed update into a configuration map, replacing existing keys.
pub fn merge_update(config: &mut Map<String, Value>, update: Update) {
    for (key, value) in update {
        debug!("config update: {key} = {value}");
        config.insert(key, value);
    }
}

/// Submitted form payload: each key maps to the values submitted for it, in
/// submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` body or query string.
    pub fn from_urlencoded(input: &str) -> Self {
        url::form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect()
    }

    /// Appends a value for `key`, keeping earlier values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Whether at least one value was submitted for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|v| !v.is_empty())
    }

    /// The first value submitted for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values submitted for `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the checkbox with this key was submitted as checked.
    pub(crate) fn is_checked(&self, key: &str) -> bool {
        self.first(key) == Some("on")
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (key, value) in iter {
            data.append(key, value);
        }
        data
    }
}
