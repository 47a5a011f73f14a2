//! Indifferent-access parameter mapping.
//!
//! # Responsibilities
//! - Store request parameters under a single canonical key form
//! - Resolve lookups by either the plain or symbol-literal key spelling
//! - Merge parameter sources with later-wins precedence
//!
//! # Design Decisions
//! - Keys are canonicalized once at insert; lookups canonicalize the probe
//! - One container, no dual keys: `"id"` and `":id"` are the same entry
//! - Values stay as strings; parsing them is the caller's concern

use std::collections::HashMap;

/// Strip the symbol-literal spelling (a single leading `:`) from a key.
fn canonical(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// String parameter map with indifferent key access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    inner: HashMap<String, String>,
}

impl ParamMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter. The key is canonicalized; an existing entry
    /// under either spelling is overwritten.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.inner
            .insert(canonical(key.as_ref()).to_string(), value.into());
    }

    /// Look up a parameter by either key spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(canonical(key)).map(String::as_str)
    }

    /// Returns true if the key is present under either spelling.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(canonical(key))
    }

    /// Merge `other` into this map; entries in `other` win on collision.
    pub fn merge(&mut self, other: &ParamMap) {
        for (k, v) in &other.inner {
            self.inner.insert(k.clone(), v.clone());
        }
    }

    /// Iterate over canonical keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
