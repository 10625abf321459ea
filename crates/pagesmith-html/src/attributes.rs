//! Ordered attribute mappings.

use pagesmith_core::{PagesmithError, Result};

/// Ordered string-keyed attribute mapping.
///
/// Entries render in insertion order. Inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from key/value pairs, keeping their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut attrs = Self::new();
        for (key, value) in pairs {
            attrs.insert(key, value);
        }
        attrs
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render every entry as ` key="value"`.
    ///
    /// Values are written verbatim. Keys must be valid attribute names.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for (key, value) in &self.entries {
            if !is_valid_name(key) {
                return Err(PagesmithError::InvalidAttributes(format!(
                    "'{}' is not a valid attribute name",
                    key
                )));
            }
            // leading space is intentional
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }
        Ok(out)
    }
}

/// Attribute names are non-empty and free of whitespace, quotes, `=`, `<`, `>` and `/`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
