//! Frontmatter types and data structures.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A single frontmatter value.
///
/// The block format only knows three shapes (string, boolean, list of strings);
/// `Other` carries raw text that is written back unquoted, such as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    List(Vec<String>),
    Other(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) | FieldValue::Other(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Ordered frontmatter mapping.
///
/// Keys keep the position of their first insertion. Re-inserting an existing
/// key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    order: Vec<String>,
    fields: HashMap<String, FieldValue>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let key = key.into();
        if !self.fields.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.fields.insert(key, value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in mapping order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Fields in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.order
            .iter()
            .filter_map(|k| self.fields.get(k).map(|v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

impl Serialize for Frontmatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Parsed frontmatter; empty when the document has none.
    pub frontmatter: Frontmatter,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl ParsedDocument {
    /// A document with no frontmatter whose body is the whole input.
    pub fn body_only(content: &str) -> Self {
        Self { frontmatter: Frontmatter::default(), body: content.to_string() }
    }
}
