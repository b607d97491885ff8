//! Key/value fields attached to records
//!
//! This module provides:
//! - `FieldValue`: a printable value stored under a key
//! - `Fields`: an insertion-ordered set of fields, used both for a logger's
//!   persistent tags and for its one-shot metadata

use super::timestamp::format_duration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Value type for tag and metadata fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Capture any displayable value by its string form.
    pub fn display(value: impl fmt::Display) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::String(format_duration(d))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Escape a rendered field value for the quoted `key="value"` form.
///
/// Every `"` becomes `\"`; line breaks are escaped so a record stays on one line.
///
/// Backslashes are not escaped, so a value ending in `\` renders as `k="a\"`
/// and cannot be told apart from an escaped quote by a naive reader.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Insertion-ordered key/value set.
///
/// Re-inserting an existing key replaces the value in place, keeping the
/// key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: IndexMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add a field to the set (builder version)
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge every pair from `fields`; later keys overwrite earlier ones.
    pub fn merge<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (key, value) in fields {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move all fields out, leaving the set empty.
    pub fn take(&mut self) -> Fields {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append every field as `key="escaped value" ` (note the trailing space).
    pub fn write_to(&self, out: &mut String) {
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_value(&value.to_string()));
            out.push_str("\" ");
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.merge(iter);
        fields
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(out.trim_end())
    }
}
