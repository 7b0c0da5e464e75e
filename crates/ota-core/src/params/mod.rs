//! Parameters carried as encoded path segments.
//!
//! The PLIST service receives its parameters as `/<marker>/<token>/<token>...`
//! where every token is a [`crate::codec::encode`]d `key=value` pair (or a
//! bare value). This module parses such paths into an ordered
//! [`ParameterList`].

mod parse;

pub use parse::{parse_key_value, parse_parameter_path};

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// One decoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Segment without `=`.
    Value(String),
    /// Segment split at its first `=`.
    Pair(String, String),
}

impl Entry {
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Pair(k, _) => Some(k),
            Entry::Value(_) => None,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Entry::Pair(_, v) | Entry::Value(v) => v,
        }
    }
}

/// Serialized as `["key", "value"]` or `["value"]`.
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Pair(k, v) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(k)?;
                seq.serialize_element(v)?;
                seq.end()
            }
            Entry::Value(v) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(v)?;
                seq.end()
            }
        }
    }
}

/// Decoded segments in path order. Keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ParameterList(Vec<Entry>);

impl ParameterList {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self(entries)
    }

    /// Value of the first `key=value` entry with this exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.key() == Some(key))
            .map(Entry::value)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Entry> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
