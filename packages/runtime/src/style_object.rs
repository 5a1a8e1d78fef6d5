//! Compiled style objects - the per-namespace output of the compiler and
//! the input of the runtime merge.

use crate::error::MergeInputError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Marker entry carried by serialized style objects so JavaScript callers can
/// tell compiled objects apart from inline style props. Ignored when merging.
pub const CSS_MARKER: &str = "$$css";

/// Mapping from property key to the class that currently styles it.
///
/// `None` is the explicit null marker: the key is reset and a class set for
/// the same key by an earlier object is dropped during merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledStyleObject {
    entries: BTreeMap<String, Option<String>>,
}

impl CompiledStyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the winner for a key, returning the previous entry
    pub fn insert(&mut self, key: impl Into<String>, class_name: Option<String>) -> Option<Option<String>> {
        self.entries.insert(key.into(), class_name)
    }

    pub fn set_class(&mut self, key: impl Into<String>, class_name: impl Into<String>) {
        self.entries.insert(key.into(), Some(class_name.into()));
    }

    pub fn set_null(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    /// `None` when the key is absent, `Some(None)` when it is explicitly null
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Class names referenced by this object, ignoring null entries
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().filter_map(|value| value.as_deref())
    }

    /// Build from a JSON object as emitted by the compiler
    pub fn from_json(value: &Value) -> Result<Self, MergeInputError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(MergeInputError::unexpected_argument(other)),
        };

        let mut entries = BTreeMap::new();
        for (key, entry) in map {
            if key == CSS_MARKER {
                continue;
            }
            match entry {
                Value::String(class_name) => {
                    entries.insert(key.clone(), Some(class_name.clone()));
                }
                Value::Null => {
                    entries.insert(key.clone(), None);
                }
                other => return Err(MergeInputError::invalid_entry(key.as_str(), other)),
            }
        }

        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.entries.len() + 1);
        for (key, value) in &self.entries {
            let entry = match value {
                Some(class_name) => Value::String(class_name.clone()),
                None => Value::Null,
            };
            map.insert(key.clone(), entry);
        }
        map.insert(CSS_MARKER.to_string(), Value::Bool(true));
        Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for CompiledStyleObject
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.map(Into::into)))
                .collect(),
        }
    }
}

impl Serialize for CompiledStyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(CSS_MARKER, &true)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for CompiledStyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
