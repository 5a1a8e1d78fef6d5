//! Runtime merge - resolves several compiled style objects into one set of
//! class names. The last object to mention a key decides it.

use crate::error::MergeInputError;
use crate::style_object::{CompiledStyleObject, CSS_MARKER};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Sentinels that contribute nothing to a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skip {
    False,
    Null,
    Undefined,
}

/// One argument to [`merge`]
#[derive(Debug, Clone, PartialEq)]
pub enum MergeInput<'a> {
    Style(Cow<'a, CompiledStyleObject>),
    List(Vec<MergeInput<'a>>),
    Skip(Skip),
}

impl MergeInput<'static> {
    /// Convert a JSON-shaped argument, rejecting anything that is not an
    /// object, an array, `false` or `null`
    pub fn from_json(value: &Value) -> Result<Self, MergeInputError> {
        match value {
            Value::Object(_) => Ok(Self::Style(Cow::Owned(CompiledStyleObject::from_json(value)?))),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Bool(false) => Ok(Self::Skip(Skip::False)),
            Value::Null => Ok(Self::Skip(Skip::Null)),
            other => Err(MergeInputError::unexpected_argument(other)),
        }
    }
}

impl<'a> From<&'a CompiledStyleObject> for MergeInput<'a> {
    fn from(style: &'a CompiledStyleObject) -> Self {
        Self::Style(Cow::Borrowed(style))
    }
}

impl From<CompiledStyleObject> for MergeInput<'static> {
    fn from(style: CompiledStyleObject) -> Self {
        Self::Style(Cow::Owned(style))
    }
}

impl<'a> From<Option<&'a CompiledStyleObject>> for MergeInput<'a> {
    fn from(style: Option<&'a CompiledStyleObject>) -> Self {
        match style {
            Some(style) => Self::from(style),
            None => Self::Skip(Skip::Null),
        }
    }
}

impl<'a> From<Vec<MergeInput<'a>>> for MergeInput<'a> {
    fn from(items: Vec<MergeInput<'a>>) -> Self {
        Self::List(items)
    }
}

impl From<Skip> for MergeInput<'_> {
    fn from(skip: Skip) -> Self {
        Self::Skip(skip)
    }
}

/// Final, duplicate-free set of class names.
///
/// Iteration order follows the first appearance of each winning key, so
/// identical input always renders the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    classes: Vec<String>,
}

impl MergeResult {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.classes
    }

    /// Order-independent view, for comparing results
    pub fn to_set(&self) -> HashSet<&str> {
        self.iter().collect()
    }
}

impl fmt::Display for MergeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Working map from property key to its current winner
struct Resolver<'a> {
    slots: Vec<(&'a str, Option<&'a str>)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Resolver<'a> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn set(&mut self, key: &'a str, winner: Option<&'a str>) {
        match self.index.get(key) {
            Some(&slot) => self.slots[slot].1 = winner,
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push((key, winner));
            }
        }
    }

    fn apply(&mut self, input: &'a MergeInput<'_>) {
        match input {
            MergeInput::Style(style) => {
                for (key, winner) in style.iter() {
                    self.set(key, winner);
                }
            }
            MergeInput::List(items) => {
                for item in items {
                    self.apply(item);
                }
            }
            MergeInput::Skip(_) => {}
        }
    }

    fn apply_json(&mut self, value: &'a Value) -> Result<(), MergeInputError> {
        match value {
            Value::Object(map) => {
                for (key, entry) in map {
                    if key == CSS_MARKER {
                        continue;
                    }
                    match entry {
                        Value::String(class_name) => self.set(key, Some(class_name.as_str())),
                        Value::Null => self.set(key, None),
                        other => return Err(MergeInputError::invalid_entry(key.as_str(), other)),
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.apply_json(item)?;
                }
            }
            Value::Bool(false) | Value::Null => {}
            other => return Err(MergeInputError::unexpected_argument(other)),
        }
        Ok(())
    }

    fn finish(self) -> MergeResult {
        let mut seen = HashSet::with_capacity(self.slots.len());
        let classes = self
            .slots
            .into_iter()
            .filter_map(|(_, winner)| winner)
            .filter(|class_name| seen.insert(*class_name))
            .map(str::to_owned)
            .collect();

        MergeResult { classes }
    }
}

/// Merge compiled style objects left to right.
///
/// Lists are flattened in place and skip sentinels contribute nothing. A
/// later object that sets a key to null drops the class an earlier object
/// set for it.
pub fn merge(inputs: &[MergeInput<'_>]) -> MergeResult {
    let mut resolver = Resolver::new();
    for input in inputs {
        resolver.apply(input);
    }
    resolver.finish()
}

/// Merge JSON-shaped arguments without converting them first.
///
/// `undefined` has no JSON form; callers crossing from JavaScript map it to
/// `null` before serializing.
pub fn merge_json(args: &[Value]) -> Result<MergeResult, MergeInputError> {
    let mut resolver = Resolver::new();
    for arg in args {
        resolver.apply_json(arg)?;
    }
    Ok(resolver.finish())
}
