//! Style definitions as authored: namespaces of property keys mapped to
//! values, with at most one level of pseudo or at-rule nesting.

use crate::error::InputError;
use crate::normalizer::lexer::{lex, SpannedToken, Token};
use crate::properties::{css_property_name, is_valid_pseudo};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single authored value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    String(String),
}

/// A scalar, or an ordered list of fallback scalars for one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl RawValue {
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            RawValue::Scalar(scalar) => std::slice::from_ref(scalar),
            RawValue::List(items) => items,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<Scalar> for RawValue {
    fn from(value: Scalar) -> Self {
        RawValue::Scalar(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Scalar(value.into())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Scalar(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Scalar(value.into())
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        RawValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Where a declaration applies
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorContext {
    #[default]
    None,
    /// `:hover`, `::before`, `:nth-child(2n)`
    Pseudo(String),
    /// Full at-rule prelude including the `@`, e.g. `@media (min-width: 768px)`
    AtRule(String),
}

impl SelectorContext {
    /// Recognise a conditional key; plain property keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.starts_with(':') {
            Some(SelectorContext::Pseudo(key.to_string()))
        } else if key.starts_with('@') {
            Some(SelectorContext::AtRule(canonical_at_rule(key)))
        } else {
            None
        }
    }

    pub fn pseudo(pseudo: impl Into<String>) -> Self {
        SelectorContext::Pseudo(pseudo.into())
    }

    pub fn at_rule(condition: impl AsRef<str>) -> Self {
        SelectorContext::AtRule(canonical_at_rule(condition.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SelectorContext::None => "",
            SelectorContext::Pseudo(pseudo) => pseudo,
            SelectorContext::AtRule(condition) => condition,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SelectorContext::None)
    }

    /// Compiled-object key for a property in this context (`:hover_color`)
    pub fn decorate(&self, key: &str) -> String {
        match self {
            SelectorContext::None => key.to_string(),
            other => format!("{}_{}", other.as_str(), key),
        }
    }
}

/// `@media ( min-width : 768px )` → `@media (min-width:768px)`. Preludes the
/// value lexer can't read only get their whitespace collapsed.
fn canonical_at_rule(key: &str) -> String {
    let key = key.trim();
    let split = key
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(key.len());
    let (keyword, prelude) = key.split_at(split);
    let prelude = prelude.trim();

    let Ok(tokens) = lex(prelude) else {
        return key.split_whitespace().collect::<Vec<_>>().join(" ");
    };
    if tokens.is_empty() {
        return keyword.to_string();
    }

    let mut out = String::with_capacity(key.len());
    out.push_str(keyword);
    out.push(' ');

    let mut prev: Option<Token<'_>> = None;
    let mut prev_end = 0;
    for SpannedToken { token, start, end } in tokens {
        if let Some(prev) = prev {
            let tight = prev.opens()
                || matches!(prev, Token::Colon | Token::Comma)
                || matches!(token, Token::RParen | Token::Colon | Token::Comma);
            if start > prev_end && !tight {
                out.push(' ');
            }
        }
        out.push_str(&prelude[start..end]);
        prev = Some(token);
        prev_end = end;
    }
    out
}

impl fmt::Display for SelectorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline keyframes definition: step selector to property values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyframesDef {
    pub steps: Vec<(String, Vec<(String, RawValue)>)>,
}

impl KeyframesDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, selector: impl Into<String>, properties: Vec<(&str, RawValue)>) -> Self {
        self.steps.push((
            selector.into(),
            properties
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        ));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Raw(RawValue),
    /// Explicit reset: the key carries no class
    Null,
    Keyframes(KeyframesDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub key: String,
    pub value: StyleValue,
}

impl StyleProperty {
    pub fn new(key: impl Into<String>, value: StyleValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn raw(key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self::new(key, StyleValue::Raw(value.into()))
    }

    pub fn null(key: impl Into<String>) -> Self {
        Self::new(key, StyleValue::Null)
    }
}

/// A namespace entry. Conditional blocks hold plain properties only, so
/// nesting can't go deeper than one level.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    Property(StyleProperty),
    Conditional {
        context: SelectorContext,
        properties: Vec<StyleProperty>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    pub entries: Vec<StyleEntry>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.entries.push(StyleEntry::Property(StyleProperty::raw(key, value)));
        self
    }

    pub fn null(mut self, key: impl Into<String>) -> Self {
        self.entries.push(StyleEntry::Property(StyleProperty::null(key)));
        self
    }

    pub fn keyframes(mut self, key: impl Into<String>, keyframes: KeyframesDef) -> Self {
        self.entries.push(StyleEntry::Property(StyleProperty::new(
            key,
            StyleValue::Keyframes(keyframes),
        )));
        self
    }

    pub fn conditional(mut self, context: SelectorContext, properties: Vec<StyleProperty>) -> Self {
        self.entries.push(StyleEntry::Conditional {
            context,
            properties,
        });
        self
    }
}

/// All namespaces of one style definition, in authored order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheetInput {
    pub namespaces: Vec<(String, Namespace)>,
}

impl StyleSheetInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, name: impl Into<String>, namespace: Namespace) -> Self {
        self.namespaces.push((name.into(), namespace));
        self
    }

    pub fn from_json_str(source: &str) -> crate::error::CompileResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::from_json(&value)?)
    }

    /// Load `{ namespace: { key: value | { nestedKey: value } } }`
    pub fn from_json(value: &Value) -> Result<Self, InputError> {
        let Value::Object(map) = value else {
            return Err(InputError::NonObjectStyleSheet);
        };

        let mut sheet = Self::new();
        for (name, body) in map {
            let Value::Object(body) = body else {
                return Err(InputError::IllegalNamespaceValue {
                    namespace: name.clone(),
                });
            };

            let mut namespace = Namespace::new();
            for (key, value) in body {
                namespace.entries.push(parse_entry(key, value)?);
            }
            sheet.namespaces.push((name.clone(), namespace));
        }

        Ok(sheet)
    }
}

fn parse_entry(key: &str, value: &Value) -> Result<StyleEntry, InputError> {
    let Some(context) = SelectorContext::from_key(key) else {
        return Ok(StyleEntry::Property(parse_property(key, value)?));
    };

    if let SelectorContext::Pseudo(pseudo) = &context {
        if !is_valid_pseudo(pseudo) {
            return Err(InputError::InvalidPseudo {
                pseudo: pseudo.clone(),
            });
        }
    }

    let Value::Object(body) = value else {
        return Err(InputError::IllegalPropValue {
            key: key.to_string(),
        });
    };

    let mut properties = Vec::with_capacity(body.len());
    for (inner_key, inner_value) in body {
        if SelectorContext::from_key(inner_key).is_some() {
            return Err(InputError::IllegalNestedPseudo {
                parent: key.to_string(),
                key: inner_key.clone(),
            });
        }
        properties.push(parse_property(inner_key, inner_value)?);
    }

    Ok(StyleEntry::Conditional {
        context,
        properties,
    })
}

fn parse_property(key: &str, value: &Value) -> Result<StyleProperty, InputError> {
    let value = match value {
        Value::Null => StyleValue::Null,
        Value::Object(steps) if css_property_name(key) == "animation-name" => {
            StyleValue::Keyframes(parse_keyframes(steps)?)
        }
        other => StyleValue::Raw(parse_raw(key, other)?),
    };
    Ok(StyleProperty::new(key, value))
}

fn parse_raw(key: &str, value: &Value) -> Result<RawValue, InputError> {
    match value {
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| {
                parse_scalar(item).ok_or_else(|| InputError::IllegalPropArrayValue {
                    key: key.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RawValue::List),
        Value::Array(_) => Err(InputError::IllegalPropArrayValue {
            key: key.to_string(),
        }),
        other => parse_scalar(other)
            .map(RawValue::Scalar)
            .ok_or_else(|| InputError::IllegalPropValue {
                key: key.to_string(),
            }),
    }
}

fn parse_scalar(value: &Value) -> Option<Scalar> {
    match value {
        Value::String(text) => Some(Scalar::String(text.clone())),
        Value::Number(number) => number.as_f64().map(Scalar::Number),
        _ => None,
    }
}

fn parse_keyframes(steps: &serde_json::Map<String, Value>) -> Result<KeyframesDef, InputError> {
    let mut keyframes = KeyframesDef::new();
    for (selector, body) in steps {
        let Value::Object(body) = body else {
            return Err(InputError::IllegalKeyframesStep {
                step: selector.clone(),
            });
        };

        let mut properties = Vec::with_capacity(body.len());
        for (key, value) in body {
            properties.push((key.clone(), parse_raw(key, value)?));
        }
        keyframes.steps.push((selector.clone(), properties));
    }
    Ok(keyframes)
}
