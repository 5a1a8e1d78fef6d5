//! Atomic rule emission: declarations to class names and rule text

use crate::error::NormalizationError;
use crate::hash::class_name;
use crate::input::{KeyframesDef, SelectorContext};
use crate::normalizer::{normalize_keyframe_selector, normalize_with_options, NormalizedValue};
use crate::options::CompilerOptions;
use crate::priority::{classify, Priority};
use crate::properties::css_property_name;
use serde::Serialize;
use std::fmt;

/// Separates the fields of a declaration's hash input
const FIELD_SEPARATOR: char = '\u{1f}';

/// One normalized property value in one context; the unit of hashing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: NormalizedValue,
    pub context: SelectorContext,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: NormalizedValue, context: SelectorContext) -> Self {
        Self {
            property: property.into(),
            value,
            context,
        }
    }

    /// `<context>\x1f<property>\x1f<value>`
    pub fn canonical(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.context.as_str(),
            FIELD_SEPARATOR,
            self.property,
            FIELD_SEPARATOR,
            self.value.canonical()
        )
    }

    pub fn class_name(&self, prefix: &str) -> String {
        class_name(prefix, &self.canonical())
    }

    pub fn priority(&self) -> Priority {
        classify(&self.property, &self.context)
    }

    pub fn rule_text(&self, class_name: &str) -> String {
        let body = self.value.declarations(&self.property);
        match &self.context {
            SelectorContext::None => format!(".{}{{{}}}", class_name, body),
            SelectorContext::Pseudo(pseudo) => format!(".{}{}{{{}}}", class_name, pseudo, body),
            SelectorContext::AtRule(condition) => {
                format!("{}{{.{}{{{}}}}}", condition, class_name, body)
            }
        }
    }

    pub fn to_atomic(&self, prefix: &str) -> AtomicClass {
        let class_name = self.class_name(prefix);
        AtomicClass {
            rule_text: self.rule_text(&class_name),
            priority: self.priority(),
            class_name,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.context.is_none() {
            write!(f, "{} ", self.context)?;
        }
        write!(f, "{}", self.value.declarations(&self.property))
    }
}

/// A generated class and the rule that styles it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicClass {
    pub class_name: String,
    pub rule_text: String,
    pub priority: Priority,
}

/// Keyframes block with canonical step order and property order
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedKeyframes {
    steps: Vec<(String, Vec<(String, NormalizedValue)>)>,
}

impl NormalizedKeyframes {
    pub fn from_def(def: &KeyframesDef, options: &CompilerOptions) -> Result<Self, NormalizationError> {
        let mut steps = Vec::with_capacity(def.steps.len());
        for (selector, properties) in &def.steps {
            let (sort_key, selector) = normalize_keyframe_selector(selector)?;

            let mut normalized = Vec::with_capacity(properties.len());
            for (key, raw) in properties {
                let property = css_property_name(key);
                let value = normalize_with_options(&property, raw, options)?;
                normalized.push((property, value));
            }
            normalized.sort_by(|a, b| a.0.cmp(&b.0));

            steps.push((sort_key, selector, normalized));
        }
        steps.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(Self {
            steps: steps
                .into_iter()
                .map(|(_, selector, properties)| (selector, properties))
                .collect(),
        })
    }

    /// `0%{opacity:.25;}100%{opacity:1;}`
    pub fn body(&self) -> String {
        let mut body = String::new();
        for (selector, properties) in &self.steps {
            body.push_str(selector);
            body.push('{');
            for (property, value) in properties {
                for single in value.values() {
                    body.push_str(property);
                    body.push(':');
                    body.push_str(single);
                    body.push(';');
                }
            }
            body.push('}');
        }
        body
    }

    pub fn name(&self, prefix: &str) -> String {
        format!("{}-B", class_name(prefix, &self.body()))
    }

    pub fn to_atomic(&self, prefix: &str) -> AtomicClass {
        let body = self.body();
        let name = format!("{}-B", class_name(prefix, &body));
        AtomicClass {
            rule_text: format!("@keyframes {}{{{}}}", name, body),
            class_name: name,
            priority: Priority::KEYFRAMES,
        }
    }
}
