use super::{LintRule, PropertyCheck};
use crate::diagnostic::Diagnostic;
use quark_compiler::normalizer::{normalize, normalize_keyframe_selector};
use quark_compiler::properties::css_property_name;
use quark_compiler::{InputError, RawValue};
use serde_json::Value;

/// Rule: values must be static literals that normalize cleanly
pub struct ValidValue;

impl ValidValue {
    fn check_raw(&self, property: &str, key: &str, value: &Value, path: &str) -> Option<Diagnostic> {
        let error = match value {
            Value::Null => return None,
            Value::Array(items) if items.is_empty() => Some(
                InputError::IllegalPropArrayValue {
                    key: key.to_string(),
                }
                .to_string(),
            ),
            Value::Array(items) if items.iter().any(|item| !(item.is_string() || item.is_number())) => Some(
                InputError::IllegalPropArrayValue {
                    key: key.to_string(),
                }
                .to_string(),
            ),
            Value::String(_) | Value::Number(_) | Value::Array(_) => None,
            _ => Some(
                InputError::IllegalPropValue {
                    key: key.to_string(),
                }
                .to_string(),
            ),
        };
        if let Some(message) = error {
            return Some(Diagnostic::error(self.name(), message, path));
        }

        let raw: RawValue = match serde_json::from_value(value.clone()) {
            Ok(raw) => raw,
            Err(error) => return Some(Diagnostic::error(self.name(), error.to_string(), path)),
        };
        normalize(property, &raw)
            .err()
            .map(|error| Diagnostic::error(self.name(), error.to_string(), path))
    }

    fn check_keyframes(&self, steps: &serde_json::Map<String, Value>, path: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (selector, body) in steps {
            let step_path = format!("{}.{}", path, selector);
            if let Err(error) = normalize_keyframe_selector(selector) {
                diagnostics.push(Diagnostic::error(self.name(), error.to_string(), &step_path));
            }

            let Value::Object(body) = body else {
                let error = InputError::IllegalKeyframesStep {
                    step: selector.clone(),
                };
                diagnostics.push(Diagnostic::error(self.name(), error.to_string(), &step_path));
                continue;
            };

            for (key, value) in body {
                let property_path = format!("{}.{}", step_path, key);
                if let Some(diagnostic) = self.check_raw(&css_property_name(key), key, value, &property_path) {
                    diagnostics.push(diagnostic);
                }
            }
        }
        diagnostics
    }
}

impl LintRule for ValidValue {
    fn name(&self) -> &'static str {
        "valid-value"
    }

    fn description(&self) -> &'static str {
        "Values must be strings, numbers, lists of those, or null, and must normalize"
    }

    fn check_property(&self, check: &PropertyCheck<'_>) -> Vec<Diagnostic> {
        let property = css_property_name(check.key);
        match check.value {
            Value::Object(steps) if property == "animation-name" => self.check_keyframes(steps, check.path),
            value => self
                .check_raw(&property, check.key, value, check.path)
                .into_iter()
                .collect(),
        }
    }
}
