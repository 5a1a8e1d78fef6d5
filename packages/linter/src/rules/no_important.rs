use super::{LintRule, PropertyCheck};
use crate::diagnostic::Diagnostic;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Rule: disallow !important in style values
pub struct NoImportant;

fn important_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)!\s*important").unwrap())
}

impl LintRule for NoImportant {
    fn name(&self) -> &'static str {
        "no-important"
    }

    fn description(&self) -> &'static str {
        "Disallow !important in style values"
    }

    fn check_property(&self, check: &PropertyCheck<'_>) -> Vec<Diagnostic> {
        let has_important = match check.value {
            Value::String(text) => important_regex().is_match(text),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .any(|text| important_regex().is_match(text)),
            _ => false,
        };

        if !has_important {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.name(),
            format!("Avoid using !important in '{}'", check.key),
            check.path,
        )
        .with_suggestion("Rely on merge order instead: later styles already win")]
    }
}
