use crate::diagnostic::Diagnostic;
use crate::rules::{ContextCheck, PropertyCheck, RuleRegistry};
use quark_compiler::{InputError, SelectorContext};
use serde_json::Value;

/// Lint options
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a style sheet source (JSON text)
pub fn lint_source(source: &str, options: LintOptions) -> Result<Vec<Diagnostic>, serde_json::Error> {
    let value: Value = serde_json::from_str(source)?;
    Ok(lint_stylesheet(&value, options))
}

/// Lint a style sheet given as `{ namespace: { key: value } }`
pub fn lint_stylesheet(sheet: &Value, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    let Value::Object(namespaces) = sheet else {
        diagnostics.push(Diagnostic::error(
            "style-shape",
            InputError::NonObjectStyleSheet.to_string(),
            "",
        ));
        return diagnostics;
    };

    for (namespace, body) in namespaces {
        let Value::Object(entries) = body else {
            let error = InputError::IllegalNamespaceValue {
                namespace: namespace.clone(),
            };
            diagnostics.push(Diagnostic::error("style-shape", error.to_string(), namespace.as_str()));
            continue;
        };

        let walker = Walker {
            registry: &registry,
            namespace,
        };
        walker.walk(entries, None, namespace, &mut diagnostics);
    }

    diagnostics
}

struct Walker<'a> {
    registry: &'a RuleRegistry,
    namespace: &'a str,
}

impl Walker<'_> {
    fn walk(
        &self,
        entries: &serde_json::Map<String, Value>,
        context: Option<&str>,
        prefix: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (key, value) in entries {
            let path = format!("{}.{}", prefix, key);

            if SelectorContext::from_key(key).is_some() {
                let check = ContextCheck {
                    namespace: self.namespace,
                    key,
                    parent: context,
                    path: &path,
                };
                for rule in self.registry.rules() {
                    diagnostics.extend(rule.check_context(&check));
                }

                match value {
                    // Nested blocks are already reported; don't descend twice
                    Value::Object(body) if context.is_none() => self.walk(body, Some(key), &path, diagnostics),
                    Value::Object(_) => {}
                    _ => {
                        let error = InputError::IllegalPropValue { key: key.clone() };
                        diagnostics.push(Diagnostic::error("style-shape", error.to_string(), &path));
                    }
                }
                continue;
            }

            let check = PropertyCheck {
                namespace: self.namespace,
                context,
                key,
                value,
                path: &path,
            };
            for rule in self.registry.rules() {
                diagnostics.extend(rule.check_property(&check));
            }
        }
    }
}
