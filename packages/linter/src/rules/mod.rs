use crate::diagnostic::Diagnostic;
use serde_json::Value;

mod no_important;
mod valid_property;
mod valid_pseudo;
mod valid_value;

pub use no_important::NoImportant;
pub use valid_property::ValidProperty;
pub use valid_pseudo::ValidPseudo;
pub use valid_value::ValidValue;

/// A property key with its raw value
#[derive(Debug, Clone, Copy)]
pub struct PropertyCheck<'a> {
    pub namespace: &'a str,
    /// Enclosing pseudo or at-rule key, if any
    pub context: Option<&'a str>,
    pub key: &'a str,
    pub value: &'a Value,
    pub path: &'a str,
}

/// A pseudo or at-rule key opening a conditional block
#[derive(Debug, Clone, Copy)]
pub struct ContextCheck<'a> {
    pub namespace: &'a str,
    pub key: &'a str,
    /// Set when the block is nested inside another conditional block
    pub parent: Option<&'a str>,
    pub path: &'a str,
}

/// Trait for implementing lint rules
pub trait LintRule: Send + Sync {
    /// Rule name (e.g., "valid-property")
    fn name(&self) -> &'static str;

    /// Rule description
    fn description(&self) -> &'static str;

    fn check_property(&self, _check: &PropertyCheck<'_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn check_context(&self, _check: &ContextCheck<'_>) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a registry with the default rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ValidProperty),
                Box::new(ValidPseudo),
                Box::new(ValidValue),
                Box::new(NoImportant),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Get all rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}
