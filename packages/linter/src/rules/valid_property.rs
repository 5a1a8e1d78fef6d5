use super::{LintRule, PropertyCheck};
use crate::diagnostic::Diagnostic;
use quark_compiler::properties::{css_property_name, is_known_property};

/// Rule: property keys must name a known CSS property
pub struct ValidProperty;

impl LintRule for ValidProperty {
    fn name(&self) -> &'static str {
        "valid-property"
    }

    fn description(&self) -> &'static str {
        "Property keys must be known CSS properties or custom properties"
    }

    fn check_property(&self, check: &PropertyCheck<'_>) -> Vec<Diagnostic> {
        let property = css_property_name(check.key);
        if is_known_property(&property) {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.name(),
            format!("This is not a key that is allowed: '{}'", check.key),
            check.path,
        )]
    }
}
