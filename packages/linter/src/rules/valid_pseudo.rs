use super::{ContextCheck, LintRule};
use crate::diagnostic::Diagnostic;
use quark_compiler::properties::is_valid_pseudo;
use quark_compiler::{InputError, SelectorContext};

const AT_RULES: &[&str] = &["@media", "@supports", "@container"];

/// Rule: conditional keys are whitelisted pseudos or known at-rules, one level deep
pub struct ValidPseudo;

impl LintRule for ValidPseudo {
    fn name(&self) -> &'static str {
        "valid-pseudo"
    }

    fn description(&self) -> &'static str {
        "Pseudo selectors must be whitelisted and conditional blocks cannot nest"
    }

    fn check_context(&self, check: &ContextCheck<'_>) -> Vec<Diagnostic> {
        if let Some(parent) = check.parent {
            let error = InputError::IllegalNestedPseudo {
                parent: parent.to_string(),
                key: check.key.to_string(),
            };
            return vec![Diagnostic::error(self.name(), error.to_string(), check.path)];
        }

        match SelectorContext::from_key(check.key) {
            Some(SelectorContext::Pseudo(pseudo)) if !is_valid_pseudo(&pseudo) => {
                let error = InputError::InvalidPseudo { pseudo };
                vec![Diagnostic::error(self.name(), error.to_string(), check.path)]
            }
            Some(SelectorContext::AtRule(condition)) => {
                let at_keyword = condition.split([' ', '(']).next().unwrap_or_default();
                if AT_RULES.contains(&at_keyword) {
                    return Vec::new();
                }
                vec![Diagnostic::warning(
                    self.name(),
                    format!("Unrecognized at-rule: '{}'", at_keyword),
                    check.path,
                )
                .with_suggestion("Use @media, @supports or @container")]
            }
            _ => Vec::new(),
        }
    }
}
