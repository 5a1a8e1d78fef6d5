mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{lint_source, lint_stylesheet, LintOptions};
pub use rules::{ContextCheck, LintRule, PropertyCheck, RuleRegistry};
