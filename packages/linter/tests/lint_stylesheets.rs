/// Lint tests - diagnostics over whole style sheets
///
/// These tests validate that:
/// - Every default rule reports against the right path
/// - Sheets the compiler accepts lint clean
/// - Custom rules plug into the registry

use quark_compiler::{BuildStore, Compiler, CompilerOptions};
use quark_linter::{
    lint_source, lint_stylesheet, Diagnostic, DiagnosticLevel, LintOptions, LintRule,
    PropertyCheck, RuleRegistry,
};
use serde_json::json;

#[test]
fn test_default_rules_report_each_problem() {
    let sheet = json!({
        "button": {
            "colr": "red",
            "width": "12qq",
            "color": "red !important",
            ":hovr": { "color": "blue" },
            ":hover": { ":focus": { "color": "green" } },
            "@layer base": { "color": "black" }
        }
    });

    let diagnostics = lint_stylesheet(&sheet, LintOptions::default());
    let find = |rule: &str, path: &str| {
        diagnostics
            .iter()
            .find(|d| d.rule == rule && d.path == path)
            .unwrap_or_else(|| panic!("no {} diagnostic at {}: {:?}", rule, path, diagnostics))
    };

    find("valid-property", "button.colr");
    find("valid-value", "button.width");
    find("no-important", "button.color");
    find("valid-pseudo", "button.:hovr");
    find("valid-pseudo", "button.:hover.:focus");
    assert_eq!(find("valid-pseudo", "button.@layer base").level, DiagnosticLevel::Warning);
    assert_eq!(diagnostics.len(), 6);
}

#[test]
fn test_compilable_sheet_lints_clean() {
    let source = r#"{
        "card": {
            "backgroundColor": "white",
            "borderRadius": 8,
            "transition": "box-shadow 150ms ease-in-out",
            "animationName": { "from": { "opacity": 0 }, "to": { "opacity": 1 } },
            ":hover": { "boxShadow": "0 4px 8px rgba(0, 0, 0, 0.15)" },
            "@media (max-width: 640px)": { "padding": [8, "1rem"] }
        },
        "reset": { "margin": null }
    }"#;

    let diagnostics = lint_source(source, LintOptions::default()).expect("valid JSON");
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let store = BuildStore::new();
    let module = Compiler::new(&store, CompilerOptions::default())
        .compile_json(source, None)
        .expect("Compilation failed");
    assert!(!module.has_errors());
}

struct NoColor;

impl LintRule for NoColor {
    fn name(&self) -> &'static str {
        "no-color"
    }

    fn description(&self) -> &'static str {
        "Colors come from the theme"
    }

    fn check_property(&self, check: &PropertyCheck<'_>) -> Vec<Diagnostic> {
        if check.key == "color" && check.context.is_some() {
            return vec![Diagnostic::warning(self.name(), "Use a theme color", check.path)];
        }
        Vec::new()
    }
}

#[test]
fn test_custom_rule() {
    let mut registry = RuleRegistry::empty();
    registry.add_rule(Box::new(NoColor));
    assert_eq!(registry.rules().len(), 1);

    let sheet = json!({ "link": { "color": "red", ":hover": { "color": "blue" } } });
    let diagnostics = lint_stylesheet(
        &sheet,
        LintOptions {
            registry: Some(registry),
        },
    );

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].path, "link.:hover.color");
    assert!(!diagnostics[0].is_error());
}
