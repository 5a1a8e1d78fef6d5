//! Build-scoped rule store
//!
//! One store per build. Compilation units running on different threads share
//! it by reference and agree on one class and one rule per declaration.

use crate::emitter::{AtomicClass, Declaration, NormalizedKeyframes};
use crate::error::IntegrityError;
use crate::priority::Priority;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

struct StoredRule {
    /// Canonical input the class was generated from
    source: String,
    class: AtomicClass,
}

/// Every atomic class emitted during a build, keyed by class name
#[derive(Default)]
pub struct BuildStore {
    rules: DashMap<String, StoredRule>,
}

impl BuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class and rule for a declaration, emitted once per build
    pub fn emit(&self, declaration: &Declaration, prefix: &str) -> Result<AtomicClass, IntegrityError> {
        self.insert(declaration.canonical(), declaration.to_atomic(prefix))
    }

    pub fn emit_keyframes(
        &self,
        keyframes: &NormalizedKeyframes,
        prefix: &str,
    ) -> Result<AtomicClass, IntegrityError> {
        let atomic = keyframes.to_atomic(prefix);
        self.insert(format!("@keyframes\u{1f}{}", keyframes.body()), atomic)
    }

    pub(crate) fn insert(&self, source: String, atomic: AtomicClass) -> Result<AtomicClass, IntegrityError> {
        match self.rules.entry(atomic.class_name.clone()) {
            Entry::Occupied(entry) => {
                let stored = entry.get();
                if stored.source != source {
                    return Err(IntegrityError::HashCollision {
                        class_name: atomic.class_name,
                        existing: readable(&stored.source),
                        incoming: readable(&source),
                    });
                }
                if stored.class != atomic {
                    return Err(IntegrityError::RuleMismatch {
                        class_name: atomic.class_name,
                        declaration: readable(&source),
                        existing: format!("{} @ {}", stored.class.rule_text, stored.class.priority),
                        incoming: format!("{} @ {}", atomic.rule_text, atomic.priority),
                    });
                }
                Ok(stored.class.clone())
            }
            Entry::Vacant(entry) => {
                debug!(
                    class_name = %atomic.class_name,
                    priority = %atomic.priority,
                    rule = %atomic.rule_text,
                    "Emitting rule"
                );
                entry.insert(StoredRule {
                    source,
                    class: atomic.clone(),
                });
                Ok(atomic)
            }
        }
    }

    pub fn get(&self, class_name: &str) -> Option<AtomicClass> {
        self.rules.get(class_name).map(|entry| entry.class.clone())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule of the build in cascade order
    #[instrument(skip(self), fields(rules = self.rules.len()))]
    pub fn stylesheet(&self) -> Stylesheet {
        Stylesheet::from_rules(self.rules.iter().map(|entry| InjectedRule::from(&entry.class)))
    }
}

fn readable(source: &str) -> String {
    source.replace('\u{1f}', " ").trim().to_string()
}

/// A rule and the score that places it in the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedRule {
    pub rule_text: String,
    pub priority: Priority,
}

impl From<&AtomicClass> for InjectedRule {
    fn from(atomic: &AtomicClass) -> Self {
        Self {
            rule_text: atomic.rule_text.clone(),
            priority: atomic.priority,
        }
    }
}

/// Rules sorted by ascending priority, then rule text; each rule once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    rules: Vec<InjectedRule>,
}

impl Stylesheet {
    pub fn from_rules(rules: impl IntoIterator<Item = InjectedRule>) -> Self {
        let mut rules: Vec<InjectedRule> = rules.into_iter().collect();
        rules.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.rule_text.cmp(&b.rule_text))
        });
        rules.dedup_by(|a, b| a.rule_text == b.rule_text);
        Self { rules }
    }

    pub fn rules(&self) -> &[InjectedRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<InjectedRule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, rule_text: &str) -> bool {
        self.rules.iter().any(|rule| rule.rule_text == rule_text)
    }

    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.rule_text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SelectorContext;
    use crate::normalizer::NormalizedValue;

    fn declaration(property: &str, value: &str, context: SelectorContext) -> Declaration {
        Declaration::new(property, NormalizedValue::single(value), context)
    }

    #[test]
    fn test_emit_is_idempotent() {
        let store = BuildStore::new();
        let decl = declaration("color", "red", SelectorContext::None);

        let first = store.emit(&decl, "x").unwrap();
        let second = store.emit(&decl, "x").unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&first.class_name), Some(first));
    }

    #[test]
    fn test_hash_collision_is_fatal() {
        // "plumless" and "buckeroo" share a CRC-32
        let store = BuildStore::new();
        store
            .emit(&declaration("color", "red", SelectorContext::at_rule("plumless")), "x")
            .unwrap();

        let err = store
            .emit(&declaration("color", "red", SelectorContext::at_rule("buckeroo")), "x")
            .unwrap_err();
        assert!(matches!(err, IntegrityError::HashCollision { .. }));
        assert!(err.to_string().contains("plumless color red"));
    }

    #[test]
    fn test_rule_mismatch_is_fatal() {
        let store = BuildStore::new();
        let decl = declaration("color", "red", SelectorContext::None);
        let atomic = store.emit(&decl, "x").unwrap();

        let tampered = AtomicClass {
            priority: Priority(1),
            ..atomic
        };
        let err = store.insert(decl.canonical(), tampered).unwrap_err();
        assert!(matches!(err, IntegrityError::RuleMismatch { .. }));
    }

    #[test]
    fn test_stylesheet_order() {
        let store = BuildStore::new();
        store.emit(&declaration("color", "blue", SelectorContext::pseudo(":hover")), "x").unwrap();
        store.emit(&declaration("margin-top", "0", SelectorContext::None), "x").unwrap();
        store.emit(&declaration("margin", "0", SelectorContext::None), "x").unwrap();

        let sheet = store.stylesheet();
        let priorities: Vec<Priority> = sheet.rules().iter().map(|rule| rule.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();

        assert_eq!(sheet.len(), 3);
        assert_eq!(priorities, sorted);
        assert!(sheet.rules()[0].rule_text.contains("{margin:0}"));
        assert!(sheet.rules()[2].rule_text.contains(":hover"));
    }

    #[test]
    fn test_stylesheet_dedups_rule_text() {
        let rule = InjectedRule {
            rule_text: ".x1{color:red}".to_string(),
            priority: Priority(1000),
        };
        let sheet = Stylesheet::from_rules(vec![rule.clone(), rule]);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.to_css(), ".x1{color:red}");
    }
}
