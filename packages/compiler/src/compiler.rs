//! Style sheet compiler - namespaces to compiled style objects and rules

use crate::emitter::{AtomicClass, Declaration, NormalizedKeyframes};
use crate::error::{CompileResult, NormalizationError};
use crate::input::{KeyframesDef, Namespace, SelectorContext, StyleEntry, StyleProperty, StyleSheetInput, StyleValue};
use crate::normalizer::{normalize_with_options, NormalizedValue};
use crate::options::CompilerOptions;
use crate::properties::{css_property_name, resets, style_key};
use crate::store::{BuildStore, InjectedRule, Stylesheet};
use quark_runtime::CompiledStyleObject;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Output of compiling one style sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledModule {
    pub namespaces: BTreeMap<String, CompiledStyleObject>,
    /// Rules this module needs, sorted for insertion
    pub rules: Vec<InjectedRule>,
    /// Declarations skipped because their value didn't normalize
    #[serde(skip)]
    pub errors: Vec<NormalizationError>,
}

impl CompiledModule {
    pub fn namespace(&self, name: &str) -> Option<&CompiledStyleObject> {
        self.namespaces.get(name)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn stylesheet(&self) -> Stylesheet {
        Stylesheet::from_rules(self.rules.iter().cloned())
    }

    /// `{ namespace: { key: class | null, "$$css": true } }`
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.namespaces
                .iter()
                .map(|(name, style)| (name.clone(), style.to_json()))
                .collect(),
        )
    }
}

/// Compiles style sheets against a shared build store
pub struct Compiler<'s> {
    store: &'s BuildStore,
    options: CompilerOptions,
}

/// Per-module state threaded through namespace compilation
#[derive(Default)]
struct ModuleState {
    rules: Vec<InjectedRule>,
    errors: Vec<NormalizationError>,
}

impl<'s> Compiler<'s> {
    pub fn new(store: &'s BuildStore, options: CompilerOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn store(&self) -> &'s BuildStore {
        self.store
    }

    /// Compile every namespace of `input`. `file` names the source for dev
    /// markers and logs.
    #[instrument(skip(self, input, file), fields(file = file.unwrap_or("<inline>"), namespaces = input.namespaces.len()))]
    pub fn compile(&self, input: &StyleSheetInput, file: Option<&str>) -> CompileResult<CompiledModule> {
        info!("Compiling style sheet");

        let mut state = ModuleState::default();
        let mut namespaces = BTreeMap::new();
        for (name, namespace) in &input.namespaces {
            let style = self.compile_namespace(name, namespace, file, &mut state)?;
            namespaces.insert(name.clone(), style);
        }

        let module = CompiledModule {
            namespaces,
            rules: Stylesheet::from_rules(state.rules).into_rules(),
            errors: state.errors,
        };

        info!(
            rules = module.rules.len(),
            errors = module.errors.len(),
            "Compilation complete"
        );
        Ok(module)
    }

    /// Parse a JSON style sheet and compile it
    pub fn compile_json(&self, source: &str, file: Option<&str>) -> CompileResult<CompiledModule> {
        let input = StyleSheetInput::from_json_str(source)?;
        self.compile(&input, file)
    }

    /// Emit a standalone keyframes block and return its generated name
    pub fn keyframes(&self, def: &KeyframesDef) -> CompileResult<AtomicClass> {
        let keyframes = NormalizedKeyframes::from_def(def, &self.options)?;
        Ok(self.store.emit_keyframes(&keyframes, &self.options.class_name_prefix)?)
    }

    fn compile_namespace(
        &self,
        name: &str,
        namespace: &Namespace,
        file: Option<&str>,
        state: &mut ModuleState,
    ) -> CompileResult<CompiledStyleObject> {
        debug!(namespace = %name, entries = namespace.entries.len(), "Compiling namespace");

        let mut style = CompiledStyleObject::new();
        // Properties that ended up in the object, for shorthand resets
        let mut applied: Vec<(SelectorContext, String)> = Vec::new();

        for entry in &namespace.entries {
            match entry {
                StyleEntry::Property(property) => {
                    self.compile_property(name, &SelectorContext::None, property, &mut style, &mut applied, state)?;
                }
                StyleEntry::Conditional {
                    context,
                    properties,
                } => {
                    for property in properties {
                        self.compile_property(name, context, property, &mut style, &mut applied, state)?;
                    }
                }
            }
        }

        for (context, property) in &applied {
            for reset in resets(property) {
                let key = context.decorate(&style_key(reset));
                if !style.contains_key(&key) {
                    style.set_null(key);
                }
            }
        }

        if self.options.dev {
            let marker = format!("{}__{}", file.map(file_stem).unwrap_or("style"), name);
            style.set_class(marker.clone(), marker);
        }

        Ok(style)
    }

    fn compile_property(
        &self,
        namespace: &str,
        context: &SelectorContext,
        property: &StyleProperty,
        style: &mut CompiledStyleObject,
        applied: &mut Vec<(SelectorContext, String)>,
        state: &mut ModuleState,
    ) -> CompileResult<()> {
        let css_property = css_property_name(&property.key);
        let key = context.decorate(&style_key(&css_property));

        let value = match &property.value {
            StyleValue::Null => {
                style.set_null(key);
                applied.push((context.clone(), css_property));
                return Ok(());
            }
            StyleValue::Raw(raw) => normalize_with_options(&css_property, raw, &self.options),
            StyleValue::Keyframes(def) => match NormalizedKeyframes::from_def(def, &self.options) {
                Ok(keyframes) => {
                    let atomic = self
                        .store
                        .emit_keyframes(&keyframes, &self.options.class_name_prefix)?;
                    state.rules.push(InjectedRule::from(&atomic));
                    Ok(NormalizedValue::single(atomic.class_name))
                }
                Err(error) => Err(error),
            },
        };

        let value = match value {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    namespace = %namespace,
                    property = %css_property,
                    error = %error,
                    "Skipping declaration"
                );
                state.errors.push(error);
                return Ok(());
            }
        };

        let declaration = Declaration::new(css_property.clone(), value, context.clone());
        let atomic = self
            .store
            .emit(&declaration, &self.options.class_name_prefix)?;
        state.rules.push(InjectedRule::from(&atomic));
        style.set_class(key, atomic.class_name);
        applied.push((context.clone(), css_property));
        Ok(())
    }
}

/// File name up to its first dot (`src/Button.style.json` → `Button`)
fn file_stem(file: &str) -> &str {
    let name = Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file);
    name.split('.').next().unwrap_or(name)
}
