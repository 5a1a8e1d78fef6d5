use quark_compiler::{BuildStore, Compiler, CompilerOptions};
use quark_runtime::merge_json;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct CompileResult {
    css: String,
    code: String,
}

#[wasm_bindgen]
impl CompileResult {
    /// Rules this module needs, one per line
    #[wasm_bindgen(getter)]
    pub fn css(&self) -> String {
        self.css.clone()
    }

    /// Compiled style objects as JSON
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> String {
        self.code.clone()
    }
}

/// One build: every compile shares a store, so equal declarations share a rule
#[wasm_bindgen]
pub struct Build {
    store: BuildStore,
    options: CompilerOptions,
}

#[wasm_bindgen]
impl Build {
    /// `options` is a JSON `CompilerOptions` object; omitted fields use defaults
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<String>) -> Result<Build, JsValue> {
        let options = match options {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?,
            None => CompilerOptions::default(),
        };
        Ok(Build {
            store: BuildStore::new(),
            options,
        })
    }

    /// Compile a JSON style sheet
    pub fn compile(&self, source: &str, file_path: &str) -> Result<CompileResult, JsValue> {
        let module = Compiler::new(&self.store, self.options.clone())
            .compile_json(source, Some(file_path))
            .map_err(|e| JsValue::from_str(&format!("Compile error: {}", e)))?;

        if module.has_errors() {
            let messages: Vec<String> = module.errors.iter().map(|e| e.to_string()).collect();
            return Err(JsValue::from_str(&messages.join("\n")));
        }

        let code = serde_json::to_string(&module.to_json())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
        Ok(CompileResult {
            css: module.stylesheet().to_css(),
            code,
        })
    }

    /// Every rule emitted by this build, in cascade order
    pub fn stylesheet(&self) -> String {
        self.store.stylesheet().to_css()
    }
}

/// Merge compiled style objects given as a JSON array of arguments
#[wasm_bindgen]
pub fn props(args: &str) -> Result<String, JsValue> {
    let args: Vec<Value> = serde_json::from_str(args)
        .map_err(|e| JsValue::from_str(&format!("Invalid arguments: {}", e)))?;
    merge_json(&args)
        .map(|result| result.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
