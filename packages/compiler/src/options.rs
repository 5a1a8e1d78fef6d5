use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_NAME_PREFIX: &str = "x";
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Options that change generated output. Two builds only agree on class
/// names when their options agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Prefix of every generated class and keyframes name
    #[serde(default = "default_class_name_prefix")]
    pub class_name_prefix: String,

    /// Add a `<file>__<namespace>` marker class to each compiled object
    #[serde(default)]
    pub dev: bool,

    /// Rewrite `font-size` px lengths as rem
    #[serde(default)]
    pub legacy_font_size_px_to_rem: bool,

    #[serde(default = "default_rem_base")]
    pub rem_base: f64,
}

fn default_class_name_prefix() -> String {
    DEFAULT_CLASS_NAME_PREFIX.to_string()
}

fn default_rem_base() -> f64 {
    DEFAULT_REM_BASE
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            class_name_prefix: default_class_name_prefix(),
            dev: false,
            legacy_font_size_px_to_rem: false,
            rem_base: default_rem_base(),
        }
    }
}

impl CompilerOptions {
    pub fn dev() -> Self {
        Self {
            dev: true,
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_name_prefix = prefix.into();
        self
    }

    pub fn with_legacy_font_size(mut self) -> Self {
        self.legacy_font_size_px_to_rem = true;
        self
    }
}
