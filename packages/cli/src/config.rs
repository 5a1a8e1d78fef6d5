use quark_compiler::CompilerOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "quark.config.json";

/// Quark configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for *.style.json files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Where the stylesheet and compiled modules are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// File name of the build stylesheet inside `outDir`
    #[serde(default = "default_stylesheet_name")]
    pub stylesheet_name: String,

    #[serde(default)]
    pub compiler_options: CompilerOptions,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_stylesheet_name() -> String {
    "styles.css".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, dir: &Path) -> PathBuf {
        dir.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, dir: &Path) -> PathBuf {
        dir.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            stylesheet_name: default_stylesheet_name(),
            compiler_options: CompilerOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "components",
            "outDir": "build",
            "stylesheetName": "atoms.css",
            "compilerOptions": { "classNamePrefix": "q", "dev": true }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "components");
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.stylesheet_name, "atoms.css");
        assert_eq!(config.compiler_options.class_name_prefix, "q");
        assert!(config.compiler_options.dev);
        assert_eq!(config.compiler_options.rem_base, 16.0);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.stylesheet_name, "styles.css");
        assert_eq!(config.compiler_options.class_name_prefix, "x");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "public" }"#).unwrap();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.compiler_options, CompilerOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "srcDir": "styles" }"#).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap().src_dir, "styles");
    }
}
