pub mod compile;
pub mod lint;

pub use compile::{compile, CompileArgs};
pub use lint::{lint, LintArgs};

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const STYLE_SUFFIX: &str = ".style.json";

/// All style definition files under `dir`, in path order
pub fn find_style_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_style = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(STYLE_SUFFIX))
            .unwrap_or(false);
        if path.is_file() && is_style {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// `button.style.json` → `button`
pub fn style_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    name.strip_suffix(STYLE_SUFFIX).unwrap_or(name).to_string()
}
