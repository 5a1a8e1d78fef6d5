use super::{find_style_files, style_stem};
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use quark_compiler::{BuildStore, CompiledModule, Compiler, CompilerOptions};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Project directory containing quark.config.json
    #[arg(default_value = ".")]
    pub path: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Class name prefix (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Add `<file>__<namespace>` marker classes
    #[arg(long)]
    pub dev: bool,
}

/// One compiled input file
struct CompiledFile {
    path: PathBuf,
    module: CompiledModule,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let project = cwd.join(&args.path);
    let config = Config::load(&project)?;
    let src_dir = config.get_src_dir(&project);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let files = find_style_files(&src_dir)?;
    if files.is_empty() {
        println!("{}", "⚠️  No .style.json files found".yellow());
        return Ok(());
    }
    println!("{} {} files", "🔨 Compiling".bright_blue().bold(), files.len());

    let options = compiler_options(&config, &args);
    let store = BuildStore::new();
    let results = compile_files(&files, &store, &options);

    let mut compiled = Vec::with_capacity(results.len());
    let mut error_count = 0;
    for (path, result) in files.iter().zip(results) {
        let relative_path = path.strip_prefix(&src_dir).unwrap_or(path);
        match result {
            Ok(file) if file.module.has_errors() => {
                error_count += file.module.errors.len();
                eprintln!("  {} {}", "✗".red(), relative_path.display());
                for error in &file.module.errors {
                    eprintln!("      {}", error.to_string().red());
                }
            }
            Ok(file) => {
                println!("  {} {}", "✓".green(), relative_path.display());
                compiled.push(file);
            }
            Err(err) => {
                error_count += 1;
                eprintln!("  {} {} - {}", "✗".red(), relative_path.display(), err.to_string().red());
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!("Compilation failed with {} errors", error_count));
    }

    let css = store.stylesheet().to_css();
    info!(rules = store.len(), files = compiled.len(), "Build complete");

    if args.stdout {
        println!("{}", css);
        for file in &compiled {
            println!("// {}", file.path.display());
            println!("{}", serde_json::to_string_pretty(&file.module.to_json())?);
        }
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => project.join(out),
        None => config.get_out_dir(&project),
    };
    write_outputs(&out_dir, &config.stylesheet_name, &src_dir, &compiled, &css)?;

    println!();
    println!(
        "{} Compiled {} files into {}",
        "✅".green(),
        compiled.len(),
        out_dir.join(&config.stylesheet_name).display()
    );
    Ok(())
}

fn compiler_options(config: &Config, args: &CompileArgs) -> CompilerOptions {
    let mut options = config.compiler_options.clone();
    if let Some(prefix) = &args.prefix {
        options.class_name_prefix = prefix.clone();
    }
    if args.dev {
        options.dev = true;
    }
    options
}

/// Compile every file in parallel against one store; results keep file order
fn compile_files(files: &[PathBuf], store: &BuildStore, options: &CompilerOptions) -> Vec<Result<CompiledFile>> {
    files
        .par_iter()
        .map(|path| -> Result<CompiledFile> {
            let source = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
            let file_name = path.display().to_string();
            debug!(file = %file_name, "Compiling file");
            let module = Compiler::new(store, options.clone()).compile_json(&source, Some(file_name.as_str()))?;
            Ok(CompiledFile {
                path: path.clone(),
                module,
            })
        })
        .collect()
}

fn write_outputs(
    out_dir: &Path,
    stylesheet_name: &str,
    src_dir: &Path,
    compiled: &[CompiledFile],
    css: &str,
) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(stylesheet_name), css)?;

    for file in compiled {
        let relative_path = file.path.strip_prefix(src_dir).unwrap_or(&file.path);
        let parent = relative_path.parent().unwrap_or_else(|| Path::new(""));
        let output_file = out_dir
            .join(parent)
            .join(format!("{}.styles.json", style_stem(&file.path)));

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_file, serde_json::to_string_pretty(&file.module.to_json())?)?;
    }

    Ok(())
}
