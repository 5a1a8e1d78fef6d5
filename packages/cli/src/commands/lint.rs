use super::find_style_files;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use quark_linter::{lint_source, Diagnostic, DiagnosticLevel, LintOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Input .style.json file or directory to lint
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Diagnostic counts for one or more files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

impl Totals {
    fn add(&mut self, other: Totals) {
        self.diagnostics += other.diagnostics;
        self.errors += other.errors;
        self.warnings += other.warnings;
    }
}

pub fn lint(args: LintArgs, cwd: &Path) -> Result<()> {
    let input = cwd.join(&args.input);

    let files = if input.is_file() {
        vec![input]
    } else if input.is_dir() {
        find_style_files(&input)?
    } else {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    };

    let mut totals = Totals::default();
    for file in &files {
        totals.add(lint_file(file, &args.format)?);
    }

    println!(
        "✨ {} Checked {} files, {} diagnostics",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        },
        files.len(),
        totals.diagnostics
    );
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }

    if totals.errors > 0 {
        return Err(anyhow!("{} lint errors", totals.errors));
    }
    Ok(())
}

fn lint_file(file_path: &Path, format: &str) -> Result<Totals> {
    let source = fs::read_to_string(file_path)?;

    let diagnostics = match lint_source(&source, LintOptions::default()) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            eprintln!("{} Failed to parse {}: {}", "✗".red(), file_path.display(), err);
            return Ok(Totals {
                diagnostics: 1,
                errors: 1,
                warnings: 0,
            });
        }
    };

    let totals = Totals {
        diagnostics: diagnostics.len(),
        errors: diagnostics.iter().filter(|d| d.is_error()).count(),
        warnings: diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
            .count(),
    };

    if diagnostics.is_empty() {
        return Ok(totals);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        println!("{}", file_path.display());
        for diagnostic in &diagnostics {
            print_diagnostic(diagnostic);
        }
        println!();
    }

    Ok(totals)
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let level = match diagnostic.level {
        DiagnosticLevel::Error => "error".red().bold(),
        DiagnosticLevel::Warning => "warning".yellow().bold(),
        DiagnosticLevel::Info => "info".blue().bold(),
    };

    println!(
        "  {} [{}] {} {}",
        level,
        diagnostic.rule,
        diagnostic.path.dimmed(),
        diagnostic.message
    );
    if let Some(suggestion) = &diagnostic.suggestion {
        println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
    }
}
