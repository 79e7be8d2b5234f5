use crate::discover::{default_extensions, discover};
use crate::error::{Error, Result};
use crate::rewrite::rewrite_file;
use clap::Parser;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "incpath")]
#[command(about = "Rewrite #include \"@/...\" markers in C/C++ sources into relative paths", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Preview changes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Write nothing; exit non-zero if any file would change
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Copy each file to <name>.bakN before overwriting it
    #[arg(long)]
    pub backup: bool,

    /// Additional extensions to scan (e.g. "inl", ".tpp")
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directories relative to the root to exclude (e.g. "build")
    #[arg(long = "exclude", value_name = "DIR")]
    pub excludes: Vec<PathBuf>,

    /// Per-file debug output
    #[arg(long)]
    pub verbose: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: usize,
    pub skipped: usize,
}

pub fn run(cli: Cli) -> Result<RunSummary> {
    if !cli.root.is_dir() {
        return Err(Error::RootNotFound(cli.root));
    }
    let root = cli.root.canonicalize()?;

    let extensions = build_extension_set(&cli.extensions);
    let preview = cli.dry_run || cli.check;
    let color = std::io::stdout().is_terminal();

    let mut summary = RunSummary::default();

    for path in discover(&root, &extensions, &cli.excludes) {
        summary.scanned += 1;

        let (new_text, changed) = match rewrite_file(&path, &root) {
            Ok(result) => result,
            Err(e) => {
                warn(&format!("skipping {}: {}", path.display(), e));
                summary.skipped += 1;
                continue;
            }
        };

        if !changed {
            if cli.verbose {
                println!("unchanged {}", display_path(&path, &root));
            }
            continue;
        }

        if preview {
            println!("would update {}", display_path(&path, &root));
            summary.changed += 1;
            continue;
        }

        if cli.backup {
            let backup = backup_path(&path);
            if let Err(e) = std::fs::copy(&path, &backup) {
                warn(&format!("skipping {}: backup failed: {}", path.display(), e));
                summary.skipped += 1;
                continue;
            }
            if cli.verbose {
                println!("backup {}", display_path(&backup, &root));
            }
        }

        if let Err(e) = std::fs::write(&path, new_text) {
            warn(&format!("skipping {}: {}", path.display(), e));
            summary.skipped += 1;
            continue;
        }

        let shown = display_path(&path, &root);
        if color {
            println!("{}", shown.green());
        } else {
            println!("{}", shown);
        }
        summary.changed += 1;
    }

    print_summary(&summary, preview, color);

    Ok(summary)
}

fn build_extension_set(extra: &[String]) -> Vec<String> {
    let mut extensions = default_extensions();
    for ext in extra {
        let trimmed = ext.trim_start_matches('.');
        if !trimmed.is_empty() && !extensions.iter().any(|e| e == trimmed) {
            extensions.push(trimmed.to_string());
        }
    }
    extensions
}

/// First free `<name>.bakN` sibling of `path`.
fn backup_path(path: &Path) -> PathBuf {
    let mut i = 1;
    loop {
        let candidate = PathBuf::from(format!("{}.bak{}", path.display(), i));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn warn(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "Warning:".yellow().bold(), msg);
    } else {
        eprintln!("Warning: {}", msg);
    }
}

fn print_summary(summary: &RunSummary, preview: bool, color: bool) {
    println!();
    println!("Summary:");
    println!("  Files scanned : {}", summary.scanned);
    if color && summary.changed > 0 {
        println!("  Files changed : {}", summary.changed.green());
    } else {
        println!("  Files changed : {}", summary.changed);
    }
    if color && summary.skipped > 0 {
        println!("  Files skipped : {}", summary.skipped.yellow());
    } else {
        println!("  Files skipped : {}", summary.skipped);
    }
    if preview {
        println!("No files were written.");
    }
}
