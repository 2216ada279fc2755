use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;
use humansize::{DECIMAL, format_size};

use crate::models::FileOutcome;
use crate::projects::{all_project_dirs, matching_project_dirs, recent_project_dirs};
use crate::rewriter::{repair_directory, repair_file};
use crate::utils::{
    decode_path, default_projects_dir, expand_tilde, format_path_with_tilde, truncate_name,
};

/// How many entries the no-argument overview lists
const RECENT_PROJECT_LIMIT: usize = 10;
/// Display width cap for project paths
const MAX_DISPLAY_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "jsonl-repair")]
#[command(version = "0.1.0")]
#[command(about = "Repair corrupted Claude Code JSONL transcripts", long_about = None)]
pub struct Cli {
    /// Project keyword, or an absolute/home-relative path to a directory or .jsonl file
    pub target: Option<String>,

    /// Repair every project directory under the root
    #[arg(long)]
    pub all: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let projects_dir = default_projects_dir()?;
    run_with_root(&cli, &projects_dir)
}

/// Dispatch with an explicit root so tests can inject one.
pub fn run_with_root(cli: &Cli, projects_dir: &Path) -> Result<()> {
    if cli.all {
        let dirs = all_project_dirs(projects_dir)?;
        if dirs.is_empty() {
            println!("No project directories found under {}", display_root(projects_dir));
            return Ok(());
        }
        return repair_dirs(&dirs);
    }

    let Some(target) = &cli.target else {
        return print_overview(projects_dir);
    };

    if target.starts_with('/') || target.starts_with('~') {
        let path = expand_tilde(target);
        if path.is_file() {
            return report_single_file(&path);
        }
        if path.is_dir() {
            return repair_dirs(std::slice::from_ref(&path));
        }
        println!("Not found: {target}");
        return Ok(());
    }

    let dirs = matching_project_dirs(projects_dir, target)?;
    if dirs.is_empty() {
        println!("Not found: {target}");
        return Ok(());
    }
    repair_dirs(&dirs)
}

/// Repair each directory's JSONL files, printing one block per directory
/// that had anything to fix and a totals banner at the end.
fn repair_dirs(dirs: &[PathBuf]) -> Result<()> {
    let mut total_saved: i64 = 0;
    let mut total_files = 0usize;

    for dir in dirs {
        let results = match repair_directory(dir) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Warning: Failed to repair {}: {}", display_project_dir(dir), e);
                continue;
            }
        };

        let mut report_lines = Vec::new();
        let mut dir_saved: i64 = 0;

        for (path, outcome) in &results {
            if let FileOutcome::Rewritten(summary) = outcome
                && summary.changed()
            {
                dir_saved += summary.bytes_saved;
                report_lines.push(format!(
                    "  ✓ {}: {} ({})",
                    file_display_name(path),
                    summary.describe(),
                    format_saved(summary.bytes_saved)
                ));
            }
        }

        if !report_lines.is_empty() {
            println!();
            println!("📁 {}", display_project_dir(dir));
            for line in &report_lines {
                println!("{line}");
            }
            total_saved += dir_saved;
            total_files += report_lines.len();
        }
    }

    if total_files > 0 {
        println!();
        println!("{}", "=".repeat(50));
        println!("Fixed: {} files | Saved: {}", total_files, format_saved(total_saved));
    } else {
        println!("Nothing to fix");
    }

    Ok(())
}

/// A single explicitly-named file is always reported, changed or not.
fn report_single_file(path: &Path) -> Result<()> {
    let name = file_display_name(path);
    match repair_file(path)? {
        FileOutcome::NotFound => println!("· {name}: not found"),
        FileOutcome::EmptyFile => println!("· {name}: empty file"),
        FileOutcome::Rewritten(summary) => {
            let icon = if summary.changed() { "✓" } else { "·" };
            println!(
                "{icon} {name}: {} ({})",
                summary.describe(),
                format_saved(summary.bytes_saved)
            );
        }
    }
    Ok(())
}

/// Usage text plus the most recently modified project directories.
fn print_overview(projects_dir: &Path) -> Result<()> {
    println!("Repair corrupted Claude Code JSONL transcripts");
    println!();
    println!("Usage:");
    println!("  jsonl-repair <keyword>    Repair projects whose directory name contains <keyword>");
    println!("  jsonl-repair <path>       Repair a directory, or a single .jsonl file");
    println!("  jsonl-repair --all        Repair every project directory");
    println!("  jsonl-repair              Show this help and recent projects");
    println!();
    println!("Recent projects:");

    let recent = recent_project_dirs(projects_dir, RECENT_PROJECT_LIMIT)?;
    if recent.is_empty() {
        println!("  (none)");
    }
    for (dir, modified) in recent {
        let when: DateTime<Local> = modified.into();
        println!("  {}  {}", when.format("%Y-%m-%d %H:%M"), display_project_dir(&dir));
    }

    Ok(())
}

/// Human form of an encoded project directory name: decoded, ~-substituted,
/// truncated for display.
fn display_project_dir(dir: &Path) -> String {
    let Some(name) = dir.file_name().and_then(|name| name.to_str()) else {
        return dir.display().to_string();
    };
    let decoded = decode_path(name);
    truncate_name(&format_path_with_tilde(&decoded), MAX_DISPLAY_CHARS)
}

fn display_root(projects_dir: &Path) -> String {
    format_path_with_tilde(projects_dir)
}

fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `bytes_saved` can be negative when re-serialization grew the file.
fn format_saved(bytes: i64) -> String {
    let formatted = format_size(bytes.unsigned_abs(), DECIMAL);
    if bytes < 0 { format!("-{formatted}") } else { formatted }
}
