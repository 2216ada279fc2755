use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

/// All immediate subdirectories of the projects root, sorted by name.
///
/// Returns an empty Vec if the root doesn't exist (not an error).
pub fn all_project_dirs(projects_dir: &Path) -> Result<Vec<PathBuf>> {
    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Subdirectories of the root whose name contains `keyword` as a
/// case-sensitive substring.
pub fn matching_project_dirs(projects_dir: &Path, keyword: &str) -> Result<Vec<PathBuf>> {
    Ok(all_project_dirs(projects_dir)?
        .into_iter()
        .filter(|dir| {
            dir.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(keyword))
        })
        .collect())
}

/// The `limit` most recently modified project directories, newest first.
///
/// Directories whose modification time cannot be read sort last.
pub fn recent_project_dirs(
    projects_dir: &Path,
    limit: usize,
) -> Result<Vec<(PathBuf, SystemTime)>> {
    let mut dirs: Vec<(PathBuf, SystemTime)> = all_project_dirs(projects_dir)?
        .into_iter()
        .map(|dir| {
            let modified = fs::metadata(&dir)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (dir, modified)
        })
        .collect();

    dirs.sort_by(|a, b| b.1.cmp(&a.1));
    dirs.truncate(limit);
    Ok(dirs)
}

/// `*.jsonl` files directly inside `dir` (no recursion), sorted by name.
pub fn jsonl_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonl") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
