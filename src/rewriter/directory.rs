use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::FileOutcome;
use crate::projects::jsonl_files_in;
use crate::rewriter::repair_file;

/// Repair every `*.jsonl` file directly inside `dir` (no recursion).
///
/// Files are processed in name order, each to completion before the next.
/// Returns one `(path, outcome)` pair per file.
pub fn repair_directory(dir: &Path) -> Result<Vec<(PathBuf, FileOutcome)>> {
    let mut results = Vec::new();
    for file in jsonl_files_in(dir)? {
        let outcome = repair_file(&file)?;
        results.push((file, outcome));
    }
    Ok(results)
}
