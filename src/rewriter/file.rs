use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{FileOutcome, FileRepairSummary, RepairOutcome};
use crate::repair::{repair_line, strip_thinking};

/// Repair one JSONL file in place.
///
/// Streams every line through the repair engine, drops unrecoverable lines,
/// strips reasoning content from the survivors and writes the re-serialized
/// records back over the original file (temp file + rename). Surviving lines
/// keep their input order.
///
/// Missing and zero-length files are reported as distinct outcomes rather
/// than errors so that callers iterating a directory can keep going.
pub fn repair_file(path: &Path) -> Result<FileOutcome> {
    if !path.exists() {
        return Ok(FileOutcome::NotFound);
    }

    let original_size = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if original_size == 0 {
        return Ok(FileOutcome::EmptyFile);
    }

    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    // Invalid byte sequences are replaced, not fatal
    let text = String::from_utf8_lossy(&raw);

    let mut summary = FileRepairSummary::default();
    let mut output = String::with_capacity(raw.len());

    for line in text.lines() {
        let mut record = match repair_line(line) {
            RepairOutcome::Parsed(record) => record,
            RepairOutcome::Fixed(record) => {
                summary.fixed_lines += 1;
                record
            }
            RepairOutcome::Unrecoverable(_) => {
                summary.removed_lines += 1;
                continue;
            }
        };

        if strip_thinking(&mut record) {
            summary.thinking_stripped += 1;
        }

        let serialized = serde_json::to_string(&record).with_context(|| {
            format!("Failed to serialize repaired record from {}", path.display())
        })?;
        output.push_str(&serialized);
        output.push('\n');
    }

    write_atomic(path, output.as_bytes())?;

    summary.bytes_saved = original_size as i64 - output.len() as i64;

    Ok(FileOutcome::Rewritten(summary))
}

/// Replace `path` contents via a sibling temp file + rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("repaired.jsonl");
    let temp_path = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file over {}", path.display()))?;

    Ok(())
}
