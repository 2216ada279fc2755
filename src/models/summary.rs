/// Aggregate result of rewriting one JSONL file.
///
/// Computed once per rewrite pass and discarded after being reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRepairSummary {
    /// Original size minus rewritten size. Negative when canonical
    /// re-serialization grows the file.
    pub bytes_saved: i64,
    /// Lines that parsed only after a repair was applied
    pub fixed_lines: usize,
    /// Lines dropped as empty or unfixable
    pub removed_lines: usize,
    /// Records that had reasoning content stripped
    pub thinking_stripped: usize,
}

impl FileRepairSummary {
    /// True when the rewrite changed anything worth reporting.
    pub fn changed(&self) -> bool {
        self.fixed_lines > 0 || self.removed_lines > 0 || self.thinking_stripped > 0
    }

    /// Short status string like `thinking:3, fixed:1` or `no change`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.thinking_stripped > 0 {
            parts.push(format!("thinking:{}", self.thinking_stripped));
        }
        if self.fixed_lines > 0 {
            parts.push(format!("fixed:{}", self.fixed_lines));
        }
        if self.removed_lines > 0 {
            parts.push(format!("removed:{}", self.removed_lines));
        }

        if parts.is_empty() { "no change".to_string() } else { parts.join(", ") }
    }
}

/// Per-file status reported by the rewriter.
///
/// Missing and zero-length files are distinct statuses, not errors;
/// processing continues to the next file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Source file does not exist
    NotFound,
    /// Source file exists but is zero-length
    EmptyFile,
    /// File was read, repaired and written back
    Rewritten(FileRepairSummary),
}
