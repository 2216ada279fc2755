//! jsonl-repair - Repair corrupted Claude Code JSONL transcripts
//!
//! This library repairs line-delimited JSON transcript files that have become
//! corrupted - truncated mid-write, littered with stray control characters, or
//! carrying internal-reasoning payloads - and rewrites them in place as clean,
//! valid JSONL. It supports:
//!
//! - Best-effort repair of a single malformed line (`repair_line`)
//! - Removal of `thinking` content from parsed records (`strip_thinking`)
//! - In-place rewrite of a `.jsonl` file or a whole project directory
//! - Discovery of project directories under `~/.claude/projects`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use jsonl_repair::{FileOutcome, repair_file};
//!
//! match repair_file(Path::new("/Users/alice/.claude/projects/-demo/session.jsonl"))? {
//!     FileOutcome::Rewritten(summary) => println!("{}", summary.describe()),
//!     other => println!("{:?}", other),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod projects;
pub mod repair;
pub mod rewriter;
pub mod utils;

// Re-export commonly used types
pub use models::{DropReason, FileOutcome, FileRepairSummary, RepairOutcome};
pub use repair::{repair_line, strip_thinking};
pub use rewriter::{repair_directory, repair_file};
