//! In-place rewriting of JSONL transcript files
//!
//! # Error Handling Strategy
//!
//! The rewriter combines graceful degradation with per-file atomicity:
//!
//! - **Per-line failures never fail the file**: unrecoverable lines are
//!   dropped and counted; the repair engine handles the line-level decisions.
//!
//! - **Missing and empty files are statuses, not errors**: they surface as
//!   [`FileOutcome::NotFound`](crate::models::FileOutcome) /
//!   [`FileOutcome::EmptyFile`](crate::models::FileOutcome) so directory-wide
//!   runs keep going.
//!
//! - **Decode tolerance**: invalid UTF-8 byte sequences in a source file are
//!   replaced rather than failing the whole file.
//!
//! - **Atomic replacement**: output is written to a sibling temp file and
//!   renamed over the original, so a crash mid-write cannot leave a
//!   half-written transcript.
//!
//! Genuine I/O failures (unreadable directory, failed rename) propagate as
//! `anyhow::Result` with context naming the path involved.

pub mod directory;
pub mod file;

pub use directory::repair_directory;
pub use file::repair_file;
