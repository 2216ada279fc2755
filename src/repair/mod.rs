//! Line repair and content sanitization for JSONL transcripts
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Per-line failures are values, not errors**: a line that cannot be
//!   recovered yields [`RepairOutcome::Unrecoverable`](crate::models::RepairOutcome)
//!   and is dropped by the caller. Nothing propagates as a fatal error for a
//!   single bad line, and line content is never surfaced beyond aggregate counts.
//!
//! - **Ordered fallback chain**: repair strategies run in a fixed order from
//!   most specific (closing an unterminated string) to most destructive
//!   (stripping control bytes), short-circuiting on the first successful parse.
//!   Cheap, precise fixes get a chance before aggressive mutation.
//!
//! - **Sanitization cannot fail**: [`strip_thinking`] only inspects and
//!   conditionally prunes an already-valid value; absent or oddly-shaped
//!   fields are not an error condition.
//!
//! Both functions are pure with respect to the filesystem, so they are fully
//! unit-testable on in-memory strings and values.

pub mod line;
pub mod sanitize;

pub use line::repair_line;
pub use sanitize::strip_thinking;
