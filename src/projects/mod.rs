//! Discovery of project directories under the repair root
//!
//! Selection never fails on absence: a missing root or an unmatched keyword
//! yields an empty Vec, and the CLI turns that into a "not found" message.
//! Only genuinely unreadable directories propagate as errors.

pub mod discovery;

pub use discovery::{all_project_dirs, jsonl_files_in, matching_project_dirs, recent_project_dirs};
