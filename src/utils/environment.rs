use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default repair root (~/.claude/projects).
///
/// Resolved once at startup and injected into the orchestration layer; the
/// repair engine itself never reads the environment.
pub fn default_projects_dir() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".claude").join("projects"))
}
