//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for fabricating a home directory with a `.claude/projects` tree
pub struct ProjectsDirBuilder {
    temp_home: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a builder with an empty `.claude/projects` directory
    pub fn new() -> Self {
        let temp_home = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_home.path().join(".claude").join("projects"))
            .expect("Failed to create projects dir");
        Self { temp_home }
    }

    /// The fabricated home directory (what HOME should point at)
    pub fn home(&self) -> &Path {
        self.temp_home.path()
    }

    /// The projects root inside the fabricated home
    pub fn projects_dir(&self) -> PathBuf {
        self.temp_home.path().join(".claude").join("projects")
    }

    /// Add a project directory containing the given `(filename, content)` files
    pub fn with_project(self, encoded_name: &str, files: &[(&str, &str)]) -> Self {
        let project_dir = self.projects_dir().join(encoded_name);
        fs::create_dir(&project_dir).expect("Failed to create project dir");
        for (filename, content) in files {
            fs::write(project_dir.join(filename), content).expect("Failed to write project file");
        }
        self
    }

    /// Build and return the temp home directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_home
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A transcript line carrying a thinking block and a text block
pub fn assistant_line_with_thinking(text: &str) -> String {
    format!(
        concat!(
            r#"{{"type":"assistant","message":{{"role":"assistant","content":"#,
            r#"[{{"type":"thinking","thinking":"Analyzing..."}},"#,
            r#"{{"type":"text","text":"{}"}}]}},"uuid":"550e8400-e29b-41d4-a716-446655440001"}}"#
        ),
        text
    )
}

/// A clean transcript line with a single text block
pub fn user_line(text: &str) -> String {
    format!(
        concat!(
            r#"{{"type":"user","message":{{"role":"user","content":"#,
            r#"[{{"type":"text","text":"{}"}}]}},"uuid":"550e8400-e29b-41d4-a716-446655440002"}}"#
        ),
        text
    )
}
