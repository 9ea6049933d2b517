//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the lighthouserc crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{self, ConfigFile, Format, RunConfig};

/// Configuration matching the starter file: 5 runs, performance warn and
/// accessibility error, both at minScore 1.
pub const STARTER_JSON: &str = r#"{
  "ci": {
    "collect": { "numberOfRuns": 5 },
    "assert": {
      "assertions": {
        "categories:performance": ["warn", {"minScore": 1}],
        "categories:accessibility": ["error", {"minScore": 1}]
      }
    },
    "upload": {},
    "server": {},
    "wizard": {}
  }
}"#;

/// Parse JSON content, panicking on failure.
pub fn parse_json(content: &str) -> ConfigFile {
    config::parse(content, Format::Json, Path::new(".lighthouserc.json")).unwrap()
}

/// Parse JSON content and return only the run configuration.
pub fn run_config(content: &str) -> RunConfig {
    parse_json(content).ci
}

/// Creates a temp directory containing one file.
pub fn temp_project_with(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
