//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Configuration with 5 runs and perfect-score assertions.
pub const STARTER_CONFIG: &str = r#"{
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

/// Returns a Command configured to run the lighthouserc binary
/// with logging env cleared.
pub fn lighthouserc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lighthouserc"));
    cmd.env_remove("LIGHTHOUSERC_CONFIG")
        .env_remove("LIGHTHOUSERC_LOG");
    cmd
}

/// A temporary project directory, isolated from discovery above it by a
/// `.git` marker.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with `.lighthouserc.json` holding `content`.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file(".lighthouserc.json", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Run lighthouserc with `args` from the project root.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        lighthouserc_cmd()
            .args(args)
            .current_dir(self.path())
            .assert()
    }
}
