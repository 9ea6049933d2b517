// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors raised while locating, reading or (de)serializing a configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error(
        "unsupported config format `{extension}` for {}: use .json, .yml, .yaml or .toml",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("no lighthouserc file found in {} or its parents", start.display())]
    NotFound { start: PathBuf },

    #[error("failed to serialize configuration: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Configuration is valid (warnings allowed).
    Success = 0,
    /// Configuration loaded but failed validation.
    ValidationFailed = 1,
    /// Configuration could not be found, read or parsed.
    ConfigError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
