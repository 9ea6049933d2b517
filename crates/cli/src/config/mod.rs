// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration schema and loader.
//!
//! A configuration document wraps the run configuration in a `ci` key:
//!
//! ```json
//! { "ci": { "collect": { "numberOfRuns": 5 }, "assert": { "assertions": {} } } }
//! ```
//!
//! Loading only checks that fields are well-typed. Range and consistency
//! checks live in [`crate::validate`].

pub mod defaults;

mod assertions;
mod collect;
mod server;
mod upload;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use assertions::{
    AggregationMethod, AssertConfig, Assertion, AssertionOptions, Preset, Severity,
};
pub use collect::CollectConfig;
pub use server::{ServerConfig, SqlDialect, StorageConfig, StorageMethod, WizardConfig};
pub use upload::{UploadConfig, UploadTarget};

/// A configuration document as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub ci: RunConfig,
}

/// The run configuration consumed by the auditing tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Which pages to audit and how often.
    pub collect: CollectConfig,

    /// Pass/fail rules applied to the collected results.
    pub assert: AssertConfig,

    /// Where reports are persisted.
    pub upload: UploadConfig,

    /// Local report server settings.
    pub server: ServerConfig,

    /// Project wizard settings.
    pub wizard: WizardConfig,
}

impl RunConfig {
    /// Configuration written by `lighthouserc init`.
    pub fn starter() -> Self {
        let assertions: BTreeMap<String, Assertion> = defaults::starter::ASSERTIONS
            .iter()
            .map(|&(key, severity, min_score)| {
                (key.to_string(), Assertion::new(severity).with_min_score(min_score))
            })
            .collect();

        Self {
            collect: CollectConfig {
                number_of_runs: defaults::starter::NUMBER_OF_RUNS,
                ..CollectConfig::default()
            },
            assert: AssertConfig {
                assertions,
                ..AssertConfig::default()
            },
            ..Self::default()
        }
    }
}

/// On-disk serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    ///
    /// Files without an extension (`.lighthouserc`) are read as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(Format::Json);
        };
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yml" | "yaml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: format!(".{other}"),
            }),
        }
    }

    /// Preferred file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yml",
            Format::Toml => "toml",
        }
    }

    /// File name `lighthouserc init` writes for this format.
    pub fn default_file_name(self) -> String {
        format!(".lighthouserc.{}", self.extension())
    }
}

/// Load and parse a configuration file, detecting its format from the name.
pub fn load(path: &Path) -> Result<ConfigFile> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loading {} as {:?}", path.display(), format);
    parse(&content, format, path)
}

/// Parse configuration content. `path` is only used in error messages.
pub fn parse(content: &str, format: Format, path: &Path) -> Result<ConfigFile> {
    let parsed = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Serialize a configuration document.
///
/// JSON has no NaN or infinity, so a non-finite threshold fails instead of
/// being written as `null`.
pub fn to_string(config: &ConfigFile, format: Format) -> Result<String> {
    if format == Format::Json
        && let Some(message) = non_finite_threshold(&config.ci)
    {
        return Err(Error::Serialize(message));
    }
    let out = match format {
        Format::Json => serde_json::to_string_pretty(config)
            .map(|s| s + "\n")
            .map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        Format::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
    };
    out.map_err(Error::Serialize)
}

fn non_finite_threshold(config: &RunConfig) -> Option<String> {
    config.assert.assertions.iter().find_map(|(key, assertion)| {
        let options = &assertion.options;
        [
            ("minScore", options.min_score),
            ("maxNumericValue", options.max_numeric_value),
        ]
        .into_iter()
        .find_map(|(field, value)| {
            value.filter(|v| !v.is_finite()).map(|v| {
                format!("ci.assert.assertions.{key}.{field} is {v}, which JSON cannot represent")
            })
        })
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
