// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic validation of a loaded run configuration.
//!
//! Parsing guarantees the configuration is well-typed. The rules here check
//! ranges and cross-field consistency, and report every problem found
//! instead of stopping at the first.

mod rules;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::RunConfig;

pub use rules::{AssertRule, CollectRule, OrchestrationRule, UploadRule};

/// How a diagnostic affects the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Configuration is rejected.
    Error,
    /// Reported, but the configuration is still accepted.
    Warning,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    RangeViolation,
    InvalidUrl,
    MissingField,
    InvalidKey,
    UnknownCategory,
    IgnoredOptions,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::RangeViolation => "range-violation",
            DiagnosticKind::InvalidUrl => "invalid-url",
            DiagnosticKind::MissingField => "missing-field",
            DiagnosticKind::InvalidKey => "invalid-key",
            DiagnosticKind::UnknownCategory => "unknown-category",
            DiagnosticKind::IgnoredOptions => "ignored-options",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    /// Dotted location in the document, e.g. `ci.collect.numberOfRuns`.
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(
        kind: DiagnosticKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Warning,
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// A validation rule over one section of the configuration.
pub trait Rule {
    /// Section the rule covers, used in debug logs.
    fn name(&self) -> &'static str;

    /// Append any findings to `out`.
    fn check(&self, config: &RunConfig, out: &mut Vec<Diagnostic>);
}

/// All rules, in document order.
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CollectRule),
        Box::new(AssertRule),
        Box::new(UploadRule),
        Box::new(OrchestrationRule),
    ]
}

/// Run every rule and collect the findings.
pub fn validate(config: &RunConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for rule in rules() {
        let before = diagnostics.len();
        rule.check(config, &mut diagnostics);
        tracing::debug!("{}: {} finding(s)", rule.name(), diagnostics.len() - before);
    }
    diagnostics
}

/// Outcome of validating one configuration file.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// File the configuration was loaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Validate `config` and wrap the findings.
    pub fn for_config(source: Option<PathBuf>, config: &RunConfig) -> Self {
        Self {
            source,
            diagnostics: validate(config),
        }
    }

    /// True when no error-level diagnostics were found.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
