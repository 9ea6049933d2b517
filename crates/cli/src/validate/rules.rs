// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-section validation rules.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{Diagnostic, DiagnosticKind, Rule};
use crate::config::defaults::assert::{CATEGORY_PREFIX, KNOWN_CATEGORIES, MAX_SCORE, MIN_SCORE};
use crate::config::{Assertion, RunConfig, Severity, SqlDialect, StorageConfig, UploadTarget};

/// Audit ids and category keys, with optional `:`-separated qualifiers
/// (`resource-summary:script:size`).
#[allow(clippy::expect_used)]
static ASSERTION_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(:[A-Za-z0-9_-]+)*$").expect("valid regex pattern")
});

/// Checks `ci.collect`.
pub struct CollectRule;

impl Rule for CollectRule {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn check(&self, config: &RunConfig, out: &mut Vec<Diagnostic>) {
        let collect = &config.collect;

        if collect.number_of_runs < 1 {
            out.push(Diagnostic::error(
                DiagnosticKind::RangeViolation,
                "ci.collect.numberOfRuns",
                format!("must be at least 1, got {}", collect.number_of_runs),
            ));
        }

        for (i, url) in collect.url.iter().enumerate() {
            if let Err(message) = check_http_url(url) {
                out.push(Diagnostic::error(
                    DiagnosticKind::InvalidUrl,
                    format!("ci.collect.url[{i}]"),
                    message,
                ));
            }
        }
    }
}

/// Checks `ci.assert.assertions`.
pub struct AssertRule;

impl Rule for AssertRule {
    fn name(&self) -> &'static str {
        "assert"
    }

    fn check(&self, config: &RunConfig, out: &mut Vec<Diagnostic>) {
        for (key, assertion) in &config.assert.assertions {
            check_assertion(key, assertion, out);
        }
    }
}

fn check_assertion(key: &str, assertion: &Assertion, out: &mut Vec<Diagnostic>) {
    let path = format!("ci.assert.assertions.{key}");

    if !ASSERTION_KEY.is_match(key) {
        out.push(Diagnostic::error(
            DiagnosticKind::InvalidKey,
            path.clone(),
            format!("`{key}` is not an audit id or `categories:<id>` key"),
        ));
    } else if let Some(category) = key.strip_prefix(CATEGORY_PREFIX)
        && !KNOWN_CATEGORIES.contains(&category)
    {
        out.push(Diagnostic::warning(
            DiagnosticKind::UnknownCategory,
            path.clone(),
            format!(
                "unknown category `{category}`, expected one of: {}",
                KNOWN_CATEGORIES.join(", ")
            ),
        ));
    }

    let options = &assertion.options;

    if let Some(score) = options.min_score
        && !(MIN_SCORE..=MAX_SCORE).contains(&score)
    {
        out.push(Diagnostic::error(
            DiagnosticKind::RangeViolation,
            format!("{path}.minScore"),
            format!("must be within [{MIN_SCORE}, {MAX_SCORE}], got {score}"),
        ));
    }

    if let Some(value) = options.max_numeric_value
        && !(value.is_finite() && value >= 0.0)
    {
        out.push(Diagnostic::error(
            DiagnosticKind::RangeViolation,
            format!("{path}.maxNumericValue"),
            format!("must be a non-negative number, got {value}"),
        ));
    }

    if assertion.severity == Severity::Off && !options.is_empty() {
        out.push(Diagnostic::warning(
            DiagnosticKind::IgnoredOptions,
            path,
            "assertion is off, its thresholds have no effect",
        ));
    }
}

/// Checks `ci.upload`.
pub struct UploadRule;

impl Rule for UploadRule {
    fn name(&self) -> &'static str {
        "upload"
    }

    fn check(&self, config: &RunConfig, out: &mut Vec<Diagnostic>) {
        let upload = &config.upload;

        match upload.target {
            UploadTarget::TemporaryPublicStorage => {}
            UploadTarget::Lhci => {
                if upload.server_base_url.is_none() {
                    out.push(missing("ci.upload.serverBaseUrl", "the lhci target"));
                }
                if upload.token.is_none() {
                    out.push(missing("ci.upload.token", "the lhci target"));
                }
            }
            UploadTarget::Filesystem => {
                if upload.output_dir.is_none() {
                    out.push(missing("ci.upload.outputDir", "the filesystem target"));
                }
            }
        }

        if let Some(url) = &upload.server_base_url {
            push_url_error(url, "ci.upload.serverBaseUrl", out);
        }
    }
}

/// Checks `ci.server` and `ci.wizard`.
pub struct OrchestrationRule;

impl Rule for OrchestrationRule {
    fn name(&self) -> &'static str {
        "orchestration"
    }

    fn check(&self, config: &RunConfig, out: &mut Vec<Diagnostic>) {
        if let Some(storage) = &config.server.storage {
            check_storage(storage, out);
        }

        if let Some(url) = &config.wizard.server_base_url {
            push_url_error(url, "ci.wizard.serverBaseUrl", out);
        }
    }
}

fn check_storage(storage: &StorageConfig, out: &mut Vec<Diagnostic>) {
    match storage.sql_dialect {
        SqlDialect::Sqlite => {
            if storage.sql_database_path.is_none() {
                out.push(missing("ci.server.storage.sqlDatabasePath", "sqlite storage"));
            }
        }
        SqlDialect::Postgres | SqlDialect::Mysql => {
            if storage.sql_connection_url.is_none() {
                out.push(missing(
                    "ci.server.storage.sqlConnectionUrl",
                    "postgres and mysql storage",
                ));
            }
        }
    }
}

fn missing(path: &str, required_by: &str) -> Diagnostic {
    Diagnostic::error(
        DiagnosticKind::MissingField,
        path,
        format!("required by {required_by}"),
    )
}

fn push_url_error(url: &str, path: &str, out: &mut Vec<Diagnostic>) {
    if let Err(message) = check_http_url(url) {
        out.push(Diagnostic::error(DiagnosticKind::InvalidUrl, path, message));
    }
}

/// Accept only absolute http(s) URLs.
fn check_http_url(raw: &str) -> Result<(), String> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        Ok(url) => Err(format!("`{raw}` is not an http(s) URL (scheme `{}`)", url.scheme())),
        Err(e) => Err(format!("`{raw}` is not an absolute URL: {e}")),
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
