// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants from their `Default` impls.

/// Collection defaults.
pub mod collect {
    /// Runs per URL when `numberOfRuns` is omitted (Lighthouse CI default).
    pub const NUMBER_OF_RUNS: u32 = 3;
}

/// Assertion vocabulary.
pub mod assert {
    /// Prefix for assertion keys that target a category score.
    pub const CATEGORY_PREFIX: &str = "categories:";

    /// Category ids reported by Lighthouse.
    pub const KNOWN_CATEGORIES: &[&str] =
        &["performance", "accessibility", "best-practices", "seo", "pwa"];

    /// Inclusive bounds for `minScore`.
    pub const MIN_SCORE: f64 = 0.0;
    pub const MAX_SCORE: f64 = 1.0;
}

/// Values used by `lighthouserc init`.
pub mod starter {
    use crate::config::Severity;

    pub const NUMBER_OF_RUNS: u32 = 5;

    /// (assertion key, severity, minScore)
    pub const ASSERTIONS: &[(&str, Severity, f64)] = &[
        ("categories:performance", Severity::Warn, 1.0),
        ("categories:accessibility", Severity::Error, 1.0),
    ];
}

/// Config file names in discovery precedence order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "lighthouserc.js",
    "lighthouserc.cjs",
    ".lighthouserc.js",
    ".lighthouserc.cjs",
    ".lighthouserc.json",
    "lighthouserc.json",
    ".lighthouserc.yml",
    "lighthouserc.yml",
    ".lighthouserc.yaml",
    "lighthouserc.yaml",
    ".lighthouserc.toml",
    "lighthouserc.toml",
    // Extensionless, read as JSON
    ".lighthouserc",
];
