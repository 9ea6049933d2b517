// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion rules: severity plus threshold options per metric.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Assertion configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AssertConfig {
    /// Built-in assertion set applied before `assertions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    /// Rules keyed by `categories:<id>` or an audit id.
    pub assertions: BTreeMap<String, Assertion>,

    /// Report passing assertions as well as failures.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_passed_assertions: bool,

    /// Path to a performance budgets file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgets_file: Option<String>,
}

/// Built-in assertion presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[serde(rename = "lighthouse:all")]
    All,
    #[serde(rename = "lighthouse:recommended")]
    Recommended,
    #[serde(rename = "lighthouse:no-pwa")]
    NoPwa,
}

/// How an assertion failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    pub const TOKENS: &'static [&'static str] = &["off", "warn", "error"];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How per-run values are combined before comparing against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationMethod {
    Median,
    Optimistic,
    Pessimistic,
    MedianRun,
}

/// Threshold conditions attached to an assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AssertionOptions {
    /// Minimum acceptable score, a fraction in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    /// Upper bound on the audit's numeric value (milliseconds, bytes, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_numeric_value: Option<f64>,

    /// Upper bound on the number of audit detail items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_method: Option<AggregationMethod>,
}

impl AssertionOptions {
    pub fn is_empty(&self) -> bool {
        self.min_score.is_none()
            && self.max_numeric_value.is_none()
            && self.max_length.is_none()
            && self.aggregation_method.is_none()
    }
}

/// A single assertion rule.
///
/// Written on disk as `"warn"`, `["warn"]`, or `["warn", { "minScore": 0.9 }]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub severity: Severity,
    pub options: AssertionOptions,
}

impl Assertion {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: AssertionOptions::default(),
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.options.min_score = Some(min_score);
        self
    }

    pub fn with_max_numeric_value(mut self, value: f64) -> Self {
        self.options.max_numeric_value = Some(value);
        self
    }
}

impl Serialize for Assertion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            (self.severity, &self.options).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Assertion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AssertionVisitor)
    }
}

struct AssertionVisitor;

impl<'de> Visitor<'de> for AssertionVisitor {
    type Value = Assertion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity string or a [severity, options] array")
    }

    fn visit_str<E: de::Error>(self, token: &str) -> Result<Assertion, E> {
        Severity::from_token(token)
            .map(Assertion::new)
            .ok_or_else(|| E::unknown_variant(token, Severity::TOKENS))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Assertion, A::Error> {
        let severity: Severity = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let options: AssertionOptions = seq.next_element()?.unwrap_or_default();
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Assertion { severity, options })
    }
}

#[cfg(test)]
#[path = "assertions_tests.rs"]
mod tests;
