// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation report output.
//!
//! Renders a [`Report`] as colored text, Markdown, or JSON.

mod json;
mod markdown;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::validate::Report;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for rendering a validation report.
pub trait ReportFormatter {
    /// Write the report. Formatters that don't use color ignore the
    /// writer's color support.
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report) -> anyhow::Result<()>;
}

/// Write a report in the requested format.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    report: &Report,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };
    formatter.format_to(writer, report)
}

/// Display name for the report's source file.
pub(crate) fn source_label(report: &Report) -> String {
    report
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "configuration".to_string())
}

/// "1 error", "2 warnings".
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
