// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output, for pull request comments.

use termcolor::WriteColor;

use crate::validate::Report;

use super::{ReportFormatter, plural, source_label};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report) -> anyhow::Result<()> {
        let status = if report.is_valid() { "PASS" } else { "FAIL" };
        writeln!(writer, "## `{}`: {}\n", source_label(report), status)?;

        if report.diagnostics.is_empty() {
            writeln!(writer, "No problems found.")?;
            return Ok(());
        }

        writeln!(writer, "| Level | Kind | Path | Message |")?;
        writeln!(writer, "|-------|------|------|---------|")?;
        for diag in &report.diagnostics {
            writeln!(
                writer,
                "| {} | {} | `{}` | {} |",
                diag.level.as_str(),
                diag.kind,
                diag.path,
                diag.message.replace('|', "\\|")
            )?;
        }

        writeln!(
            writer,
            "\n{}, {}",
            plural(report.error_count(), "error"),
            plural(report.warning_count(), "warning")
        )?;
        Ok(())
    }
}
