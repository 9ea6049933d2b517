// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use termcolor::WriteColor;

use crate::color::scheme;
use crate::validate::{Level, Report};

use super::{ReportFormatter, plural, source_label};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report) -> anyhow::Result<()> {
        write!(writer, "{}: ", source_label(report))?;
        if report.is_valid() {
            writer.set_color(&scheme::pass())?;
            writeln!(writer, "PASS")?;
        } else {
            writer.set_color(&scheme::error())?;
            writeln!(writer, "FAIL")?;
        }
        writer.reset()?;

        for diag in &report.diagnostics {
            let spec = match diag.level {
                Level::Error => scheme::error(),
                Level::Warning => scheme::warning(),
            };
            write!(writer, "  ")?;
            writer.set_color(&spec)?;
            write!(writer, "{}[{}]", diag.level.as_str(), diag.kind)?;
            writer.reset()?;
            write!(writer, " ")?;
            writer.set_color(&scheme::path())?;
            write!(writer, "{}", diag.path)?;
            writer.reset()?;
            writer.set_color(&scheme::message())?;
            writeln!(writer, ": {}", diag.message)?;
            writer.reset()?;
        }

        if !report.diagnostics.is_empty() {
            writeln!(
                writer,
                "\n{}, {}",
                plural(report.error_count(), "error"),
                plural(report.warning_count(), "warning")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
