// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;
use termcolor::WriteColor;

use crate::validate::Report;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report) -> anyhow::Result<()> {
        let mut output = serde_json::Map::new();

        if let Some(ref source) = report.source {
            output.insert("source".to_string(), json!(source.display().to_string()));
        }
        output.insert("valid".to_string(), json!(report.is_valid()));
        output.insert("errors".to_string(), json!(report.error_count()));
        output.insert("warnings".to_string(), json!(report.warning_count()));
        output.insert(
            "diagnostics".to_string(),
            serde_json::to_value(&report.diagnostics)?,
        );

        serde_json::to_writer_pretty(&mut *writer, &serde_json::Value::Object(output))?;
        writeln!(writer)?;
        Ok(())
    }
}
