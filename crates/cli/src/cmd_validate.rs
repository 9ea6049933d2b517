// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lighthouserc validate` command implementation.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream};

use lighthouserc::cli::{Cli, OutputFormat, ValidateArgs};
use lighthouserc::config;
use lighthouserc::discovery;
use lighthouserc::error::ExitCode;
use lighthouserc::report;
use lighthouserc::validate::Report;

/// Run the validate command.
pub fn run(cli: &Cli, args: &ValidateArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let file = config::load(&path)?;

    // Show paths relative to where the user ran the command
    let shown = path.strip_prefix(&cwd).unwrap_or(&path).to_path_buf();
    let report = Report::for_config(Some(shown), &file.ci);
    tracing::debug!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );

    let choice = match args.output {
        OutputFormat::Text => args.color.choice(args.no_color),
        OutputFormat::Json | OutputFormat::Markdown => ColorChoice::Never,
    };
    let mut stdout = StandardStream::stdout(choice);
    report::format_report_to(&mut stdout, args.output, &report)?;
    stdout.flush()?;

    Ok(if report.is_valid() {
        ExitCode::Success
    } else {
        ExitCode::ValidationFailed
    })
}
