// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lighthouserc print` command implementation.

use lighthouserc::cli::{Cli, PrintArgs};
use lighthouserc::config;
use lighthouserc::discovery;
use lighthouserc::error::ExitCode;

/// Run the print command.
pub fn run(cli: &Cli, args: &PrintArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let file = config::load(&path)?;

    print!("{}", config::to_string(&file, args.format)?);
    Ok(ExitCode::Success)
}
