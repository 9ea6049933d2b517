// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lighthouserc init` command implementation.

use std::path::{Path, PathBuf};

use anyhow::Context;

use lighthouserc::cli::{Cli, InitArgs};
use lighthouserc::config::{self, ConfigFile, Format, RunConfig};
use lighthouserc::discovery;
use lighthouserc::error::ExitCode;

/// Run the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (target, format) = target(cli.config.as_deref(), args.format, &cwd)?;

    if !args.force {
        // Without --config, any discoverable config in cwd blocks init
        let existing = match cli.config {
            Some(_) => target.exists().then(|| target.clone()),
            None => discovery::config_in_dir(&cwd),
        };
        if let Some(existing) = existing {
            let name = existing.strip_prefix(&cwd).unwrap_or(&existing);
            anyhow::bail!("{} already exists (use --force to overwrite)", name.display());
        }
    }

    let starter = ConfigFile {
        ci: RunConfig::starter(),
    };
    let content = config::to_string(&starter, format)?;
    let shown = target.strip_prefix(&cwd).unwrap_or(&target).display().to_string();
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("failed to create {shown}"))?;
    }
    std::fs::write(&target, content).with_context(|| format!("failed to write {shown}"))?;

    println!("Created {shown}");
    Ok(ExitCode::Success)
}

/// Where to write and in which format.
///
/// An explicit path decides the format from its extension; `--format` must
/// agree with it.
fn target(
    explicit: Option<&Path>,
    format: Option<Format>,
    cwd: &Path,
) -> anyhow::Result<(PathBuf, Format)> {
    let Some(path) = explicit else {
        let format = format.unwrap_or_default();
        return Ok((cwd.join(format.default_file_name()), format));
    };

    let path = cwd.join(path);
    let detected = Format::from_path(&path)?;
    if let Some(requested) = format
        && requested != detected
    {
        let requested = format!("{requested:?}").to_lowercase();
        anyhow::bail!("--format {requested} does not match {}", path.display());
    }
    Ok((path, detected))
}
