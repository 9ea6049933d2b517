// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use lighthouserc::cli::{Cli, Command};
use lighthouserc::error::ExitCode;

mod cmd_init;
mod cmd_print;
mod cmd_validate;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Validate(args) => cmd_validate::run(&cli, args),
        Command::Print(args) => cmd_print::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "lighthouserc", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::ConfigError
        }
    };
    std::process::exit(code.into());
}

/// Log to stderr. `LIGHTHOUSERC_LOG` takes an `EnvFilter` directive;
/// `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LIGHTHOUSERC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
