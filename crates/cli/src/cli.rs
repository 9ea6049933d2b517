//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::Format;

/// Validate and scaffold Lighthouse CI run configurations
#[derive(Parser)]
#[command(name = "lighthouserc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file instead of searching for one
    #[arg(short = 'C', long = "config", global = true, env = "LIGHTHOUSERC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a configuration for problems
    Validate(ValidateArgs),
    /// Print the normalized configuration, with defaults filled in
    Print(PrintArgs),
    /// Write a starter configuration to the current directory, or to --config
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct PrintArgs {
    /// Serialization format
    #[arg(short, long, default_value = "json")]
    pub format: Format,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Serialization format of the written file [default: json, or from
    /// the --config extension]
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
