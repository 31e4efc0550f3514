//! CLI commands.

mod check;
mod check_digit;
mod compare;
mod config;
mod format;
mod parse;

use std::io::{self, BufRead};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// gtin CLI - Parse, validate, and format Global Trade Item Numbers.
#[derive(Debug, Parser)]
#[command(name = "gtin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse GTINs into canonical form.
    Parse(parse::ParseCommand),

    /// Check whether inputs are valid GTINs.
    Check(check::CheckCommand),

    /// Render a GTIN using a template or standard layout.
    Format(format::FormatCommand),

    /// Compare two GTINs.
    Compare(compare::CompareCommand),

    /// Compute the check digit for a payload.
    CheckDigit(check_digit::CheckDigitCommand),

    /// Show or change saved defaults.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Commands {
    fn tolerates_bad_config(&self) -> bool {
        matches!(self, Commands::Config(_) | Commands::Version)
    }
}

impl Cli {
    /// Whether JSON logging was requested.
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        // Config commands must still run when the saved config is broken
        let config = if self.command.tolerates_bad_config() {
            Config::load_or_default()
        } else {
            Config::load()?
        };

        // Flag wins over config and environment
        let format = self
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();

        tracing::debug!(?format, ?config, "Configuration loaded");

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Compare(cmd) => cmd.run(ctx),
            Commands::CheckDigit(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("gtin {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Use the given inputs, or read one per line from stdin when there are none.
fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    read_lines(io::stdin().lock())
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if !trimmed.trim().is_empty() {
            inputs.push(trimmed.to_string());
        }
    }

    if inputs.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(inputs)
}
