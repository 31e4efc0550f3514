//! Check command (validation only).

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, status_cell};

use super::{collect_inputs, CommandContext};

/// Check whether inputs are valid GTINs.
///
/// Exits non-zero if any input is invalid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Raw GTINs. Read from stdin, one per line, when omitted.
    inputs: Vec<String>,

    /// Suppress the result table.
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Status", display = "display_status")]
    valid: bool,
}

fn display_status(valid: &bool) -> String {
    status_cell(*valid)
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = collect_inputs(self.inputs)?;
        let rows = check_all(inputs);

        if !self.quiet {
            print_output(&rows, ctx.format);
        }

        let failed = rows.iter().filter(|row| !row.valid).count();
        if failed > 0 {
            return Err(CliError::Rejected {
                failed,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn check_all(inputs: Vec<String>) -> Vec<CheckRow> {
    inputs
        .into_iter()
        .map(|input| CheckRow {
            valid: gtin::is_valid_gtin(&input),
            input,
        })
        .collect()
}
