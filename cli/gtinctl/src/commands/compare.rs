//! Compare command.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use gtin::Gtin;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Compare two GTINs.
///
/// Ordering is lexicographic over the canonical digits, so `93` sorts after
/// `123`.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Left-hand GTIN.
    left: String,

    /// Right-hand GTIN.
    right: String,
}

#[derive(Debug, Serialize)]
struct CompareView {
    left: Gtin,
    right: Gtin,
    ordering: &'static str,
    symbol: &'static str,
}

fn describe(ordering: Ordering) -> (&'static str, &'static str) {
    match ordering {
        Ordering::Less => ("less", "<"),
        Ordering::Equal => ("equal", "="),
        Ordering::Greater => ("greater", ">"),
    }
}

impl CompareCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let left = Gtin::parse(&self.left)?;
        let right = Gtin::parse(&self.right)?;
        let (ordering, symbol) = describe(gtin::compare(&left, &right));

        match ctx.format {
            OutputFormat::Json => print_single(&CompareView {
                left,
                right,
                ordering,
                symbol,
            }),
            OutputFormat::Table => println!("{left} {symbol} {right} ({ordering})"),
        }

        Ok(())
    }
}
