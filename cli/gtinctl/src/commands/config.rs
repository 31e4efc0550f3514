//! Config commands (saved defaults for format and layout).

use anyhow::Result;
use clap::{Args, Subcommand};
use gtin::Layout;
use serde::Serialize;

use crate::config::{config_path, Config};
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI defaults.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Set the layout used by `gtin format` when none is given.
    SetLayout {
        /// Layout name (upc-a, ean-13, ean-8, gtin-14).
        layout: Layout,
    },

    /// Clear all saved defaults.
    Clear,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    default_layout: Option<Layout>,
    format: Option<String>,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetLayout { layout } => set_layout(ctx, layout),
            ConfigSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        default_layout: ctx.config.default_layout,
        format: ctx.config.format.clone(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!(
                "default_layout: {}",
                view.default_layout
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
            println!("format: {}", view.format.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn set_layout(ctx: CommandContext, layout: Layout) -> Result<()> {
    // Start from the saved file so environment overrides are not persisted
    let mut stored = Config::load_from_or_default(&config_path()?);
    stored.default_layout = Some(layout);
    stored.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true, "layout": layout })),
        OutputFormat::Table => print_success(&format!("Default layout set to {layout}")),
    }

    Ok(())
}

fn clear(ctx: CommandContext) -> Result<()> {
    Config::default().save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved config"),
    }

    Ok(())
}
