//! Format command.

use anyhow::Result;
use clap::Args;
use gtin::{Gtin, Layout};
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Layout used when neither a flag nor the config picks one.
const FALLBACK_LAYOUT: Layout = Layout::Gtin14;

/// Render a GTIN using a template or standard layout.
///
/// In a template, `0` takes a digit or pads with a zero, `9` takes a digit
/// or pads with a space, and anything else is copied. Digits are matched
/// from the right.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Raw GTIN.
    input: String,

    /// Positional template, e.g. `0-00000-00000-0`.
    #[arg(long, short, conflicts_with = "layout")]
    template: Option<String>,

    /// Standard layout (upc-a, ean-13, ean-8, gtin-14).
    #[arg(long, short)]
    layout: Option<Layout>,
}

#[derive(Debug, Serialize)]
struct FormatView {
    gtin: Gtin,
    template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<Layout>,
    formatted: String,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let gtin = Gtin::parse(&self.input)?;
        let (template, layout) =
            resolve_template(self.template, self.layout, ctx.config.default_layout);
        let formatted = gtin.format(&template);

        tracing::debug!(gtin = %gtin, template = %template, "formatting GTIN");

        match ctx.format {
            OutputFormat::Json => print_single(&FormatView {
                gtin,
                template,
                layout,
                formatted,
            }),
            OutputFormat::Table => println!("{formatted}"),
        }

        Ok(())
    }
}

/// Picks the template: explicit template, then layout flag, then the
/// configured default, then GTIN-14.
fn resolve_template(
    template: Option<String>,
    layout: Option<Layout>,
    default_layout: Option<Layout>,
) -> (String, Option<Layout>) {
    if let Some(template) = template {
        return (template, None);
    }

    let layout = layout.or(default_layout).unwrap_or(FALLBACK_LAYOUT);
    (layout.template().to_string(), Some(layout))
}
