//! Parse command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::{collect_inputs, CommandContext};

/// Parse GTINs into canonical form.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Raw GTINs. Read from stdin, one per line, when omitted.
    inputs: Vec<String>,
}

/// One parse result.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ParseRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "GTIN", display = "display_option")]
    gtin: Option<String>,

    #[tabled(rename = "Check", display = "display_option_u8")]
    check_digit: Option<u8>,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,

    #[tabled(skip)]
    error_kind: Option<&'static str>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

fn display_option_u8(opt: &Option<u8>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl ParseRow {
    fn from_input(input: String) -> Self {
        match gtin::parse(&input) {
            Ok(gtin) => Self {
                check_digit: Some(gtin.check_digit()),
                gtin: Some(gtin.into()),
                error: None,
                error_kind: None,
                input,
            },
            Err(err) => Self {
                gtin: None,
                check_digit: None,
                error: Some(err.to_string()),
                error_kind: Some(err.kind()),
                input,
            },
        }
    }

    fn is_ok(&self) -> bool {
        self.gtin.is_some()
    }
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = collect_inputs(self.inputs)?;
        let rows = parse_all(inputs);

        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|row| !row.is_ok()).count();
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

fn parse_all(inputs: Vec<String>) -> Vec<ParseRow> {
    inputs.into_iter().map(ParseRow::from_input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_report_canonical_values_and_errors() {
        let rows = parse_all(vec![
            "036000291452".to_string(),
            "12a34".to_string(),
            "000".to_string(),
        ]);

        assert_eq!(rows[0].gtin.as_deref(), Some("36000291452"));
        assert_eq!(rows[0].check_digit, Some(2));
        assert!(rows[0].is_ok());

        assert_eq!(rows[1].error_kind, Some("invalid_characters"));
        assert_eq!(rows[2].error_kind, Some("empty"));
        assert!(!rows[2].is_ok());
    }

    #[test]
    fn table_renders_missing_values_as_dash() {
        let rows = parse_all(vec!["036000291452".to_string(), "12a34".to_string()]);
        let table = tabled::Table::new(&rows).to_string();

        assert!(table.contains("GTIN"));
        assert!(table.contains("36000291452"));
        assert!(table.contains("invalid character 'a'"));
        assert!(table.contains(" - "));
        assert!(!table.contains("None"));
    }
}
