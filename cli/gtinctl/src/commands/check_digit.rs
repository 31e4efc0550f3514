//! Check digit command.

use anyhow::Result;
use clap::Args;
use gtin::GtinError;
use serde::Serialize;

use crate::output::{print_info, print_single, OutputFormat};

use super::CommandContext;

/// Compute the check digit for a payload.
///
/// The payload is normalized like any GTIN input before the digit is
/// computed.
#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// GTIN without its check digit.
    payload: String,
}

#[derive(Debug, Serialize)]
struct CheckDigitView {
    payload: String,
    check_digit: u8,
    gtin: gtin::Gtin,
}

impl CheckDigitCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = complete(&self.payload)?;

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("{}", view.check_digit);
                print_info(&format!("Full GTIN: {}", view.gtin));
            }
        }

        Ok(())
    }
}

fn complete(raw: &str) -> Result<CheckDigitView, GtinError> {
    let payload = gtin::normalize(raw).map_err(|invalid| GtinError::InvalidCharacters {
        input: raw.to_string(),
        character: invalid.character,
        position: invalid.position,
    })?;

    let check_digit = gtin::compute_check_digit(&payload).ok_or_else(|| GtinError::Empty {
        input: raw.to_string(),
    })?;

    let gtin = gtin::parse(&format!("{payload}{check_digit}"))?;

    Ok(CheckDigitView {
        payload,
        check_digit,
        gtin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_upc_payload() {
        let view = complete("0-36000-29145").unwrap();
        assert_eq!(view.payload, "3600029145");
        assert_eq!(view.check_digit, 2);
        assert_eq!(view.gtin.as_str(), "36000291452");
    }

    #[test]
    fn rejects_bad_payloads() {
        assert!(complete("000").unwrap_err().is_empty());
        assert!(matches!(
            complete("12a").unwrap_err(),
            GtinError::InvalidCharacters { .. }
        ));
        assert!(matches!(
            complete(&"1".repeat(18)).unwrap_err(),
            GtinError::TooLong { .. }
        ));
    }
}
