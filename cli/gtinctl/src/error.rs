//! Error handling and display for the CLI.

use colored::Colorize;
use gtin::GtinError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} inputs are not valid GTINs")]
    Rejected { failed: usize, total: usize },

    #[error(transparent)]
    Gtin(#[from] GtinError),

    #[error("No input given. Pass GTINs as arguments or on stdin.")]
    NoInput,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let cli_err = err.downcast_ref::<CliError>();
    let gtin_err = match cli_err {
        Some(CliError::Gtin(e)) => Some(e),
        _ => err.downcast_ref::<GtinError>(),
    };

    if let Some(gtin_err) = gtin_err {
        return Some(match gtin_err {
            GtinError::Empty { .. } => "A GTIN needs at least one non-zero digit.",
            GtinError::InvalidCharacters { .. } => {
                "Only digits, spaces, and dashes are allowed in a GTIN."
            }
            GtinError::TooLong { .. } => "GTINs have at most 18 significant digits.",
            GtinError::InvalidChecksum { .. } => {
                "Check for a mistyped digit, or run `gtin check-digit` on the payload."
            }
        });
    }

    match cli_err {
        Some(CliError::Config(_)) => {
            Some("Run `gtin config clear` to reset saved defaults, or unset GTIN_LAYOUT.")
        }
        Some(CliError::NoInput) => Some("Example: gtin parse 036000291452"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_for_checksum_error() {
        let err: anyhow::Error = CliError::from(GtinError::InvalidChecksum {
            input: "11".to_string(),
        })
        .into();
        assert!(hint_for(&err).unwrap().contains("check-digit"));
    }

    #[test]
    fn hint_for_bare_gtin_error() {
        let err: anyhow::Error = GtinError::Empty {
            input: String::new(),
        }
        .into();
        assert!(hint_for(&err).is_some());
    }

    #[test]
    fn no_hint_for_rejected_batch() {
        let err: anyhow::Error = CliError::Rejected {
            failed: 1,
            total: 2,
        }
        .into();
        assert_eq!(err.to_string(), "1 of 2 inputs are not valid GTINs");
        assert!(hint_for(&err).is_none());
    }
}
