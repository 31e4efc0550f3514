//! Error types for GTIN parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing a GTIN.
///
/// Every variant carries the original input so callers can report it
/// verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GtinError {
    /// The input was empty, or contained nothing but zeros and separators.
    #[error("GTIN cannot be empty: \"{input}\"")]
    Empty { input: String },

    /// The input contained a character that is not a digit, space, or dash.
    #[error("\"{input}\" contains invalid character '{character}' at position {position}")]
    InvalidCharacters {
        input: String,
        character: char,
        position: usize,
    },

    /// The normalized digit string is longer than a GTIN can be.
    #[error("\"{input}\" is too long: a GTIN has at most {max} significant digits")]
    TooLong { input: String, max: usize },

    /// The digits are well formed but the check digit does not match.
    #[error("\"{input}\" is not a valid GTIN: checksum mismatch")]
    InvalidChecksum { input: String },
}

impl GtinError {
    /// Returns the raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            GtinError::Empty { input }
            | GtinError::InvalidCharacters { input, .. }
            | GtinError::TooLong { input, .. }
            | GtinError::InvalidChecksum { input } => input,
        }
    }

    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, GtinError::Empty { .. })
    }

    /// Returns true if the input was well formed but failed the checksum.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, GtinError::InvalidChecksum { .. })
    }

    /// Short machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GtinError::Empty { .. } => "empty",
            GtinError::InvalidCharacters { .. } => "invalid_characters",
            GtinError::TooLong { .. } => "too_long",
            GtinError::InvalidChecksum { .. } => "invalid_checksum",
        }
    }
}
