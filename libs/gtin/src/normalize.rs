//! Input normalization.
//!
//! Raw GTIN text may contain dashes and spaces between digit groups, and is
//! often zero-padded on the left. Normalization removes both, leaving only
//! the significant digits.

/// A character that is neither a digit nor an accepted separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
    /// Position of the character in the raw input, counted in chars.
    pub position: usize,
}

/// Returns true for characters that are dropped silently.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | ' ')
}

/// Strips separators and leading zeros from `raw`.
///
/// The first character that is not a digit or separator aborts the whole
/// operation. An input of only zeros and separators normalizes to an empty
/// string; distinguishing that case from a real value is up to the caller.
///
/// Zeros are dropped for as long as no significant digit has been emitted,
/// so `"0-0123"` and `"0123"` both normalize to `"123"`.
pub fn normalize(raw: &str) -> Result<String, InvalidCharacter> {
    let mut digits = String::with_capacity(raw.len());

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0' if digits.is_empty() => {}
            '0'..='9' => digits.push(c),
            c if is_separator(c) => {}
            character => {
                return Err(InvalidCharacter {
                    character,
                    position,
                })
            }
        }
    }

    Ok(digits)
}
