//! The canonical GTIN value and the parse pipeline.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::checksum::check_checksum;
use crate::error::GtinError;
use crate::format::format_digits;
use crate::layout::Layout;
use crate::normalize::normalize;

/// Maximum number of significant digits in a GTIN.
pub const MAX_GTIN_LEN: usize = 18;

/// A validated Global Trade Item Number in canonical form.
///
/// The canonical form holds only ASCII digits, has no leading zeros, is at
/// most [`MAX_GTIN_LEN`] digits long, and passes the GS1 checksum.
///
/// Ordering is lexicographic over the digit string, not numeric: `"93"`
/// sorts after `"123"` because `'9' > '1'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gtin(String);

impl Gtin {
    /// Parses a GTIN from raw text.
    ///
    /// Dashes and spaces are ignored, as are leading zeros.
    pub fn parse(s: &str) -> Result<Self, GtinError> {
        parse(s)
    }

    /// Returns the canonical digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of significant digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a parsed GTIN has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the check digit (the last digit).
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes().last().map_or(0, |b| b - b'0')
    }

    /// Renders the GTIN into a positional template.
    ///
    /// See [`format_digits`] for the template rules.
    #[must_use]
    pub fn format(&self, template: &str) -> String {
        format_digits(&self.0, template)
    }

    /// Renders the GTIN using a standard layout.
    #[must_use]
    pub fn format_layout(&self, layout: Layout) -> String {
        self.format(layout.template())
    }

    /// Renders the GTIN as 14 zero-padded digits.
    #[must_use]
    pub fn to_gtin14(&self) -> String {
        self.format_layout(Layout::Gtin14)
    }
}

/// Parses raw text into a canonical [`Gtin`].
///
/// Each step fails terminally, in this order: empty input, invalid
/// characters, nothing left after normalization, too many digits, and
/// checksum mismatch.
pub fn parse(raw: &str) -> Result<Gtin, GtinError> {
    let result = parse_inner(raw);
    match &result {
        Ok(gtin) => trace!(input = raw, gtin = gtin.as_str(), "parsed GTIN"),
        Err(err) => debug!(input = raw, reason = err.kind(), "rejected GTIN"),
    }
    result
}

fn parse_inner(raw: &str) -> Result<Gtin, GtinError> {
    if raw.is_empty() {
        return Err(GtinError::Empty {
            input: String::new(),
        });
    }

    let digits = normalize(raw).map_err(|invalid| GtinError::InvalidCharacters {
        input: raw.to_string(),
        character: invalid.character,
        position: invalid.position,
    })?;

    if digits.is_empty() {
        return Err(GtinError::Empty {
            input: raw.to_string(),
        });
    }

    if digits.len() > MAX_GTIN_LEN {
        return Err(GtinError::TooLong {
            input: raw.to_string(),
            max: MAX_GTIN_LEN,
        });
    }

    if !check_checksum(&digits) {
        return Err(GtinError::InvalidChecksum {
            input: raw.to_string(),
        });
    }

    Ok(Gtin(digits))
}

/// Returns true if `raw` parses as a GTIN.
pub fn is_valid_gtin(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// Compares two GTINs by their canonical digit strings.
pub fn compare(a: &Gtin, b: &Gtin) -> Ordering {
    compare_canonical(a.as_str(), b.as_str())
}

/// Compares two canonical digit strings byte by byte.
///
/// This is the ordering used by [`Gtin`]. It is lexicographic, so strings of
/// different lengths do not order numerically.
pub fn compare_canonical(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

impl std::fmt::Display for Gtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Gtin {
    type Error = GtinError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}

impl TryFrom<String> for Gtin {
    type Error = GtinError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse(&s)
    }
}

impl From<Gtin> for String {
    fn from(gtin: Gtin) -> Self {
        gtin.0
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Gtin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Gtin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_known_good_upc() {
        let gtin = parse("036000291452").unwrap();
        assert_eq!(gtin.as_str(), "36000291452");
        assert_eq!(gtin.check_digit(), 2);
        assert_eq!(gtin.len(), 11);
    }

    #[test]
    fn test_known_bad_checksum() {
        let err = parse("036000291451").unwrap_err();
        assert!(err.is_checksum_error());
        assert_eq!(err.input(), "036000291451");
    }

    #[rstest]
    #[case("")]
    #[case("000")]
    #[case("0")]
    #[case("0 - 0")]
    #[case("- -")]
    fn test_empty(#[case] raw: &str) {
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, GtinError::Empty { .. }), "{raw:?}: {err}");
        assert_eq!(err.input(), raw);
    }

    #[test]
    fn test_invalid_characters() {
        let err = parse("12a34").unwrap_err();
        assert_eq!(
            err,
            GtinError::InvalidCharacters {
                input: "12a34".to_string(),
                character: 'a',
                position: 2,
            }
        );
    }

    #[test]
    fn test_invalid_characters_checked_before_length() {
        let raw = format!("{}x", "1".repeat(30));
        assert!(matches!(
            parse(&raw).unwrap_err(),
            GtinError::InvalidCharacters { .. }
        ));
    }

    #[test]
    fn test_too_long() {
        let err = parse("1234567890123456789").unwrap_err();
        assert_eq!(
            err,
            GtinError::TooLong {
                input: "1234567890123456789".to_string(),
                max: MAX_GTIN_LEN,
            }
        );
    }

    #[test]
    fn test_leading_zeros_do_not_count_toward_length() {
        let raw = format!("{}36000291452", "0".repeat(20));
        assert_eq!(parse(&raw).unwrap().as_str(), "36000291452");
    }

    #[test]
    fn test_max_length_accepted() {
        // 17-digit payload plus its check digit.
        let payload = "12345678901234567";
        let check = crate::compute_check_digit(payload).unwrap();
        let raw = format!("{payload}{check}");
        assert_eq!(raw.len(), MAX_GTIN_LEN);
        assert_eq!(parse(&raw).unwrap().as_str(), raw);
    }

    #[test]
    fn test_separator_insensitive() {
        assert_eq!(
            parse("614141-000036").unwrap(),
            parse("614141000036").unwrap()
        );
        assert_eq!(
            parse("6141 4100 0036").unwrap(),
            parse("614141000036").unwrap()
        );
    }

    #[test]
    fn test_is_valid_gtin() {
        assert!(is_valid_gtin("036000291452"));
        assert!(is_valid_gtin("0-36000-29145-2"));
        assert!(!is_valid_gtin("036000291451"));
        assert!(!is_valid_gtin(""));
        assert!(!is_valid_gtin("000"));
        assert!(!is_valid_gtin("12a34"));
        assert!(!is_valid_gtin("1234567890123456789"));
    }

    #[test]
    fn test_format() {
        let gtin = parse("036000291452").unwrap();
        assert_eq!(gtin.format("0-000-0000-0"), "0-002-9145-2");
        assert_eq!(gtin.format_layout(Layout::UpcA), "0-36000-29145-2");
        assert_eq!(gtin.to_gtin14(), "00036000291452");
    }

    #[test]
    fn test_plain_format_roundtrip() {
        let gtin = parse("0 614141 000036").unwrap();
        let plain = gtin.format(&"9".repeat(gtin.len()));
        assert_eq!(parse(&plain).unwrap(), gtin);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert_eq!(compare_canonical("99", "123"), Ordering::Greater);
        assert_eq!(compare_canonical("123", "99"), Ordering::Less);
        assert_eq!(compare_canonical("123", "123"), Ordering::Equal);

        let short = parse("93").unwrap();
        let long = parse("123").unwrap();
        assert_eq!(compare(&short, &long), Ordering::Greater);
        assert!(short > long);
        assert!(long < short);
        assert!(short >= long);
        assert!(long <= short);
        assert!(short != long);
    }

    #[test]
    fn test_equal_after_normalization() {
        let a = parse("0036000291452").unwrap();
        let b = parse("3600-0291452").unwrap();
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_string_conversions() {
        let gtin = Gtin::try_from("4006381333931").unwrap();
        assert_eq!(gtin.to_string(), "4006381333931");
        assert_eq!(String::from(gtin.clone()), "4006381333931");
        assert_eq!(Gtin::try_from("4006381333931".to_string()).unwrap(), gtin);
        assert!(Gtin::try_from("4006381333932").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let gtin = parse("614141-000036").unwrap();
        let json = serde_json::to_string(&gtin).unwrap();
        assert_eq!(json, "\"614141000036\"");
        let parsed: Gtin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, gtin);
    }

    #[test]
    fn test_json_deserialize_normalizes_and_validates() {
        let parsed: Gtin = serde_json::from_str("\"0-614141-000036\"").unwrap();
        assert_eq!(parsed.as_str(), "614141000036");

        let err = serde_json::from_str::<Gtin>("\"614141000037\"").unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }
}
