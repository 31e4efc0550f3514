//! GS1 mod-10 check digit.
//!
//! Digits are weighted from the right end of the string: the check digit
//! and every second digit to its left have weight 1, the others weight 3.
//! A string is valid when the weighted sum is a multiple of ten. Pairing
//! from the right means the same rule covers GTIN-8, -12, -13 and -14.

/// Sums the digits of `digits` using GS1 weights, counting from the right.
///
/// `offset` is the distance from the end of the full code to the last digit
/// of `digits`. Returns `None` if a non-digit is found.
fn weighted_sum(digits: &[u8], offset: usize) -> Option<u32> {
    let mut odd = 0u32;
    let mut even = 0u32;

    for (distance, byte) in digits.iter().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let value = u32::from(byte - b'0');
        if (distance + offset) % 2 == 1 {
            odd += value;
        } else {
            even += value;
        }
    }

    Some(odd * 3 + even)
}

/// Validates `digits` in place, treating the last digit as the check digit.
///
/// Returns `false` for an empty string or one containing anything other
/// than ASCII digits. Callers are expected to normalize first, but the
/// digits are checked here regardless.
pub fn check_checksum(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    weighted_sum(digits.as_bytes(), 0).is_some_and(|sum| sum % 10 == 0)
}

/// Computes the check digit to append to `payload`.
///
/// Returns `None` if `payload` is empty or contains a non-digit.
pub fn compute_check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }

    // The payload's last digit sits one position left of the check digit.
    let sum = weighted_sum(payload.as_bytes(), 1)?;
    Some(((10 - sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("36000291452")] // UPC-A 036000291452
    #[case("036000291452")]
    #[case("4006381333931")] // EAN-13
    #[case("96385074")] // EAN-8
    #[case("10614141000033")] // GTIN-14
    #[case("614141000036")]
    #[case("123")]
    #[case("93")]
    #[case("0")]
    fn test_valid(#[case] digits: &str) {
        assert!(check_checksum(digits));
    }

    #[rstest]
    #[case("36000291451")]
    #[case("036000291451")]
    #[case("4006381333932")]
    #[case("99")]
    #[case("1")]
    fn test_invalid(#[case] digits: &str) {
        assert!(!check_checksum(digits));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!check_checksum(""));
    }

    #[rstest]
    #[case("3600-0291452")]
    #[case("36000 291452")]
    #[case("3600029145x")]
    #[case("x36000291452")]
    fn test_non_digits_are_invalid(#[case] digits: &str) {
        assert!(!check_checksum(digits));
    }

    #[rstest]
    #[case("3600029145", 2)]
    #[case("400638133393", 1)]
    #[case("9638507", 4)]
    #[case("1061414100003", 3)]
    #[case("12", 3)]
    #[case("9", 3)]
    fn test_compute_check_digit(#[case] payload: &str, #[case] expected: u8) {
        assert_eq!(compute_check_digit(payload), Some(expected));
        assert!(check_checksum(&format!("{payload}{expected}")));
    }

    #[test]
    fn test_compute_check_digit_rejects() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("12-3"), None);
    }
}
