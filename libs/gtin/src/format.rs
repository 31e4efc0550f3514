//! Positional template formatting.
//!
//! A template is matched against the digits from the right. Each `0` or `9`
//! in the template consumes one digit; every other character is copied
//! through as a literal. Once the digits run out, `0` slots pad with zeros
//! and `9` slots pad with spaces. Digits that do not fit are dropped from
//! the left.

/// Renders `digits` into `template`.
///
/// The output always has the same number of characters as the template.
/// `digits` is used as given; no normalization or validation happens here.
pub fn format_digits(digits: &str, template: &str) -> String {
    let mut remaining = digits.chars().rev();

    let mut out: Vec<char> = template
        .chars()
        .rev()
        .map(|slot| match slot {
            '0' => remaining.next().unwrap_or('0'),
            '9' => remaining.next().unwrap_or(' '),
            literal => literal,
        })
        .collect();

    out.reverse();
    out.into_iter().collect()
}
