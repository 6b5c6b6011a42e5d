//! Phone Utilities
//!
//! Digit extraction, display formatting and validity checks for the
//! free-form phone numbers users type into the form.

use std::sync::LazyLock;

use regex::Regex;

// Optional '+', a leading digit 1-9, then up to 15 more ASCII digits
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles")
});

/// Keep only ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format exactly ten digits as "(AAA) PPP-LLLL"
pub(crate) fn format_ten_digits(digits: &str) -> Option<String> {
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

/// Format a phone number for display
///
/// Ten-digit numbers become "(555) 123-4567"; anything else is returned
/// unchanged. Absent or empty input shows as "-".
pub fn format_phone<'a>(phone: impl Into<Option<&'a str>>) -> String {
    match phone.into() {
        None | Some("") => "-".to_string(),
        Some(phone) => format_ten_digits(&digits_only(phone)).unwrap_or_else(|| phone.to_string()),
    }
}

/// Check a phone number against the accepted shape
///
/// Whitespace is ignored. Accepted: an optional '+', a leading digit 1-9,
/// then up to 15 more digits. The phone field is optional, so absent or
/// empty input is valid.
pub fn is_valid_phone<'a>(phone: impl Into<Option<&'a str>>) -> bool {
    let phone = match phone.into() {
        None | Some("") => return true,
        Some(p) => p,
    };

    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_REGEX.is_match(&compact)
}
