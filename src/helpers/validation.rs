//! Field Validators
//!
//! Shape checks shared by the user form and the CLI.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::dates::calculate_age;

// Something without whitespace or '@', an '@', then a domain with a '.'
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Check an email address
///
/// No whitespace, exactly one '@', a non-empty local part, and a domain
/// with a '.' that has text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Ages accepted by the backend: over 18, at most 120
pub fn is_valid_age(age: u32) -> bool {
    age > 18 && age <= 120
}

/// Check that a date of birth gives a valid age today
pub fn is_valid_date_of_birth(birth: Option<NaiveDate>) -> bool {
    birth.map(calculate_age).is_some_and(is_valid_age)
}
