//! Date Utilities
//!
//! Age arithmetic and display formatting for dates of birth. The backend
//! sends dates either as "YYYY-MM-DD" or as RFC 3339 timestamps; only the
//! calendar date matters here.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse "YYYY-MM-DD" or the date part of an RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Full years between `birth` and `today`
///
/// A birthday later in the year than `today` has not happened yet and
/// does not count. Dates in the future give 0.
pub fn calculate_age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Full years between `birth` and today
pub fn calculate_age(birth: NaiveDate) -> u32 {
    calculate_age_on(birth, today())
}

/// Approximate date of birth for someone `age` years old on `today`
///
/// Same month and day, `age` years back. Feb 29 maps to Feb 28 when the
/// target year is not a leap year.
pub fn calculate_date_of_birth_on(age: u32, today: NaiveDate) -> Option<NaiveDate> {
    if age == 0 {
        return None;
    }
    let year = today.year() - i32::try_from(age).ok()?;
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))
}

/// Approximate date of birth for someone `age` years old today
pub fn calculate_date_of_birth(age: u32) -> Option<NaiveDate> {
    calculate_date_of_birth_on(age, today())
}

/// Format a date as "Jan 5, 1990"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date string for display, "-" when absent or unparsable
pub fn format_date_str<'a>(value: impl Into<Option<&'a str>>) -> String {
    value
        .into()
        .and_then(parse_date)
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

/// Format a date of birth with the age, e.g. "Jan 5, 1990 (36 years old)"
pub fn format_date_of_birth<'a>(value: impl Into<Option<&'a str>>) -> String {
    match value.into().and_then(parse_date) {
        Some(birth) => format!("{} ({} years old)", format_date(birth), calculate_age(birth)),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1990-01-05"), Some(date(1990, 1, 5)));
        assert_eq!(parse_date("1990-01-05T00:00:00Z"), Some(date(1990, 1, 5)));
        assert_eq!(parse_date(" 1990-01-05 "), Some(date(1990, 1, 5)));
        assert_eq!(parse_date("05/01/1990"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(2000, 6, 15);
        assert_eq!(calculate_age_on(birth, date(2026, 6, 14)), 25);
        assert_eq!(calculate_age_on(birth, date(2026, 6, 15)), 26);
        assert_eq!(calculate_age_on(birth, date(2026, 12, 31)), 26);
    }

    #[test]
    fn test_age_of_future_date_is_zero() {
        assert_eq!(calculate_age_on(date(2030, 1, 1), date(2026, 10, 16)), 0);
    }

    #[test]
    fn test_date_of_birth_from_age() {
        let today = date(2026, 10, 16);
        assert_eq!(calculate_date_of_birth_on(30, today), Some(date(1996, 10, 16)));
        assert_eq!(calculate_date_of_birth_on(0, today), None);
    }

    #[test]
    fn test_date_of_birth_from_leap_day() {
        let today = date(2024, 2, 29);
        assert_eq!(calculate_date_of_birth_on(1, today), Some(date(2023, 2, 28)));
        assert_eq!(calculate_date_of_birth_on(4, today), Some(date(2020, 2, 29)));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(1990, 1, 5)), "Jan 5, 1990");
        assert_eq!(format_date_str("2021-12-25T10:00:00Z"), "Dec 25, 2021");
        assert_eq!(format_date_str(None::<&str>), "-");
        assert_eq!(format_date_str("not a date"), "-");
    }

    #[test]
    fn test_format_date_of_birth() {
        let birth = calculate_date_of_birth(40).unwrap();
        let formatted = format_date_of_birth(birth.format("%Y-%m-%d").to_string().as_str());
        assert!(formatted.ends_with("(40 years old)"), "got {}", formatted);
        assert_eq!(format_date_of_birth(""), "-");
    }
}
