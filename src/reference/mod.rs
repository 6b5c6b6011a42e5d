// Reference data module - country calling codes
// Source: ITU-T E.164 assigned country codes
//
// Phone number resolution:
// - The number is reduced to digits (a leading '+' is dropped)
// - Every dialing prefix the digits start with is a candidate
// - The LONGEST candidate wins ("1" vs "1-809" is decided by length, not by
//   declaration order)
//
// Misses are not errors: callers get None, the globe glyph or "Unknown".

pub mod country_codes;

use std::collections::HashMap;
use std::sync::OnceLock;

use country_codes::{CountryRecord, COUNTRY_CODES};

pub use country_codes::get_country_by_iso;

use crate::helpers::phone::{digits_only, format_ten_digits};

/// Flag shown when no dialing prefix matches
pub const FALLBACK_FLAG: &str = "🌍";
/// Country name shown when no dialing prefix matches
pub const UNKNOWN_COUNTRY: &str = "Unknown";
/// Placeholder for an empty phone number
pub const EMPTY_PHONE: &str = "—";

/// Lazily-initialized HashMap for O(1) record lookup by dialing prefix
static COUNTRY_MAP: OnceLock<HashMap<&'static str, &'static CountryRecord>> = OnceLock::new();

/// Dialing prefixes ordered longest first, computed once
static PREFIXES_BY_LENGTH: OnceLock<Vec<&'static str>> = OnceLock::new();

/// Get or initialize the dialing prefix HashMap
///
/// Duplicate prefixes collapse to the entry declared last.
fn get_country_map() -> &'static HashMap<&'static str, &'static CountryRecord> {
    COUNTRY_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(COUNTRY_CODES.len());
        for record in COUNTRY_CODES {
            map.insert(record.dialing_prefix, record);
        }
        log::debug!(
            "Country code table built: {} prefixes from {} entries",
            map.len(),
            COUNTRY_CODES.len()
        );
        map
    })
}

/// Get or initialize the search order: longest prefix first, then
/// lexicographic so equal lengths always resolve the same way
fn get_prefixes_by_length() -> &'static [&'static str] {
    PREFIXES_BY_LENGTH.get_or_init(|| {
        let mut prefixes: Vec<&'static str> = get_country_map().keys().copied().collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        prefixes
    })
}

/// Reduce a phone number to the digits compared against dialing prefixes
///
/// Drops everything except digits and '+', then one leading '+'.
pub fn normalize_phone(phone: &str) -> String {
    let clean: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    match clean.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => clean,
    }
}

/// Find the dialing prefix of a phone number (longest match)
pub fn extract_country_code<'a>(phone: impl Into<Option<&'a str>>) -> Option<&'static str> {
    let phone = phone.into().filter(|p| !p.is_empty())?;
    let candidate = normalize_phone(phone);
    if candidate.is_empty() {
        return None;
    }

    get_prefixes_by_length()
        .iter()
        .copied()
        .find(|prefix| candidate.starts_with(prefix))
}

/// Look up the country record for a phone number
pub fn get_country_info<'a>(phone: impl Into<Option<&'a str>>) -> Option<&'static CountryRecord> {
    let code = extract_country_code(phone)?;
    get_country_map().get(code).copied()
}

/// Flag emoji for a phone number, or the globe when unknown
pub fn get_flag_from_phone<'a>(phone: impl Into<Option<&'a str>>) -> &'static str {
    get_country_info(phone).map_or(FALLBACK_FLAG, |c| c.flag)
}

/// Country name for a phone number, or "Unknown"
pub fn get_country_name_from_phone<'a>(phone: impl Into<Option<&'a str>>) -> &'static str {
    get_country_info(phone).map_or(UNKNOWN_COUNTRY, |c| c.name)
}

/// Format a phone number for display with its flag in front
///
/// - 11 digits starting with 55: "(11) 98765-4321"
/// - 10 digits: "(555) 123-4567"
/// - anything else: the input as typed
pub fn format_phone_with_flag<'a>(phone: impl Into<Option<&'a str>>) -> String {
    let phone = match phone.into() {
        None | Some("") => return EMPTY_PHONE.to_string(),
        Some(p) => p,
    };

    let flag = get_flag_from_phone(phone);
    let digits = digits_only(phone);

    if digits.len() == 11 && digits.starts_with("55") {
        let area = &digits[2..4];
        let number = &digits[4..];
        format!("{} ({}) {}-{}", flag, area, &number[..5], &number[5..])
    } else if let Some(formatted) = format_ten_digits(&digits) {
        format!("{} {}", flag, formatted)
    } else {
        format!("{} {}", flag, phone)
    }
}

/// Get all country records keyed by dialing prefix
pub fn get_all_country_codes() -> &'static HashMap<&'static str, &'static CountryRecord> {
    get_country_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brazil() {
        assert_eq!(extract_country_code("+5511987654321"), Some("55"));
        assert_eq!(get_flag_from_phone("+5511987654321"), "🇧🇷");
        assert_eq!(get_country_name_from_phone("+5511987654321"), "Brazil");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_country_code(None::<&str>), None);
        assert_eq!(extract_country_code(""), None);
        assert_eq!(extract_country_code("   "), None);
        assert_eq!(extract_country_code("+"), None);
        assert!(get_country_info(None::<&str>).is_none());
    }

    #[test]
    fn test_no_match_uses_fallbacks() {
        assert_eq!(extract_country_code("+0000"), None);
        assert_eq!(get_flag_from_phone("+0000"), FALLBACK_FLAG);
        assert_eq!(get_country_name_from_phone("+0000"), "Unknown");
        assert_eq!(get_flag_from_phone("call me"), "🌍");
    }

    #[test]
    fn test_punctuation_is_ignored() {
        assert_eq!(extract_country_code("+44 (0) 7911-123456"), Some("44"));
        assert_eq!(extract_country_code("00 44 7911"), None);
        assert_eq!(extract_country_code("tel: +33 1 23 45 67 89"), Some("33"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(extract_country_code("+380441234567"), Some("380"));
        assert_eq!(extract_country_code("+351211234567"), Some("351"));
        assert_eq!(extract_country_code("+4201234567"), Some("420"));
        assert_eq!(extract_country_code("+4212345678"), None);
        assert_eq!(extract_country_code("+593991234567"), Some("593"));
        assert_eq!(extract_country_code("+5901234567"), None);
    }

    #[test]
    fn test_longer_prefixes_never_shadowed() {
        // For every pair where one prefix starts another, a number built from
        // the longer one must resolve to the longer one. Keys with a separator
        // cannot match normalized input and fall back to the shorter key.
        let prefixes: Vec<&str> = get_all_country_codes().keys().copied().collect();
        for short in &prefixes {
            for long in &prefixes {
                if long.len() > short.len() && long.starts_with(short) {
                    let phone = format!("+{}5550100", long);
                    let expected = if long.contains('-') { Some(*short) } else { Some(*long) };
                    assert_eq!(extract_country_code(phone.as_str()), expected, "phone {}", phone);
                }
            }
        }
    }

    #[test]
    fn test_caribbean_keys_are_unreachable() {
        // The separator in "1-876" is stripped from the input, so Jamaica
        // resolves to the shared North American entry
        assert_eq!(extract_country_code("1-876-555-0100"), Some("1"));
        assert_eq!(get_country_name_from_phone("+1 809 555 0100"), "United States/Canada");
        assert!(get_all_country_codes().contains_key("1-876"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let map = get_all_country_codes();
        assert!(map.len() < COUNTRY_CODES.len());
        assert_eq!(map.len(), COUNTRY_CODES.len() - 2);
        assert_eq!(map["598"].name, "Uruguay");
        assert_eq!(map["593"].name, "Ecuador");
    }

    #[test]
    fn test_lookup_is_pure() {
        let first = get_country_info("+81 90 1234 5678");
        let second = get_country_info("+81 90 1234 5678");
        assert_eq!(first, second);
        assert_eq!(first.map(|c| c.iso_code), Some("JP"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_phone_with_flag(""), "—");
        assert_eq!(format_phone_with_flag(None::<&str>), "—");
    }

    #[test]
    fn test_format_brazilian() {
        assert_eq!(format_phone_with_flag("+55 (11) 98765-43"), "🇧🇷 (11) 98765-43");
        assert_eq!(format_phone_with_flag("55119876543"), "🇧🇷 (11) 98765-43");
    }

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(format_phone_with_flag("5551234567"), "🇧🇷 (555) 123-4567");
        assert_eq!(format_phone_with_flag("(212) 555-0100"), "🇲🇦 (212) 555-0100");
    }

    #[test]
    fn test_format_eleven_digits_not_brazil() {
        // Must not be mistaken for a Brazilian number
        assert_eq!(format_phone_with_flag("+15555551234"), "🇺🇸 +15555551234");
    }

    #[test]
    fn test_format_other_lengths_keep_input() {
        assert_eq!(format_phone_with_flag("+5511987654321"), "🇧🇷 +5511987654321");
        assert_eq!(format_phone_with_flag("+0000"), "🌍 +0000");
    }
}
