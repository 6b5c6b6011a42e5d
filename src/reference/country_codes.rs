// Country calling codes with flag emojis
// Source: ITU-T E.164 assigned country codes
//
// Fields:
// - dialing_prefix: digits the phone number starts with (after a leading '+')
// - flag: regional indicator emoji pair for the country
// - name: display name shown next to the phone number
// - iso_code: ISO 3166-1 alpha-2 code ("US/CA" for the shared NANP entry)
//
// Some prefixes appear twice below. The lookup map keeps the last entry
// for a prefix; see `DUPLICATED_PREFIXES` in the tests.
//
// The Caribbean NANP entries carry a literal '-' in the key. Phone numbers
// are reduced to digits before matching, so those keys never match and
// such numbers resolve to the shared "1" entry.

use serde::Serialize;

/// A country reachable through a dialing prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    /// The dialing prefix (e.g., "55", "1", "420")
    pub dialing_prefix: &'static str,
    /// Flag emoji
    pub flag: &'static str,
    /// Display name
    pub name: &'static str,
    /// ISO-like country code
    pub iso_code: &'static str,
}

const fn country(
    dialing_prefix: &'static str,
    flag: &'static str,
    name: &'static str,
    iso_code: &'static str,
) -> CountryRecord {
    CountryRecord { dialing_prefix, flag, name, iso_code }
}

/// Country calling codes in declaration order, duplicates included
pub const COUNTRY_CODES: &[CountryRecord] = &[
    // Brazil
    country("55", "🇧🇷", "Brazil", "BR"),

    // =========================================================================
    // NORTH AMERICA
    // =========================================================================
    country("1", "🇺🇸", "United States/Canada", "US/CA"),

    // =========================================================================
    // EUROPE
    // =========================================================================
    country("33", "🇫🇷", "France", "FR"),
    country("44", "🇬🇧", "United Kingdom", "GB"),
    country("49", "🇩🇪", "Germany", "DE"),
    country("34", "🇪🇸", "Spain", "ES"),
    country("39", "🇮🇹", "Italy", "IT"),
    country("31", "🇳🇱", "Netherlands", "NL"),
    country("32", "🇧🇪", "Belgium", "BE"),
    country("41", "🇨🇭", "Switzerland", "CH"),
    country("43", "🇦🇹", "Austria", "AT"),
    country("46", "🇸🇪", "Sweden", "SE"),
    country("47", "🇳🇴", "Norway", "NO"),
    country("45", "🇩🇰", "Denmark", "DK"),
    country("48", "🇵🇱", "Poland", "PL"),
    country("420", "🇨🇿", "Czech Republic", "CZ"),
    country("36", "🇭🇺", "Hungary", "HU"),
    country("30", "🇬🇷", "Greece", "GR"),
    country("351", "🇵🇹", "Portugal", "PT"),
    country("380", "🇺🇦", "Ukraine", "UA"),
    country("7", "🇷🇺", "Russia", "RU"),

    // =========================================================================
    // ASIA
    // =========================================================================
    country("86", "🇨🇳", "China", "CN"),
    country("81", "🇯🇵", "Japan", "JP"),
    country("82", "🇰🇷", "South Korea", "KR"),
    country("91", "🇮🇳", "India", "IN"),
    country("65", "🇸🇬", "Singapore", "SG"),
    country("60", "🇲🇾", "Malaysia", "MY"),
    country("66", "🇹🇭", "Thailand", "TH"),
    country("84", "🇻🇳", "Vietnam", "VN"),
    country("62", "🇮🇩", "Indonesia", "ID"),
    country("63", "🇵🇭", "Philippines", "PH"),
    country("852", "🇭🇰", "Hong Kong", "HK"),
    country("886", "🇹🇼", "Taiwan", "TW"),

    // =========================================================================
    // OCEANIA
    // =========================================================================
    country("61", "🇦🇺", "Australia", "AU"),
    country("64", "🇳🇿", "New Zealand", "NZ"),

    // =========================================================================
    // AFRICA
    // =========================================================================
    country("27", "🇿🇦", "South Africa", "ZA"),
    country("20", "🇪🇬", "Egypt", "EG"),
    country("234", "🇳🇬", "Nigeria", "NG"),
    country("254", "🇰🇪", "Kenya", "KE"),
    country("212", "🇲🇦", "Morocco", "MA"),

    // =========================================================================
    // SOUTH AMERICA
    // =========================================================================
    country("54", "🇦🇷", "Argentina", "AR"),
    country("56", "🇨🇱", "Chile", "CL"),
    country("57", "🇨🇴", "Colombia", "CO"),
    country("58", "🇻🇪", "Venezuela", "VE"),
    country("51", "🇵🇪", "Peru", "PE"),
    country("593", "🇪🇨", "Ecuador", "EC"),
    country("595", "🇵🇾", "Paraguay", "PY"),
    country("598", "🇺🇾", "Uruguay", "UY"),
    country("598", "🇺🇾", "Uruguay", "UY"),
    country("591", "🇧🇴", "Bolivia", "BO"),
    country("593", "🇪🇨", "Ecuador", "EC"),

    // =========================================================================
    // MIDDLE EAST
    // =========================================================================
    country("972", "🇮🇱", "Israel", "IL"),
    country("971", "🇦🇪", "UAE", "AE"),
    country("966", "🇸🇦", "Saudi Arabia", "SA"),
    country("90", "🇹🇷", "Turkey", "TR"),
    country("98", "🇮🇷", "Iran", "IR"),
    country("93", "🇦🇫", "Afghanistan", "AF"),

    // =========================================================================
    // CENTRAL AMERICA & CARIBBEAN
    // =========================================================================
    country("52", "🇲🇽", "Mexico", "MX"),
    country("502", "🇬🇹", "Guatemala", "GT"),
    country("503", "🇸🇻", "El Salvador", "SV"),
    country("504", "🇭🇳", "Honduras", "HN"),
    country("505", "🇳🇮", "Nicaragua", "NI"),
    country("506", "🇨🇷", "Costa Rica", "CR"),
    country("507", "🇵🇦", "Panama", "PA"),
    country("1-809", "🇩🇴", "Dominican Republic", "DO"),
    country("1-787", "🇵🇷", "Puerto Rico", "PR"),
    country("1-876", "🇯🇲", "Jamaica", "JM"),
];

/// Get a country record by ISO code (case-insensitive)
pub fn get_country_by_iso(iso_code: &str) -> Option<&'static CountryRecord> {
    COUNTRY_CODES
        .iter()
        .rev()
        .find(|c| c.iso_code.eq_ignore_ascii_case(iso_code))
}
