// Country flag demo
// One line per sample number: "{flag} {country}: {formatted}"

use crate::reference::{format_phone_with_flag, get_country_name_from_phone, get_flag_from_phone};

/// Sample numbers, one per country
pub const DEMO_PHONES: &[&str] = &[
    "+5511987654321", // Brazil
    "+15551234567",   // United States
    "+447911123456",  // United Kingdom
    "+33123456789",   // France
    "+49123456789",   // Germany
    "+81901234567",   // Japan
    "+86123456789",   // China
    "+34612345678",   // Spain
    "+39391234567",   // Italy
    "+61412345678",   // Australia
    "+27123456789",   // South Africa
    "+54123456789",   // Argentina
    "+52551234567",   // Mexico
    "+972123456789",  // Israel
    "+971123456789",  // UAE
];

const FEATURES: &[&str] = &[
    "Automatic country detection from phone number",
    "Flag emoji display",
    "Country name identification",
    "Phone number formatting",
    "Support for 50+ countries",
];

/// Demo line for a single number
pub fn demo_line(phone: &str) -> String {
    format!(
        "{} {}: {}",
        get_flag_from_phone(phone),
        get_country_name_from_phone(phone),
        format_phone_with_flag(phone)
    )
}

/// Full demo text: header, one line per sample number, features footer
pub fn render_country_flags() -> String {
    let mut out = String::new();
    out.push_str("🌍 Country Flag Phone Number Demo\n");
    out.push_str("=====================================\n");
    for phone in DEMO_PHONES {
        out.push_str(&demo_line(phone));
        out.push('\n');
    }
    out.push_str("\n✨ Features:\n");
    for feature in FEATURES {
        out.push_str("- ");
        out.push_str(feature);
        out.push('\n');
    }
    out
}
