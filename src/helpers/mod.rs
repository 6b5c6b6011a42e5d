//! Helper functions shared by the form, the CLI and the demos
//!
//! ## Module Organization
//! - `dates` - Age calculation, date parsing and display formatting
//! - `phone` - Phone digit extraction, formatting and validity
//! - `validation` - Email, age and date-of-birth checks

pub mod dates;
pub mod phone;
pub mod validation;

pub use dates::{
    calculate_age, calculate_date_of_birth, format_date, format_date_of_birth, format_date_str,
    parse_date,
};
pub use phone::{digits_only, format_phone, is_valid_phone};
pub use validation::{is_valid_age, is_valid_date_of_birth, is_valid_email};
