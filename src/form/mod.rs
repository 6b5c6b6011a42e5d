//! User form state and validation
//!
//! `UserForm` holds what the user typed, the age derived from the date of
//! birth, and the field errors from the last validation. Validation never
//! fails loudly: it fills the error map and returns whether it is empty.
//!
//! ## Module Organization
//! - `modal` - Create/edit dialog driving the form and the API

pub mod modal;

pub use modal::{SubmitOutcome, UserModal};

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::helpers::dates::{calculate_age_on, calculate_date_of_birth_on, parse_date, today};
use crate::helpers::phone::is_valid_phone;
use crate::helpers::validation::is_valid_email;
use crate::users::{CreateUserRequest, UpdateUserRequest, User};

// ============================================================================
// Business Rules
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessRules {
    pub min_age: u32,
    pub max_age: u32,
    pub name_min_length: usize,
    pub name_max_length: usize,
    pub phone_max_length: usize,
    pub address_max_length: usize,
}

pub const BUSINESS_RULES: BusinessRules = BusinessRules {
    min_age: 18,
    max_age: 120,
    name_min_length: 2,
    name_max_length: 100,
    phone_max_length: 20,
    address_max_length: 500,
};

impl Default for BusinessRules {
    fn default() -> Self {
        BUSINESS_RULES
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Form fields, in the order errors are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    DateOfBirth,
    Phone,
    Address,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::DateOfBirth => "date_of_birth",
            FormField::Phone => "phone",
            FormField::Address => "address",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field to message, ordered by field
pub type FieldErrors = BTreeMap<FormField, String>;

/// Raw values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    data: FormData,
    calculated_age: u32,
    errors: FieldErrors,
    rules: BusinessRules,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing user
    pub fn from_user(user: &User) -> Self {
        let mut form = Self::new();
        form.load_user(user);
        form
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn rules(&self) -> &BusinessRules {
        &self.rules
    }

    pub fn calculated_age(&self) -> u32 {
        self.calculated_age
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The message shown when a submit is blocked
    pub fn first_error(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.data.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.data.phone = phone.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.data.address = address.into();
    }

    /// Overwrite the fields present in `changes`; false when there are none
    pub fn apply_changes(&mut self, changes: UpdateUserRequest) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(name) = changes.name {
            self.data.name = name;
        }
        if let Some(phone) = changes.phone {
            self.data.phone = phone;
        }
        if let Some(address) = changes.address {
            self.data.address = address;
        }
        true
    }

    /// Set the date of birth and recompute the displayed age
    pub fn set_date_of_birth(&mut self, date_of_birth: Option<NaiveDate>) {
        self.data.date_of_birth = date_of_birth;
        self.calculated_age = date_of_birth.map_or(0, |d| calculate_age_on(d, today()));
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate every field against the business rules
    ///
    /// Replaces the error map; returns true when no field has an error.
    pub fn validate_form(&mut self) -> bool {
        self.validate_form_on(today())
    }

    /// `validate_form` with an explicit "today" for the age checks
    pub fn validate_form_on(&mut self, today: NaiveDate) -> bool {
        let rules = self.rules;
        let mut errors = FieldErrors::new();

        let name = self.data.name.trim();
        let name_len = name.chars().count();
        if name.is_empty() {
            errors.insert(FormField::Name, "Name is required".to_string());
        } else if name_len < rules.name_min_length {
            errors.insert(
                FormField::Name,
                format!("Name must be at least {} characters", rules.name_min_length),
            );
        } else if name_len > rules.name_max_length {
            errors.insert(
                FormField::Name,
                format!("Name cannot exceed {} characters", rules.name_max_length),
            );
        }

        let email = self.data.email.trim();
        if email.is_empty() {
            errors.insert(FormField::Email, "Email is required".to_string());
        } else if !is_valid_email(email) {
            errors.insert(FormField::Email, "Please enter a valid email".to_string());
        }

        match self.data.date_of_birth {
            None => {
                errors.insert(FormField::DateOfBirth, "Date of birth is required".to_string());
            }
            Some(birth) => {
                let age = calculate_age_on(birth, today);
                if age < rules.min_age {
                    errors.insert(
                        FormField::DateOfBirth,
                        format!("User must be at least {} years old", rules.min_age),
                    );
                } else if age > rules.max_age {
                    errors.insert(
                        FormField::DateOfBirth,
                        format!("User cannot be older than {} years", rules.max_age),
                    );
                }
            }
        }

        // Phone and address are optional
        let phone = self.data.phone.trim();
        if !phone.is_empty() {
            if !is_valid_phone(phone) {
                errors.insert(FormField::Phone, "Please enter a valid phone number".to_string());
            } else if phone.chars().count() > rules.phone_max_length {
                errors.insert(
                    FormField::Phone,
                    format!("Phone cannot exceed {} characters", rules.phone_max_length),
                );
            }
        }

        let address = self.data.address.trim();
        if address.chars().count() > rules.address_max_length {
            errors.insert(
                FormField::Address,
                format!("Address cannot exceed {} characters", rules.address_max_length),
            );
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Dates a date picker should not offer: the future, and anything more
    /// than `max_age` years back
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.is_date_disabled_on(date, today())
    }

    pub fn is_date_disabled_on(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if date > today {
            return true;
        }
        match calculate_date_of_birth_on(self.rules.max_age, today) {
            Some(earliest) => date < earliest,
            None => false,
        }
    }

    // ========================================================================
    // Form Operations
    // ========================================================================

    /// Fill the form from an existing user
    pub fn load_user(&mut self, user: &User) {
        self.load_user_on(user, today());
    }

    /// `load_user` with an explicit "today" for records that only carry an age
    pub fn load_user_on(&mut self, user: &User, today: NaiveDate) {
        self.data.name = user.name.clone();
        self.data.email = user.email.clone();
        self.data.phone = user.phone.clone().unwrap_or_default();
        self.data.address = user.address.clone().unwrap_or_default();

        if let Some(birth) = user.date_of_birth.as_deref().and_then(parse_date) {
            self.data.date_of_birth = Some(birth);
            self.calculated_age = calculate_age_on(birth, today);
        } else if let Some(age) = user.age.filter(|a| *a > 0) {
            self.data.date_of_birth = calculate_date_of_birth_on(age, today);
            self.calculated_age = age;
        }
    }

    /// Clear values, derived age and errors
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.calculated_age = 0;
        self.errors.clear();
    }

    /// Payload for creating a user; None until a date of birth is set
    pub fn create_request(&self) -> Option<CreateUserRequest> {
        let birth = self.data.date_of_birth?;
        Some(CreateUserRequest {
            name: self.data.name.trim().to_string(),
            email: self.data.email.trim().to_lowercase(),
            date_of_birth: birth.format("%Y-%m-%d").to_string(),
            phone: non_blank(&self.data.phone),
            address: non_blank(&self.data.address),
        })
    }

    /// Payload for updating a user; email and date of birth are left out
    pub fn update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            name: Some(self.data.name.trim().to_string()),
            phone: non_blank(&self.data.phone),
            address: non_blank(&self.data.address),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
