//! Field identifiers, step grouping, and the form value record

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three sequential screens of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Full name, email, phone number
    Personal,
    /// Street, city, zip code
    Address,
    /// Username and password pair
    Account,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[Step::Personal, Step::Address, Step::Account]
    }

    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> usize {
        match self {
            Step::Personal => 1,
            Step::Address => 2,
            Step::Account => 3,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Step::Personal),
            2 => Some(Step::Address),
            3 => Some(Step::Account),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Information",
            Step::Address => "Address Details",
            Step::Account => "Account Setup",
        }
    }

    /// Fields validated together when leaving this step
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Step::Personal => &[FieldId::FullName, FieldId::Email, FieldId::PhoneNumber],
            Step::Address => &[FieldId::StreetAddress, FieldId::City, FieldId::ZipCode],
            Step::Account => &[
                FieldId::Username,
                FieldId::Password,
                FieldId::ConfirmPassword,
            ],
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

/// Identifies a single input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    PhoneNumber,
    StreetAddress,
    City,
    ZipCode,
    Username,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::FullName,
            FieldId::Email,
            FieldId::PhoneNumber,
            FieldId::StreetAddress,
            FieldId::City,
            FieldId::ZipCode,
            FieldId::Username,
            FieldId::Password,
            FieldId::ConfirmPassword,
        ]
    }

    /// Serialized key, also used in CLI output
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::StreetAddress => "streetAddress",
            FieldId::City => "city",
            FieldId::ZipCode => "zipCode",
            FieldId::Username => "username",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FieldId::all().iter().copied().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email",
            FieldId::PhoneNumber => "Phone Number",
            FieldId::StreetAddress => "Street Address",
            FieldId::City => "City",
            FieldId::ZipCode => "Zip Code",
            FieldId::Username => "Username",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldId::PhoneNumber => Some("At least 10 digits"),
            FieldId::ZipCode => Some("At least 5 digits"),
            FieldId::Username => Some("Minimum 4 characters"),
            FieldId::Password => Some("Minimum 6 characters"),
            FieldId::ConfirmPassword => Some("Must match password"),
            _ => None,
        }
    }

    /// Whether input is masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }

    pub fn step(&self) -> Step {
        match self {
            FieldId::FullName | FieldId::Email | FieldId::PhoneNumber => Step::Personal,
            FieldId::StreetAddress | FieldId::City | FieldId::ZipCode => Step::Address,
            FieldId::Username | FieldId::Password | FieldId::ConfirmPassword => Step::Account,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All values entered into the form. Every field is plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::StreetAddress => &self.street_address,
            FieldId::City => &self.city,
            FieldId::ZipCode => &self.zip_code,
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::StreetAddress => &mut self.street_address,
            FieldId::City => &mut self.city,
            FieldId::ZipCode => &mut self.zip_code,
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldId::all().iter().all(|f| self.get(*f).is_empty())
    }

    /// Copy with both password fields replaced by a fixed mask
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for field in FieldId::all().iter().filter(|f| f.is_secret()) {
            let masked = if self.get(*field).is_empty() {
                String::new()
            } else {
                "********".to_string()
            };
            copy.set(*field, masked);
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_partition_fields() {
        let mut seen: Vec<FieldId> = Step::all()
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        seen.sort();
        assert_eq!(seen, FieldId::all().to_vec());

        for step in Step::all() {
            for field in step.fields() {
                assert_eq!(field.step(), *step);
            }
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Personal.next(), Some(Step::Address));
        assert_eq!(Step::Account.next(), None);
        assert_eq!(Step::Personal.prev(), None);
        assert_eq!(Step::Account.prev(), Some(Step::Address));
        assert!(Step::Personal.is_first());
        assert!(Step::Account.is_last());
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Address.to_string(), "Step 2: Address Details");
    }

    #[test]
    fn test_field_key_roundtrip() {
        for field in FieldId::all() {
            assert_eq!(FieldId::from_key(field.key()), Some(*field));
        }
        assert_eq!(FieldId::from_key("nope"), None);
    }

    #[test]
    fn test_values_get_set() {
        let mut values = FormValues::default();
        assert!(values.is_empty());

        values.set(FieldId::ZipCode, "12345");
        assert_eq!(values.get(FieldId::ZipCode), "12345");
        assert_eq!(values.zip_code, "12345");
        assert!(!values.is_empty());
    }

    #[test]
    fn test_values_deserialize_camel_case_with_missing_keys() {
        let values: FormValues =
            serde_json::from_str(r#"{"fullName": "Ada Lovelace", "zipCode": "12345"}"#).unwrap();
        assert_eq!(values.full_name, "Ada Lovelace");
        assert_eq!(values.zip_code, "12345");
        assert_eq!(values.email, "");
    }

    #[test]
    fn test_redacted_masks_only_secrets() {
        let mut values = FormValues::default();
        values.set(FieldId::Username, "ada");
        values.set(FieldId::Password, "secret1");

        let redacted = values.redacted();
        assert_eq!(redacted.username, "ada");
        assert_eq!(redacted.password, "********");
        assert_eq!(redacted.confirm_password, "");
    }
}
