//! Declarative validation rules for each form field

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::field::{FieldId, FormValues};

/// Local part, `@`, dot-terminated domain labels, alphabetic TLD.
/// Leading-dot and double-dot checks are done separately since `regex` has no lookahead.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// A single check applied to a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty; whitespace counts as content
    Required(&'static str),
    /// At least this many characters
    MinLength(usize, &'static str),
    /// ASCII digits only, and at least one of them
    DigitsOnly(&'static str),
    /// Plausible email address
    Email(&'static str),
    /// Must equal the value of another field
    Matches(FieldId, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(msg)
            | Rule::MinLength(_, msg)
            | Rule::DigitsOnly(msg)
            | Rule::Email(msg)
            | Rule::Matches(_, msg) => msg,
        }
    }

    /// Check `value` (the field's own value) against this rule
    pub fn check(&self, value: &str, values: &FormValues) -> bool {
        match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::DigitsOnly(_) => is_all_digits(value),
            Rule::Email(_) => is_email(value),
            Rule::Matches(other, _) => value == values.get(*other),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required(_) => write!(f, "required"),
            Rule::MinLength(n, _) => write!(f, "min {n} chars"),
            Rule::DigitsOnly(_) => write!(f, "digits only"),
            Rule::Email(_) => write!(f, "email"),
            Rule::Matches(other, _) => write!(f, "matches {}", other.key()),
        }
    }
}

/// Rules for a field, in evaluation order
pub fn rules_for(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::FullName => &[Rule::Required("Full name is required")],
        FieldId::Email => &[
            Rule::Required("Email is required"),
            Rule::Email("invalid email format"),
        ],
        FieldId::PhoneNumber => &[
            Rule::MinLength(10, "Phone number must be at least 10 digits"),
            Rule::DigitsOnly("Phone number must contain only digits"),
        ],
        FieldId::StreetAddress => &[Rule::Required("street address is required")],
        FieldId::City => &[Rule::Required("city is required")],
        FieldId::ZipCode => &[
            Rule::MinLength(5, "zip code must be at least 5 digits"),
            Rule::DigitsOnly("zip code must contain only numbers"),
        ],
        FieldId::Username => &[Rule::MinLength(4, "Username must be at least 4 characters")],
        FieldId::Password => &[Rule::MinLength(6, "password must be at least 6 characters")],
        FieldId::ConfirmPassword => &[
            Rule::Required("please confirm your password"),
            Rule::Matches(FieldId::Password, "Passwords do not match"),
        ],
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &Rule, value: &str) -> bool {
        rule.check(value, &FormValues::default())
    }

    #[test]
    fn test_required_accepts_whitespace() {
        let rule = Rule::Required("x");
        assert!(!check(&rule, ""));
        assert!(check(&rule, "   "));
        assert!(check(&rule, "a"));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rule = Rule::MinLength(4, "x");
        assert!(!check(&rule, "abc"));
        assert!(check(&rule, "abcd"));
        // four characters, more than four bytes
        assert!(check(&rule, "ñañá"));
    }

    #[test]
    fn test_digits_only() {
        let rule = Rule::DigitsOnly("x");
        assert!(check(&rule, "12345"));
        assert!(!check(&rule, "123ab"));
        assert!(!check(&rule, "+1234567890"));
        assert!(!check(&rule, "123 456"));
        assert!(!check(&rule, "١٢٣"));
        assert!(!check(&rule, ""));
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        for ok in [
            "a@b.co",
            "first.last@example.com",
            "o'brien+tag@mail.example.org",
            "USER_1@Sub-Domain.Example.IO",
        ] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user@example..com",
            "user name@example.com",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_matches_compares_other_field() {
        let mut values = FormValues::default();
        values.set(FieldId::Password, "abc123");
        let rule = Rule::Matches(FieldId::Password, "x");
        assert!(rule.check("abc123", &values));
        assert!(!rule.check("abc124", &values));
    }

    #[test]
    fn test_every_field_has_rules() {
        for field in FieldId::all() {
            assert!(!rules_for(*field).is_empty());
        }
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::MinLength(5, "x").to_string(), "min 5 chars");
        assert_eq!(
            Rule::Matches(FieldId::Password, "x").to_string(),
            "matches password"
        );
    }
}
