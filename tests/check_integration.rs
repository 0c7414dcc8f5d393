//! `signup check` against values files on disk

use signup::check::{check_values, load_values};
use signup::form::{FieldId, Step};
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_complete_yaml_file_passes() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "signup.yaml",
        r#"
fullName: Alan Turing
email: alan@bletchley.uk
phoneNumber: "4401234567"
streetAddress: Bletchley Park
city: Milton Keynes
zipCode: "90807"
username: aturing
password: enigma
confirmPassword: enigma
"#,
    );

    let report = check_values(&load_values(&path).unwrap());
    assert!(report.is_valid());
    assert_eq!(report.steps.len(), 3);
    assert!(report.render().contains("Step 3: Account Setup ... ok"));
}

#[test]
fn test_missing_keys_are_reported_as_required() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "partial.json", r#"{ "fullName": "Alan" }"#);

    let report = check_values(&load_values(&path).unwrap());
    let (step, personal) = &report.steps[0];
    assert_eq!(*step, Step::Personal);
    assert_eq!(personal.get(FieldId::Email), Some("Email is required"));
    assert!(!personal.contains(FieldId::FullName));

    let text = report.render();
    assert!(text.contains("  city: city is required"));
    assert!(text.contains("  confirmPassword: please confirm your password"));
}

#[test]
fn test_toml_file_with_bad_formats() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "signup.toml",
        r#"
fullName = "Alan Turing"
email = "alan@@bletchley.uk"
phoneNumber = "+441234567"
"#,
    );

    let report = check_values(&load_values(&path).unwrap());
    let personal = &report.steps[0].1;
    assert_eq!(personal.get(FieldId::Email), Some("invalid email format"));
    assert_eq!(
        personal.get(FieldId::PhoneNumber),
        Some("Phone number must contain only digits")
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ not json");
    assert!(load_values(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_values(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
