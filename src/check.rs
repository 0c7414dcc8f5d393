//! Non-interactive validation of a values file (`signup check`)

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use crate::form::{validate_step, FieldErrors, FormValues, Step};

/// Read form values from a JSON, TOML, or YAML file, chosen by extension
pub fn load_values(path: &Path) -> Result<FormValues> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let values = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).context("Failed to parse JSON values")?,
        Some("toml") => toml::from_str(&content).context("Failed to parse TOML values")?,
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).context("Failed to parse YAML values")?
        }
        Some(other) => bail!("Unsupported values file extension: .{}", other),
        None => bail!("Values file needs a .json, .toml, .yaml or .yml extension"),
    };
    Ok(values)
}

/// Validation outcome per step
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub steps: Vec<(Step, FieldErrors)>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.steps.iter().all(|(_, errors)| errors.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.steps.iter().map(|(_, errors)| errors.len()).sum()
    }

    /// Human readable report, one block per step
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (step, errors) in &self.steps {
            let status = if errors.is_empty() { "ok" } else { "FAILED" };
            let _ = writeln!(out, "{} ... {}", step, status);
            for (field, message) in errors.iter() {
                let _ = writeln!(out, "  {}: {}", field.key(), message);
            }
        }
        out
    }
}

/// Validate every step the way the wizard would when pressing Next on each
pub fn check_values(values: &FormValues) -> CheckReport {
    let steps = Step::all()
        .iter()
        .map(|step| (*step, validate_step(values, *step)))
        .collect();
    CheckReport { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;
    use tempfile::TempDir;

    const VALID_JSON: &str = r#"{
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "5551234567",
        "streetAddress": "12 St James's Square",
        "city": "London",
        "zipCode": "12345",
        "username": "ada_l",
        "password": "abc123",
        "confirmPassword": "abc123"
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_values() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "values.json", VALID_JSON);
        let values = load_values(&path).unwrap();
        assert_eq!(values.full_name, "Ada Lovelace");
        assert!(check_values(&values).is_valid());
    }

    #[test]
    fn test_load_toml_values() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "values.toml", "fullName = \"Ada\"\nzipCode = \"123ab\"\n");
        let values = load_values(&path).unwrap();
        assert_eq!(values.zip_code, "123ab");
    }

    #[test]
    fn test_load_yaml_values() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "values.YML", "city: Paris\n");
        let values = load_values(&path).unwrap();
        assert_eq!(values.city, "Paris");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "values.txt", "");
        let err = load_values(&path).unwrap_err();
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_report_lists_errors_per_step() {
        let mut values: FormValues = serde_json::from_str(VALID_JSON).unwrap();
        values.set(FieldId::ZipCode, "123ab");
        values.set(FieldId::ConfirmPassword, "abc124");

        let report = check_values(&values);
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 2);

        let text = report.render();
        assert!(text.contains("Step 1: Personal Information ... ok"));
        assert!(text.contains("Step 2: Address Details ... FAILED"));
        assert!(text.contains("  zipCode: zip code must contain only numbers"));
        assert!(text.contains("  confirmPassword: Passwords do not match"));
    }
}
