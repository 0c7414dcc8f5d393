//! Evaluates field rules against the current form values

use std::collections::BTreeMap;

use super::field::{FieldId, FormValues, Step};
use super::rules::rules_for;

/// Error message per invalid field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop the entries of every field belonging to `step`
    pub fn clear_step(&mut self, step: Step) {
        self.0.retain(|field, _| field.step() != step);
    }

    /// Merge `other` in, overwriting entries for the same field
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> Vec<FieldId> {
        self.0.keys().copied().collect()
    }

    /// Earliest step that has at least one error
    pub fn first_step(&self) -> Option<Step> {
        self.0.keys().map(FieldId::step).min()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a FieldId, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// First failing rule's message for `field`, or `None` if it passes
pub fn validate_field(values: &FormValues, field: FieldId) -> Option<String> {
    let value = values.get(field);
    rules_for(field)
        .iter()
        .find(|rule| !rule.check(value, values))
        .map(|rule| rule.message().to_string())
}

/// Validate only the fields grouped under `step`
pub fn validate_step(values: &FormValues, step: Step) -> FieldErrors {
    validate_fields(values, step.fields())
}

/// Validate every field of the form
pub fn validate_all(values: &FormValues) -> FieldErrors {
    validate_fields(values, FieldId::all())
}

fn validate_fields(values: &FormValues, fields: &[FieldId]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        if let Some(message) = validate_field(values, *field) {
            errors.insert(*field, message);
        }
    }
    errors
}
