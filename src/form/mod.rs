//! Signup form model: fields, validation rules, and the step state machine

pub mod field;
pub mod machine;
pub mod rules;
pub mod validator;

pub use field::{FieldId, FormValues, Step};
pub use machine::{FormError, FormMachine, Stage};
pub use rules::{rules_for, Rule};
pub use validator::{validate_all, validate_field, validate_step, FieldErrors};
