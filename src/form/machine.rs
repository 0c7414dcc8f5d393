//! Step/summary/submitted state machine for the signup form
//!
//! The machine owns the entered values and the current error messages.
//! Forward moves are gated on validation of the active step; backward moves
//! never validate and never touch values.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use super::field::{FieldId, FormValues, Step};
use super::validator::{validate_all, validate_field, validate_step, FieldErrors};

/// Where the user is in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Filling in the fields of a step
    Editing(Step),
    /// Reviewing everything before the final confirm
    Summary,
    /// Submission accepted
    Submitted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Editing(step) => write!(f, "step {}", step.number()),
            Stage::Summary => write!(f, "summary"),
            Stage::Submitted => write!(f, "submitted"),
        }
    }
}

/// Why a transition was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("cannot {action} while in {stage}")]
    WrongStage { action: &'static str, stage: Stage },

    #[error("already at the first step")]
    AtFirstStep,
}

/// The form's state: stage, values, and per-field errors
#[derive(Debug, Clone)]
pub struct FormMachine {
    stage: Stage,
    values: FormValues,
    errors: FieldErrors,
    /// Re-validate a field each time its value changes
    live_validation: bool,
    /// Values captured by the last successful submit
    submission: Option<FormValues>,
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FormMachine {
    pub fn new() -> Self {
        Self {
            stage: Stage::Editing(Step::Personal),
            values: FormValues::default(),
            errors: FieldErrors::new(),
            live_validation: true,
            submission: None,
        }
    }

    pub fn with_live_validation(mut self, enabled: bool) -> Self {
        self.live_validation = enabled;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Step shown in the progress indicator. The summary and the submitted
    /// screen both sit on top of the last step.
    pub fn current_step(&self) -> Step {
        match self.stage {
            Stage::Editing(step) => step,
            Stage::Summary | Stage::Submitted => Step::Account,
        }
    }

    pub fn is_showing_summary(&self) -> bool {
        self.stage == Stage::Summary
    }

    pub fn is_submitted(&self) -> bool {
        self.stage == Stage::Submitted
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn submission(&self) -> Option<&FormValues> {
        self.submission.as_ref()
    }

    /// Replace one field's value
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), FormError> {
        if self.stage == Stage::Submitted {
            return Err(FormError::WrongStage {
                action: "edit a field",
                stage: self.stage,
            });
        }

        self.values.set(field, value);

        if self.live_validation {
            match validate_field(&self.values, field) {
                Some(message) => self.errors.insert(field, message),
                None => {
                    self.errors.remove(field);
                }
            }
        }
        Ok(())
    }

    /// Validate the active step and move forward if it passes.
    ///
    /// From the last step the next stage is the summary.
    pub fn advance(&mut self) -> Result<Stage, FormError> {
        let Stage::Editing(step) = self.stage else {
            return Err(FormError::WrongStage {
                action: "advance",
                stage: self.stage,
            });
        };

        let errors = validate_step(&self.values, step);
        self.errors.clear_step(step);

        if !errors.is_empty() {
            info!(step = step.number(), fields = ?errors.fields(), "step blocked by validation");
            self.errors.extend(errors.clone());
            return Err(FormError::Invalid(errors));
        }

        let next = match step.next() {
            Some(next) => Stage::Editing(next),
            None => Stage::Summary,
        };
        self.move_to(next);
        Ok(next)
    }

    /// Step back without validating. Summary goes back to the last step.
    pub fn retreat(&mut self) -> Result<Stage, FormError> {
        let prev = match self.stage {
            Stage::Editing(step) => match step.prev() {
                Some(prev) => Stage::Editing(prev),
                None => return Err(FormError::AtFirstStep),
            },
            Stage::Summary => Stage::Editing(Step::Account),
            Stage::Submitted => {
                return Err(FormError::WrongStage {
                    action: "go back",
                    stage: self.stage,
                })
            }
        };
        self.move_to(prev);
        Ok(prev)
    }

    /// Leave the summary to change values
    pub fn edit(&mut self) -> Result<Stage, FormError> {
        if self.stage != Stage::Summary {
            return Err(FormError::WrongStage {
                action: "edit",
                stage: self.stage,
            });
        }
        self.retreat()
    }

    /// Final confirm from the summary.
    ///
    /// Every field is re-checked, including the password confirmation. On
    /// success the values are captured as the submission.
    pub fn confirm_submit(&mut self) -> Result<&FormValues, FormError> {
        if self.stage != Stage::Summary {
            return Err(FormError::WrongStage {
                action: "submit",
                stage: self.stage,
            });
        }

        let errors = validate_all(&self.values);
        if !errors.is_empty() {
            info!(fields = ?errors.fields(), "submission blocked by validation");
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }

        self.errors.clear();
        info!(username = %self.values.username, "form submitted");
        self.move_to(Stage::Submitted);
        Ok(self.submission.insert(self.values.clone()))
    }

    /// Start over on the first step with an empty form
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.move_to(Stage::Editing(Step::Personal));
    }

    fn move_to(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "form stage changed");
        self.stage = stage;
    }
}
