//! Type definitions for the signup wizard screen

/// Outcome of a key press on the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardResult {
    /// Keep running
    Continue,
    /// Leave the application
    Quit,
}

/// Buttons on the review modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryButton {
    /// Back to the account step
    Edit,
    /// Final submit
    #[default]
    Confirm,
}

impl SummaryButton {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryButton::Edit => "Edit Information",
            SummaryButton::Confirm => "Confirm & Submit",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SummaryButton::Edit => SummaryButton::Confirm,
            SummaryButton::Confirm => SummaryButton::Edit,
        }
    }
}

/// How a step marker is drawn in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    /// Step already passed, drawn with a check mark
    Complete,
    /// Step being edited
    Active,
    /// Step not reached yet
    Pending,
}
