//! Signup wizard screen: three form steps, a review modal, and a success page

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::form::{FieldId, FormError, FormMachine, Stage, Step};
use crate::ui::text_input::TextInput;

mod progress;
pub mod steps;
pub mod types;

pub use progress::marker_state;
pub use types::*;


/// Interactive front end over a [`FormMachine`]
pub struct WizardScreen {
    /// Single source of truth for values, errors, and stage
    pub(crate) machine: FormMachine,
    /// One input widget per field, mirrored into the machine on every edit
    pub(crate) inputs: BTreeMap<FieldId, TextInput>,
    /// Index of the focused field within the current step
    pub(crate) focus: usize,
    /// Highlighted button on the review modal
    pub(crate) summary_button: SummaryButton,
    /// Show passwords in clear text on the review modal
    pub(crate) reveal_password: bool,
}

impl WizardScreen {
    pub fn new(live_validation: bool, reveal_password: bool) -> Self {
        let inputs = FieldId::all()
            .iter()
            .map(|field| {
                let input =
                    TextInput::new(field.placeholder().unwrap_or_default()).masked(field.is_secret());
                (*field, input)
            })
            .collect();

        Self {
            machine: FormMachine::new().with_live_validation(live_validation),
            inputs,
            focus: 0,
            summary_button: SummaryButton::default(),
            reveal_password,
        }
    }

    pub fn machine(&self) -> &FormMachine {
        &self.machine
    }

    /// Field that receives typed characters, if a step is being edited
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.machine.stage() {
            Stage::Editing(step) => step.fields().get(self.focus).copied(),
            _ => None,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return WizardResult::Quit;
        }

        match self.machine.stage() {
            Stage::Editing(step) => self.handle_editing_key(step, key.code, ctrl),
            Stage::Summary => self.handle_summary_key(key.code),
            Stage::Submitted => self.handle_submitted_key(key.code),
        }
    }

    fn handle_editing_key(&mut self, step: Step, code: KeyCode, ctrl: bool) -> WizardResult {
        match (code, ctrl) {
            (KeyCode::Char('n'), true) => self.next_step(),
            (KeyCode::Char('p'), true) | (KeyCode::Esc, _) => self.prev_step(),
            (KeyCode::Tab | KeyCode::Down, _) => self.focus_next(step),
            (KeyCode::BackTab | KeyCode::Up, _) => self.focus_prev(step),
            (KeyCode::Enter, _) => {
                if self.focus + 1 >= step.fields().len() {
                    self.next_step();
                } else {
                    self.focus_next(step);
                }
            }
            (_, true) => {}
            (code, false) => self.edit_focused(code),
        }
        WizardResult::Continue
    }

    fn handle_summary_key(&mut self, code: KeyCode) -> WizardResult {
        match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.summary_button = self.summary_button.toggled();
            }
            KeyCode::Enter => match self.summary_button {
                SummaryButton::Edit => self.edit_from_summary(),
                SummaryButton::Confirm => self.confirm_submit(),
            },
            KeyCode::Char('e') | KeyCode::Esc => self.edit_from_summary(),
            KeyCode::Char('c') => self.confirm_submit(),
            _ => {}
        }
        WizardResult::Continue
    }

    fn handle_submitted_key(&mut self, code: KeyCode) -> WizardResult {
        match code {
            KeyCode::Char('r') | KeyCode::Enter => {
                self.reset();
                WizardResult::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => WizardResult::Quit,
            _ => WizardResult::Continue,
        }
    }

    fn focus_next(&mut self, step: Step) {
        self.focus = (self.focus + 1) % step.fields().len();
    }

    fn focus_prev(&mut self, step: Step) {
        let len = step.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Move focus to the first field of the current step that has an error
    fn focus_first_error(&mut self) {
        let Stage::Editing(step) = self.machine.stage() else {
            return;
        };
        self.focus = step
            .fields()
            .iter()
            .position(|f| self.machine.error(*f).is_some())
            .unwrap_or(0);
    }

    fn edit_focused(&mut self, code: KeyCode) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(input) = self.inputs.get_mut(&field) else {
            return;
        };
        if input.handle_key(code) {
            let value = input.value().to_string();
            if let Err(err) = self.machine.set_field(field, value) {
                tracing::warn!(field = %field, error = %err, "edit rejected");
            }
        }
    }

    /// "Next" on steps 1-2, "Submit" on step 3
    pub fn next_step(&mut self) {
        match self.machine.advance() {
            Ok(Stage::Summary) => {
                self.summary_button = SummaryButton::Confirm;
            }
            Ok(_) => self.focus = 0,
            Err(FormError::Invalid(_)) => self.focus_first_error(),
            Err(err) => tracing::debug!(error = %err, "advance ignored"),
        }
    }

    /// "Previous"; does nothing on the first step
    pub fn prev_step(&mut self) {
        match self.machine.retreat() {
            Ok(_) => self.focus = 0,
            Err(err) => tracing::debug!(error = %err, "retreat ignored"),
        }
    }

    fn edit_from_summary(&mut self) {
        match self.machine.edit() {
            Ok(_) => self.focus_first_error(),
            Err(err) => tracing::debug!(error = %err, "edit ignored"),
        }
    }

    fn confirm_submit(&mut self) {
        if let Err(err) = self.machine.confirm_submit() {
            tracing::debug!(error = %err, "submission refused");
            self.summary_button = SummaryButton::Edit;
        }
    }

    /// "Submit Another Response"
    pub fn reset(&mut self) {
        self.machine.reset();
        for input in self.inputs.values_mut() {
            input.clear();
        }
        self.focus = 0;
        self.summary_button = SummaryButton::default();
    }

    /// Render the wizard for the current stage
    pub fn render(&self, frame: &mut Frame) {
        match self.machine.stage() {
            Stage::Editing(step) => self.render_step(frame, step),
            Stage::Summary => {
                self.render_step(frame, Step::Account);
                self.render_summary(frame);
            }
            Stage::Submitted => self.render_submitted(frame),
        }
    }
}
