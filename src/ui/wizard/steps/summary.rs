//! Review modal shown before the final submit

use crate::form::{FieldId, Step};
use crate::ui::keybindings::{footer_line, ShortcutContext};
use crate::ui::layout::centered_box;
use crate::ui::text_input::MASK_CHAR;
use crate::ui::wizard::{SummaryButton, WizardScreen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label used on the review modal; the confirmation field is not listed
pub fn summary_label(field: FieldId) -> Option<&'static str> {
    match field {
        FieldId::FullName => Some("Full Name"),
        FieldId::Email => Some("Email"),
        FieldId::PhoneNumber => Some("Phone"),
        FieldId::StreetAddress => Some("Street"),
        FieldId::City => Some("City"),
        FieldId::ZipCode => Some("Zip Code"),
        FieldId::Username => Some("Username"),
        FieldId::Password => Some("Password"),
        FieldId::ConfirmPassword => None,
    }
}

fn section_title(step: Step) -> &'static str {
    match step {
        Step::Personal => "Personal Information",
        Step::Address => "Address Details",
        Step::Account => "Account Information",
    }
}

impl WizardScreen {
    /// Value as listed on the review modal
    pub(crate) fn summary_value(&self, field: FieldId) -> String {
        let value = self.machine.value(field);
        if field.is_secret() && !self.reveal_password {
            MASK_CHAR.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    pub(crate) fn summary_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for step in Step::all() {
            lines.push(Line::from(Span::styled(
                section_title(*step),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for field in step.fields() {
                let Some(label) = summary_label(*field) else {
                    continue;
                };
                let label = format!("{label}:");
                lines.push(Line::from(vec![
                    Span::styled(format!("  {label:<11}"), Style::default().fg(Color::Gray)),
                    Span::styled(
                        self.summary_value(*field),
                        Style::default().fg(Color::White),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }

        let errors = self.machine.errors();
        if !errors.is_empty() {
            lines.push(Line::from(Span::styled(
                "Cannot submit yet:",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            for (field, message) in errors.iter() {
                lines.push(Line::from(Span::styled(
                    format!("  {}: {}", field.label(), message),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        lines
    }

    pub(crate) fn render_summary(&self, frame: &mut Frame) {
        let area = centered_box(60, 80, 50, 24, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Review Your Information ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints([
                Constraint::Min(4),    // Values
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let values = Paragraph::new(self.summary_lines()).wrap(Wrap { trim: false });
        frame.render_widget(values, chunks[0]);

        let button_style = |button: SummaryButton, color: Color| {
            if self.summary_button == button {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            }
        };

        let buttons = Line::from(vec![
            Span::styled(
                format!(" {} ", SummaryButton::Edit.label()),
                button_style(SummaryButton::Edit, Color::Gray),
            ),
            Span::raw("     "),
            Span::styled(
                format!(" {} ", SummaryButton::Confirm.label()),
                button_style(SummaryButton::Confirm, Color::Green),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );

        let footer = Paragraph::new(footer_line(ShortcutContext::Summary))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, chunks[3]);
    }
}
