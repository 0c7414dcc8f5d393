//! Step form rendering: progress, labelled inputs, inline errors, buttons

use crate::form::{FieldId, Step};
use crate::ui::keybindings::{footer_line, ShortcutContext};
use crate::ui::layout::centered_box;
use crate::ui::wizard::WizardScreen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by one field: label, bordered input, error line
const FIELD_HEIGHT: u16 = 5;

impl WizardScreen {
    pub(crate) fn render_step(&self, frame: &mut Frame, step: Step) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Page title
                Constraint::Min(10),   // Form card
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Please fill up the Information",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, outer[0]);

        let area = centered_box(70, 100, 50, 26, outer[1]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Step title
        ];
        constraints.extend(step.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(1)); // Buttons
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints(constraints)
            .split(inner);

        self.render_progress(frame, chunks[0]);

        let step_title = Paragraph::new(Line::from(Span::styled(
            step.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(step_title, chunks[2]);

        let editing = self.focused_field().is_some();
        for (i, field) in step.fields().iter().enumerate() {
            let focused = editing && i == self.focus;
            self.render_field(frame, chunks[3 + i], *field, focused);
        }

        let buttons_row = chunks[3 + step.fields().len()];
        self.render_step_buttons(frame, buttons_row, step);

        let footer = Paragraph::new(footer_line(ShortcutContext::Editing))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, outer[2]);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: FieldId, focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(1), // Error
            ])
            .split(area);

        let label = Paragraph::new(Line::from(vec![
            Span::styled(field.label(), Style::default().fg(Color::White)),
            Span::styled(" *", Style::default().fg(Color::Red)),
        ]));
        frame.render_widget(label, rows[0]);

        let error = self.machine.error(field);
        if let Some(input) = self.inputs.get(&field) {
            input.render(frame, rows[1], focused, error.is_some());
        }

        if let Some(message) = error {
            let para = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
            frame.render_widget(para, rows[2]);
        }
    }

    fn render_step_buttons(&self, frame: &mut Frame, area: Rect, step: Step) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        if !step.is_first() {
            let prev = Paragraph::new(Span::styled(
                "[ Previous ]",
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            frame.render_widget(prev, halves[0]);
        }

        let (label, color) = if step.is_last() {
            ("[ Submit ]", Color::Green)
        } else {
            ("[ Next ]", Color::Blue)
        };
        let next = Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(next, halves[1]);
    }
}
