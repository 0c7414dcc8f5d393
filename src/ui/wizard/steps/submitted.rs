//! Success page after the form has been submitted

use crate::ui::keybindings::{footer_line, ShortcutContext};
use crate::ui::layout::centered_box;
use crate::ui::wizard::WizardScreen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

impl WizardScreen {
    pub(crate) fn render_submitted(&self, frame: &mut Frame) {
        let area = centered_box(50, 40, 44, 12, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(2), // Message
                Constraint::Length(1), // Button
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Form Submitted Successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let message =
            Paragraph::new("Thank you for your submission.").alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);

        let button = Paragraph::new(Span::styled(
            " Submit Another Response ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(button, chunks[2]);

        let footer = Paragraph::new(footer_line(ShortcutContext::Submitted))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, chunks[4]);
    }
}
