//! Step progress indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::types::MarkerState;
use super::WizardScreen;
use crate::form::Step;

/// State of `step`'s marker when `current` is the active step
pub fn marker_state(step: Step, current: Step) -> MarkerState {
    match step.cmp(&current) {
        std::cmp::Ordering::Less => MarkerState::Complete,
        std::cmp::Ordering::Equal => MarkerState::Active,
        std::cmp::Ordering::Greater => MarkerState::Pending,
    }
}

impl WizardScreen {
    /// `( ✓ )━━━━( 2 )────( 3 )`
    pub(crate) fn progress_line(&self) -> Line<'static> {
        let current = self.machine.current_step();
        let mut spans = Vec::new();

        for step in Step::all() {
            let state = marker_state(*step, current);
            let (label, style) = match state {
                MarkerState::Complete => (
                    "✓".to_string(),
                    Style::default().fg(Color::Black).bg(Color::Green),
                ),
                MarkerState::Active => (
                    step.number().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                MarkerState::Pending => (
                    step.number().to_string(),
                    Style::default().fg(Color::Gray),
                ),
            };
            spans.push(Span::styled(format!("( {label} )"), style));

            if !step.is_last() {
                let connector = if state == MarkerState::Complete {
                    Span::styled("━━━━━━", Style::default().fg(Color::Green))
                } else {
                    Span::styled("──────", Style::default().fg(Color::DarkGray))
                };
                spans.push(connector);
            }
        }

        Line::from(spans)
    }

    pub(crate) fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let para = Paragraph::new(self.progress_line()).alignment(Alignment::Center);
        frame.render_widget(para, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_state() {
        assert_eq!(marker_state(Step::Personal, Step::Address), MarkerState::Complete);
        assert_eq!(marker_state(Step::Address, Step::Address), MarkerState::Active);
        assert_eq!(marker_state(Step::Account, Step::Address), MarkerState::Pending);
    }

    #[test]
    fn test_progress_line_on_first_step() {
        let screen = WizardScreen::new(true, false);
        let text: String = screen
            .progress_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "( 1 )──────( 2 )──────( 3 )");
    }
}
