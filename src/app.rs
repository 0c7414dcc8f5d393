use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::config::Config;
use crate::form::FormValues;
use crate::ui::{install_panic_hook, TerminalGuard, WizardResult, WizardScreen};

pub struct App {
    config: Config,
    wizard: WizardScreen,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let wizard = WizardScreen::new(
            config.ui.live_validation,
            config.ui.reveal_password_in_summary,
        );
        tracing::info!(
            live_validation = config.ui.live_validation,
            "signup wizard ready"
        );

        Self {
            config,
            wizard,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let (_guard, mut terminal) = TerminalGuard::enter()?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.wizard.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.wizard.handle_key(key) == WizardResult::Quit {
            tracing::debug!(stage = %self.wizard.machine().stage(), "quit requested");
            self.should_quit = true;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Values of the most recent successful submission
    pub fn last_submission(&self) -> Option<&FormValues> {
        self.wizard.machine().submission()
    }
}
