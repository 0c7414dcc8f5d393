//! Central registry of keyboard shortcuts.
//!
//! Single source of truth for the footer hints shown on every wizard screen
//! and for the `signup keys` listing.

use crossterm::event::KeyCode;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Whether the primary key is pressed with Ctrl
    pub ctrl: bool,
    /// Alternative key, never combined with Ctrl
    pub alt_key: Option<KeyCode>,
    /// Short label used in the footer and listings
    pub description: &'static str,
    pub category: ShortcutCategory,
    /// Screen where this shortcut is active
    pub context: ShortcutContext,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Actions,
}

/// Screens where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Filling in one of the steps
    Editing,
    /// Review modal
    Summary,
    /// Success screen
    Submitted,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Actions => "Actions",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::Navigation,
            ShortcutCategory::Actions,
            ShortcutCategory::General,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Editing => "Form Steps",
            ShortcutContext::Summary => "Review",
            ShortcutContext::Submitted => "Submitted",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Editing,
            ShortcutContext::Summary,
            ShortcutContext::Submitted,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "Ctrl+N", "Tab/↓")
    pub fn key_display(&self) -> String {
        let mut primary = format_keycode(&self.key);
        if self.ctrl {
            primary = format!("Ctrl+{}", primary.to_uppercase());
        }
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Editing ===
    Shortcut {
        key: KeyCode::Tab,
        ctrl: false,
        alt_key: Some(KeyCode::Down),
        description: "next field",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Editing,
    },
    Shortcut {
        key: KeyCode::BackTab,
        ctrl: false,
        alt_key: Some(KeyCode::Up),
        description: "previous field",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Editing,
    },
    Shortcut {
        key: KeyCode::Char('n'),
        ctrl: true,
        alt_key: Some(KeyCode::Enter),
        description: "next step",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Editing,
    },
    Shortcut {
        key: KeyCode::Char('p'),
        ctrl: true,
        alt_key: Some(KeyCode::Esc),
        description: "previous step",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Editing,
    },
    Shortcut {
        key: KeyCode::Char('c'),
        ctrl: true,
        alt_key: None,
        description: "quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Editing,
    },
    // === Summary ===
    Shortcut {
        key: KeyCode::Left,
        ctrl: false,
        alt_key: Some(KeyCode::Right),
        description: "choose button",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Summary,
    },
    Shortcut {
        key: KeyCode::Enter,
        ctrl: false,
        alt_key: None,
        description: "press button",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Summary,
    },
    Shortcut {
        key: KeyCode::Char('e'),
        ctrl: false,
        alt_key: Some(KeyCode::Esc),
        description: "edit information",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Summary,
    },
    Shortcut {
        key: KeyCode::Char('c'),
        ctrl: false,
        alt_key: None,
        description: "confirm & submit",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Summary,
    },
    Shortcut {
        key: KeyCode::Char('c'),
        ctrl: true,
        alt_key: None,
        description: "quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Summary,
    },
    // === Submitted ===
    Shortcut {
        key: KeyCode::Char('r'),
        ctrl: false,
        alt_key: Some(KeyCode::Enter),
        description: "submit another response",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Submitted,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        ctrl: false,
        alt_key: Some(KeyCode::Esc),
        description: "quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Submitted,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = SHORTCUTS
            .iter()
            .filter(|s| s.context == context && s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}

/// Footer line listing every shortcut of a context
pub fn footer_line(context: ShortcutContext) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, shortcut) in shortcuts_for_context(context).enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            shortcut.key_display(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}", shortcut.description)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shortcuts_have_descriptions() {
        for shortcut in SHORTCUTS {
            assert!(
                !shortcut.description.is_empty(),
                "Shortcut {:?} has empty description",
                shortcut.key
            );
        }
    }

    #[test]
    fn test_key_display_with_ctrl_and_alt() {
        let shortcut = Shortcut {
            key: KeyCode::Char('n'),
            ctrl: true,
            alt_key: Some(KeyCode::Enter),
            description: "Test",
            category: ShortcutCategory::Actions,
            context: ShortcutContext::Editing,
        };
        assert_eq!(shortcut.key_display(), "Ctrl+N/Enter");
    }

    #[test]
    fn test_key_display_special_keys() {
        assert_eq!(format_keycode(&KeyCode::BackTab), "Shift+Tab");
        assert_eq!(format_keycode(&KeyCode::Down), "↓");
        assert_eq!(format_keycode(&KeyCode::Esc), "Esc");
    }

    #[test]
    fn test_every_context_has_shortcuts() {
        for context in ShortcutContext::all() {
            assert!(shortcuts_for_context(*context).count() > 0);
            assert!(!shortcuts_by_category_for_context(*context).is_empty());
        }
    }

    #[test]
    fn test_every_context_can_quit() {
        for context in ShortcutContext::all() {
            assert!(shortcuts_for_context(*context).any(|s| s.description == "quit"));
        }
    }

    #[test]
    fn test_footer_line_mentions_keys() {
        let line = footer_line(ShortcutContext::Submitted);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("r/Enter submit another response"));
        assert!(text.contains("q/Esc quit"));
    }
}
