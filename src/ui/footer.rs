//! Footer rendering module for the daoscope TUI.
//!
//! Displays the keyboard shortcuts for the focused panel at the bottom of the
//! screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::state::{App, Focus};

use super::helpers::key_hint;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints shown for `focus`.
#[must_use]
pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Chart => &[
            ("q", "Quit"),
            ("r", "Refresh"),
            ("←→", "Slice"),
            ("Enter", "Select"),
            ("c", "Share"),
            ("b", "Buy"),
            ("Tab", "Focus"),
            ("?", "Help"),
        ],
        Focus::Transfers => &[
            ("q", "Quit"),
            ("r", "Refresh"),
            ("↑↓", "Scroll"),
            ("c", "Share"),
            ("e", "Etherscan"),
            ("Tab", "Focus"),
            ("?", "Help"),
        ],
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let spans = hints(app.ui.focus)
        .iter()
        .flat_map(|(key, description)| key_hint(key, description))
        .collect::<Vec<_>>();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_footer(app: &App, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_footer_shows_focus_shortcuts() {
        let mut app = AppMother::app();

        let content = render_footer(&app, 120);
        for shortcut in ["q:Quit", "r:Refresh", "Enter:Select", "?:Help"] {
            assert!(content.contains(shortcut), "missing {shortcut}: {content}");
        }

        app.ui.cycle_focus();
        let content = render_footer(&app, 120);
        assert!(content.contains("↑↓:Scroll"), "{content}");
        assert!(!content.contains("Enter:Select"), "{content}");
    }

    #[test]
    fn test_footer_narrow_width_does_not_panic() {
        let app = AppMother::app();
        let content = render_footer(&app, 20);
        assert_eq!(content.chars().count(), 20);
    }
}
