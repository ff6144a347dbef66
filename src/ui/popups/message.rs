//! Message popup rendering.
//!
//! Shows lookup failures and other notices that need acknowledging.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Close hint shown under the message.
const CLOSE_HINT: &str = "Esc/Enter:Close  q:Quit";

/// Popup size for `message`: wide enough for the longest line, within
/// 80% of the terminal width.
#[must_use]
pub fn popup_size(area: Rect, message: &str) -> (u16, u16) {
    let line_count = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let width = longest_line
        .saturating_add(6)
        .max(40)
        .min(area.width * 8 / 10);
    let height = line_count.saturating_add(4).max(6);
    (width, height)
}

/// Renders a centered message popup.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let (width, height) = popup_size(area, message);
    let popup_area = centered_popup_area(area, width, height);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    if inner.height >= 2 {
        let rule_y = inner.bottom() - 2;
        frame.render_widget(
            Paragraph::new("─".repeat(usize::from(inner.width)))
                .style(Style::default().fg(Color::DarkGray)),
            Rect::new(inner.x, rule_y, inner.width, 1),
        );
        frame.render_widget(
            Paragraph::new(CLOSE_HINT)
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center),
            Rect::new(inner.x, rule_y + 1, inner.width, 1),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_popup_size_variants() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(popup_size(area, "short"), (40, 6));
        assert_eq!(popup_size(area, "Line 1\nLine 2\nLine 3"), (40, 7));
        assert_eq!(popup_size(area, &"x".repeat(200)), (80, 6));
    }

    #[test]
    fn test_message_popup_renders_text_and_hint() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "DAO 'nope' not found"))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("DAO 'nope' not found"));
        assert!(text.contains(CLOSE_HINT));
        assert!(text.contains("Message"));
    }
}
