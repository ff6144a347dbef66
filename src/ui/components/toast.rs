//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, coloured by the
//! toast's kind.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{Toast, ToastKind};
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Gap to the right and bottom edges.
const TOAST_MARGIN: u16 = 2;

/// Borders plus one space of padding on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `toast` in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let text = toast.text();
    let toast_area = toast_area(area, &text);

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(text_color(toast.kind)))
            .alignment(Alignment::Center),
        inner,
    );
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Bottom-right placement sized to the message, capped at half the width.
fn toast_area(area: Rect, text: &str) -> Rect {
    let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width + TOAST_MARGIN),
        area.y + area.height.saturating_sub(height + TOAST_MARGIN),
        width,
        height,
    )
}

const fn text_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => SUCCESS_COLOR,
        ToastKind::Error => ERROR_COLOR,
        ToastKind::Info => Color::White,
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
    fn test_toast_area_variants() {
        struct TestCase {
            name: &'static str,
            area: Rect,
            text: &'static str,
            expected_width: u16,
        }

        let cases = [
            TestCase {
                name: "short text gets minimum width",
                area: Rect::new(0, 0, 100, 50),
                text: "Hi",
                expected_width: MIN_TOAST_WIDTH,
            },
            TestCase {
                name: "medium text fits",
                area: Rect::new(0, 0, 100, 50),
                text: "[+] Share link copied!",
                expected_width: 26,
            },
            TestCase {
                name: "long text capped at half width",
                area: Rect::new(0, 0, 100, 50),
                text: "[x] This is a very long message that should be constrained by the width",
                expected_width: 50,
            },
            TestCase {
                name: "tiny area",
                area: Rect::new(0, 0, 10, 2),
                text: "Test",
                expected_width: 10,
            },
        ];

        for case in &cases {
            let rect = toast_area(case.area, case.text);
            assert_eq!(rect.width, case.expected_width, "{}: width", case.name);
            assert!(rect.right() <= case.area.right(), "{}: x bounds", case.name);
            assert!(rect.bottom() <= case.area.bottom(), "{}: y bounds", case.name);
        }
    }

    #[test]
    fn test_text_color_by_kind() {
        assert_eq!(text_color(ToastKind::Success), SUCCESS_COLOR);
        assert_eq!(text_color(ToastKind::Error), ERROR_COLOR);
        assert_eq!(text_color(ToastKind::Info), Color::White);
    }

    #[test]
    fn test_render_toast_shows_prefixed_text() {
        let toast = Toast {
            message: "Opened in browser".to_string(),
            kind: ToastKind::Success,
            ticks: 1,
        };
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), &toast))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("[+] Opened in browser"), "{text}");
    }
}
