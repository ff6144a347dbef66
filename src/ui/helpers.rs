//! UI helper functions for creating styled blocks and widgets.
//!
//! Every bordered panel and popup goes through these helpers so focus and
//! popup styling stay consistent across the dashboard.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, KEY_STYLE, MUTED_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a marker before the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };
    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Text Helpers
// ============================================================================

/// A `label  value` line with a fixed-width muted label.
#[must_use]
pub fn labeled_line(label: &str, value: impl Into<String>, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}"), Style::default().fg(MUTED_COLOR)),
        Span::raw(value.into()),
    ])
}

/// A `key:description` hint span pair.
#[must_use]
pub fn key_hint(key: &str, description: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(key.to_string(), KEY_STYLE),
        Span::styled(format!(":{description}  "), Style::default().fg(MUTED_COLOR)),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn render_block(block: Block<'static>) -> String {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        block.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_border_block_focus_styles() {
        struct TestCase {
            name: &'static str,
            focused: bool,
            corner: &'static str,
            title: &'static str,
        }

        let cases = [
            TestCase {
                name: "focused",
                focused: true,
                corner: "╔",
                title: "● Chart",
            },
            TestCase {
                name: "unfocused",
                focused: false,
                corner: "╭",
                title: " Chart ",
            },
        ];

        for case in cases {
            let text = render_block(create_border_block("Chart", case.focused));
            assert!(text.starts_with(case.corner), "{}: {text}", case.name);
            assert!(text.contains(case.title), "{}: {text}", case.name);
        }
    }

    #[test]
    fn test_empty_title_has_no_marker() {
        let text = render_block(create_border_block("", true));
        assert!(!text.contains('●'));
    }

    #[test]
    fn test_popup_block_title_centered() {
        let text = render_block(create_popup_block("Help"));
        let first_line = text.lines().next().unwrap_or_default();
        let offset = first_line.find("Help").unwrap();
        assert!(offset > 4, "title should not hug the left corner: {first_line}");
    }

    #[test]
    fn test_labeled_line_pads_label() {
        let line = labeled_line("Supply", "1,000", 10);
        assert_eq!(line.spans[0].content, "Supply    ");
        assert_eq!(line.spans[1].content, "1,000");
    }
}
