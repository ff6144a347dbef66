//! Hover tooltip for chart slices.
//!
//! Drawn beside the pointer and pushed back inside the frame when it would
//! overflow an edge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::chart::TooltipState;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::widgets::helpers::format_balance;

/// Columns between the pointer and the tooltip.
const POINTER_OFFSET: u16 = 2;

/// Tooltip box for `tooltip`, clamped inside `bounds`.
#[must_use]
pub fn tooltip_area(bounds: Rect, tooltip: &TooltipState) -> Rect {
    let content_width = tooltip
        .payload
        .address
        .chars()
        .count()
        .max(format_balance(tooltip.payload.balance).chars().count());
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(bounds.width);
    let height = 4.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);
    let x = tooltip
        .screen_x
        .saturating_add(POINTER_OFFSET)
        .clamp(bounds.left(), max_x.max(bounds.left()));
    let y = tooltip
        .screen_y
        .clamp(bounds.top(), max_y.max(bounds.top()));

    Rect::new(x, y, width, height)
}

/// Renders the tooltip over everything in `bounds`.
pub fn render_tooltip(frame: &mut Frame, bounds: Rect, tooltip: &TooltipState) {
    let area = tooltip_area(bounds, tooltip);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(PRIMARY_COLOR))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", tooltip.payload.address),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", format_balance(tooltip.payload.balance)),
            Style::default().fg(MUTED_COLOR),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HoldingEntry;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn tooltip(x: u16, y: u16) -> TooltipState {
        TooltipState {
            screen_x: x,
            screen_y: y,
            payload: HoldingEntry::new("0xA", 1234.5),
        }
    }

    #[test]
    fn test_tooltip_area_follows_pointer() {
        let bounds = Rect::new(0, 0, 80, 24);
        // "1,234.5" is the widest line.
        assert_eq!(tooltip_area(bounds, &tooltip(10, 5)), Rect::new(12, 5, 11, 4));
    }

    #[test]
    fn test_tooltip_area_clamped_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 24);
        let area = tooltip_area(bounds, &tooltip(79, 23));
        assert_eq!(area.right(), 80);
        assert_eq!(area.bottom(), 24);
    }

    #[test]
    fn test_render_tooltip() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_tooltip(frame, frame.area(), &tooltip(3, 2)))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("0xA"));
        assert!(text.contains("1,234.5"));
    }
}
