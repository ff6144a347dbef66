//! Transfer history panel.
//!
//! Lists the merged transfer feed one record per row, mints first as they
//! arrive from the feed, with a scrollbar when the list overflows.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::domain::{Holdings, TransferRecord};
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::widgets::helpers::{group_thousands, truncate_address};

/// Width addresses are shortened to in a row.
const ADDRESS_WIDTH: usize = 13;

/// Renders the transfer history panel.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.ui.focus == Focus::Transfers;
    let title = format!("Transfers ({})", app.data.transfers.len());
    let block = create_border_block(&title, is_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let transfers = &app.data.transfers;
    if transfers.is_empty() {
        let message = if app.data.loading_transfers {
            "Loading transfers..."
        } else {
            "No transfers"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible = usize::from(inner.height);
    let start = app.ui.transfer_scroll.min(transfers.len().saturating_sub(1));
    let items: Vec<ListItem> = transfers
        .iter()
        .skip(start)
        .take(visible)
        .map(|record| ListItem::new(transfer_line(record, app.data.holdings.as_ref())))
        .collect();

    frame.render_widget(List::new(items), inner);

    if is_focused && transfers.len() > visible {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .track_symbol(None)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(MUTED_COLOR))
            .track_style(Style::default().fg(Color::DarkGray));
        let mut state = ScrollbarState::default()
            .content_length(transfers.len())
            .viewport_content_length(visible)
            .position(start);
        frame.render_stateful_widget(scrollbar, inner, &mut state);
    }
}

/// One row of the transfer list.
#[must_use]
pub fn transfer_line(record: &TransferRecord, holdings: Option<&Holdings>) -> Line<'static> {
    let amount = format_amount(record.amount, holdings);
    let to = record.to.as_deref().unwrap_or("?");

    let source = if record.is_mint() {
        Span::styled(
            format!("{:<ADDRESS_WIDTH$}", "MINT"),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let from = record.from.as_deref().unwrap_or_default();
        Span::styled(
            format!("{:<ADDRESS_WIDTH$}", truncate_address(from, ADDRESS_WIDTH)),
            Style::default().fg(WARNING_COLOR),
        )
    };

    Line::from(vec![
        source,
        Span::styled(" → ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            format!("{:<ADDRESS_WIDTH$}", truncate_address(to, ADDRESS_WIDTH)),
            Style::default().fg(PRIMARY_COLOR),
        ),
        Span::raw(format!(" {amount}")),
    ])
}

/// Token-scaled amount when holdings are known, raw units otherwise.
fn format_amount(amount: u128, holdings: Option<&Holdings>) -> String {
    let text = match (holdings, i128::try_from(amount)) {
        (Some(holdings), Ok(raw)) => holdings.format_raw(raw),
        _ => amount.to_string(),
    };
    group_thousands(&text)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_panel(app: &App, height: u16) -> String {
        let backend = TestBackend::new(60, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_transfer_line_variants() {
        struct TestCase {
            name: &'static str,
            record: TransferRecord,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                name: "mint",
                record: TransferRecord::mint("m", "0xA", 1_500),
                expected: "MINT          → 0xA           1,500",
            },
            TestCase {
                name: "transfer",
                record: TransferRecord::transfer("t", "0xA", "0xB", 40),
                expected: "0xA           → 0xB           40",
            },
        ];

        for case in cases {
            assert_eq!(line_text(&transfer_line(&case.record, None)), case.expected, "{}", case.name);
        }
    }

    #[test]
    fn test_panel_lists_and_scrolls() {
        let mut app = AppMother::loaded();
        let text = render_panel(&app, 6);
        assert!(text.contains("Transfers (3)"));
        assert!(text.contains("MINT"));

        app.ui.transfer_scroll = 2;
        let text = render_panel(&app, 6);
        assert!(!text.contains("MINT"), "{text}");
        assert!(text.contains("0xC"), "{text}");
    }

    #[test]
    fn test_panel_empty_states() {
        let mut app = AppMother::app();
        assert!(render_panel(&app, 5).contains("No transfers"));

        app.data.loading_transfers = true;
        assert!(render_panel(&app, 5).contains("Loading transfers..."));
    }
}
