//! Help popup listing the keybindings.
//!
//! Opened with `?`, scrolled with the arrow keys, closed with Esc or `?`.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::layout::centered_popup_area;

/// Keybinding sections with descriptions.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("q / Ctrl-C", "Quit"),
            ("r", "Reload DAO and transfers"),
            ("s", "Save wallet and settings"),
            ("?", "Toggle help"),
            ("Tab", "Switch between chart and transfers"),
            ("Esc", "Close popup or clear selection"),
        ],
    ),
    (
        "Chart",
        &[
            ("← / →", "Previous / next slice"),
            ("Enter", "Report the selected slice"),
            ("Mouse", "Hover for details, click to select"),
        ],
    ),
    (
        "Transfers",
        &[("↑ / ↓", "Scroll"), ("Wheel", "Scroll under the pointer")],
    ),
    (
        "Links",
        &[
            ("c", "Copy share link"),
            ("a", "Copy token address"),
            ("b", "Buy on Uniswap"),
            ("e", "Open on Etherscan"),
            ("n", "Manage the ENS name"),
            ("1-4", "Snapshot, Twitter, Discord, Website"),
        ],
    ),
];

/// Width of the key column.
const KEY_COLUMN: usize = 14;

/// Renders the help popup, scrolled by `scroll_offset` lines.
pub fn render(frame: &mut Frame, area: Rect, scroll_offset: u16) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = help_lines(usize::from(inner.width.saturating_sub(2)));
    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(inner.height);
    let scroll = scroll_offset.min(max_scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );

    if max_scroll > 0 {
        let indicator = match scroll {
            0 => "┯",
            s if s >= max_scroll => "━",
            _ => "╂",
        };
        frame.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(Color::DarkGray)),
            Rect::new(
                popup_area.right().saturating_sub(2),
                popup_area.bottom().saturating_sub(1),
                1,
                1,
            ),
        );
    }
}

fn help_lines(rule_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (section, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("─".repeat(rule_width)));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<KEY_COLUMN$}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
