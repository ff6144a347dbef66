//! Token details panel.
//!
//! Summarises the loaded token, the session wallet's holding and the slice
//! currently selected in the chart.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::{DaoDetails, Holdings, SessionContext, format_units};
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{create_border_block, labeled_line};
use crate::widgets::helpers::{format_balance, format_percent, group_thousands, truncate_address};

const LABEL_WIDTH: usize = 12;
const ADDRESS_WIDTH: usize = 23;

/// Renders the token details panel.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = create_border_block("Token", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(dao) = &app.data.dao else {
        let message = if app.data.loading_dao {
            "Loading..."
        } else {
            "No DAO loaded"
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let mut lines = token_lines(dao, app.data.holdings.as_ref());
    lines.push(wallet_line(&app.session, app.data.holdings.as_ref()));
    if let Some(entry) = app.chart.selected_entry() {
        let mut value = format_balance(entry.balance);
        if let Some(holdings) = &app.data.holdings
            && holdings.supply().total_supply > 0
        {
            let share = entry.balance / holdings.supply().total_supply as f64 * 100.0;
            value = format!("{value} ({})", format_percent(share));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<LABEL_WIDTH$}", "Selected"),
                Style::default().fg(MUTED_COLOR),
            ),
            Span::styled(
                truncate_address(&entry.address, ADDRESS_WIDTH),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(labeled_line("", value, LABEL_WIDTH));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Token facts: symbol, contract, supply and holder figures.
#[must_use]
pub fn token_lines(dao: &DaoDetails, holdings: Option<&Holdings>) -> Vec<Line<'static>> {
    let supply = dao
        .total_supply
        .as_deref()
        .map_or_else(|| "-".to_string(), group_thousands);

    let mut lines = vec![
        labeled_line("Symbol", dao.symbol.clone(), LABEL_WIDTH),
        labeled_line(
            "Token",
            truncate_address(&dao.token_address, ADDRESS_WIDTH),
            LABEL_WIDTH,
        ),
        labeled_line("Supply", supply, LABEL_WIDTH),
    ];
    if let Some(ens) = dao.ens_name.as_deref().filter(|name| !name.is_empty()) {
        lines.push(labeled_line("ENS", ens.to_string(), LABEL_WIDTH));
    }
    if let Some(holdings) = holdings {
        lines.push(labeled_line(
            "Holders",
            holdings.holder_count().to_string(),
            LABEL_WIDTH,
        ));
        lines.push(labeled_line(
            "Not minted",
            group_thousands(&format_units(
                holdings.raw_remaining(),
                holdings.supply().decimals,
            )),
            LABEL_WIDTH,
        ));
    }
    lines
}

/// The session wallet's balance and share of supply.
#[must_use]
pub fn wallet_line(session: &SessionContext, holdings: Option<&Holdings>) -> Line<'static> {
    let Some(wallet) = session.wallet() else {
        return labeled_line("Wallet", "not set (--wallet)", LABEL_WIDTH);
    };
    let Some(holdings) = holdings else {
        return labeled_line("Wallet", truncate_address(wallet, ADDRESS_WIDTH), LABEL_WIDTH);
    };

    let raw = holdings.find_raw_balance(wallet).unwrap_or(0);
    let balance = group_thousands(&holdings.format_raw(raw));
    let share = holdings
        .share_of(wallet)
        .map_or_else(|| format_percent(0.0), format_percent);

    Line::from(vec![
        Span::styled(
            format!("{:<LABEL_WIDTH$}", "You hold"),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::styled(
            balance,
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({share})")),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BalanceReconstructor, TokenSupply};
    use crate::test_utils::{AppMother, DaoMother, TransferMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn holdings() -> Holdings {
        let supply = TokenSupply::new(1_000, 0).unwrap();
        BalanceReconstructor::reconstruct(&TransferMother::small_history(), &supply).unwrap()
    }

    #[test]
    fn test_wallet_line_variants() {
        struct TestCase {
            name: &'static str,
            session: SessionContext,
            holdings: Option<Holdings>,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                name: "anonymous",
                session: SessionContext::anonymous(),
                holdings: Some(holdings()),
                expected: "Wallet      not set (--wallet)",
            },
            TestCase {
                name: "holder, case-insensitive",
                session: SessionContext::with_wallet("0xa"),
                holdings: Some(holdings()),
                expected: "You hold    60 (6.00%)",
            },
            TestCase {
                name: "not a holder",
                session: SessionContext::with_wallet("0xZ"),
                holdings: Some(holdings()),
                expected: "You hold    0 (0.00%)",
            },
            TestCase {
                name: "holdings pending",
                session: SessionContext::with_wallet("0xA"),
                holdings: None,
                expected: "Wallet      0xA",
            },
        ];

        for case in cases {
            let line = wallet_line(&case.session, case.holdings.as_ref());
            assert_eq!(line_text(&line), case.expected, "{}", case.name);
        }
    }

    #[test]
    fn test_token_lines() {
        let dao = DaoMother::details("rungta");
        let text: Vec<String> = token_lines(&dao, Some(&holdings()))
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(text[0], "Symbol      DAO");
        assert_eq!(text[2], "Supply      1,000,000");
        assert_eq!(text[3], "ENS         rungta.eth");
        assert_eq!(text[4], "Holders     3");
    }

    #[test]
    fn test_panel_shows_selection() {
        let mut app = AppMother::loaded();
        app.chart.select_next();

        let backend = TestBackend::new(50, 11);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&app, frame, frame.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Selected"), "{text}");
        assert!(text.contains("rungta.eth"), "{text}");
    }
}
