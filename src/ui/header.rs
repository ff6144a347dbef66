//! Header rendering for the daoscope TUI.
//!
//! Shows the DAO name and symbol, the share link, the numbered social links
//! and the session wallet.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::{DaoDetails, SocialKind};
use crate::state::App;
use crate::theme::{ACCENT_COLOR, KEY_STYLE, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::widgets::helpers::truncate_address;

use super::helpers::create_border_block;

/// Digit keys and the social link each one opens, in header order.
const SOCIAL_KEYS: [(char, SocialKind); 4] = [
    ('1', SocialKind::Snapshot),
    ('2', SocialKind::Twitter),
    ('3', SocialKind::Discord),
    ('4', SocialKind::Website),
];

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Paragraph::new(title_line(app)).alignment(Alignment::Left);
    frame.render_widget(title, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1));

    if inner.width > 40 {
        let wallet = Paragraph::new(wallet_line(app)).alignment(Alignment::Right);
        frame.render_widget(
            wallet,
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
        );
    }

    if inner.height > 1
        && let Some(dao) = &app.data.dao
    {
        let links = Paragraph::new(links_line(dao, &app.config.share_base_url));
        frame.render_widget(
            links,
            Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
        );
    }
}

fn title_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        "[".into(),
        "dao".fg(PRIMARY_COLOR).bold(),
        "scope".fg(ACCENT_COLOR).bold(),
        "] ".into(),
    ];

    match &app.data.dao {
        Some(dao) => {
            spans.push(Span::styled(
                dao.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            if !dao.symbol.is_empty() {
                spans.push(Span::styled(
                    format!(" ({})", dao.symbol),
                    Style::default().fg(MUTED_COLOR),
                ));
            }
        }
        None if app.data.loading_dao => {
            spans.push(Span::styled(
                format!("Loading {}...", app.dao_query),
                Style::default().fg(MUTED_COLOR),
            ));
        }
        None => {
            spans.push(Span::styled(
                app.dao_query.clone(),
                Style::default().fg(MUTED_COLOR),
            ));
        }
    }
    Line::from(spans)
}

fn wallet_line(app: &App) -> Line<'static> {
    match app.session.wallet() {
        Some(wallet) => Line::from(vec![
            Span::styled("Wallet: ", Style::default().fg(MUTED_COLOR)),
            Span::styled(
                truncate_address(wallet, 13),
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "No wallet",
            Style::default().fg(MUTED_COLOR),
        )),
    }
}

/// Share link followed by the available social links with their digit keys.
fn links_line(dao: &DaoDetails, share_base_url: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        dao.share_url(share_base_url),
        Style::default().fg(PRIMARY_COLOR).underlined(),
    )];

    let links = dao.metadata.social_links();
    for (digit, kind) in SOCIAL_KEYS {
        if links.iter().any(|link| link.kind == kind) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(digit.to_string(), KEY_STYLE));
            spans.push(Span::raw(format!(" {}", kind.label())));
        }
    }
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::social_for_digit;
    use crate::test_utils::{AppMother, DaoMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_header(app: &App) -> String {
        let backend = TestBackend::new(100, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_social_keys_match_key_mapping() {
        for (digit, kind) in SOCIAL_KEYS {
            assert_eq!(social_for_digit(digit), Some(kind));
        }
    }

    #[test]
    fn test_links_line_lists_present_links_only() {
        let dao = DaoMother::details("rungta");
        let text: String = links_line(&dao, "https://instadao.org")
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.starts_with("https://instadao.org/rungta"));
        assert!(text.contains("2 Twitter"));
        assert!(text.contains("4 Website"));
        assert!(!text.contains("Snapshot"));
    }

    #[test]
    fn test_header_loading_and_loaded() {
        let mut app = AppMother::app();
        app.data.begin_fetch();
        assert!(render_header(&app).contains("Loading rungta..."));

        let app = AppMother::loaded();
        let text = render_header(&app);
        assert!(text.contains("rungta (DAO)"), "{text}");
        assert!(text.contains("No wallet"), "{text}");
        assert!(text.contains("instadao.org/rungta"), "{text}");
    }
}
