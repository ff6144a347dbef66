//! UI rendering module for the daoscope TUI.
//!
//! # Module Structure
//!
//! - `panels` - Distribution chart, token details and transfer history
//! - `popups` - Modal dialogs (help, messages)
//! - `components` - Overlays (toast notifications, slice tooltip)
//! - `layout` - Layout calculations shared with mouse handling
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::state::{App, PopupState};
use crate::theme::BG_COLOR;

use layout::calculate_dashboard_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function.
///
/// Draws the dashboard, then the active popup, then the slice tooltip and
/// finally the toast on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_COLOR)), area);

    let layout = calculate_dashboard_layout(area, app.chart.data().len());

    header::render(frame, layout.header, app);
    panels::distribution::render(app, frame, &layout);
    panels::details::render(app, frame, layout.details);
    panels::transfers::render(app, frame, layout.transfers);
    footer::render(frame, layout.footer, app);

    match &app.ui.popup_state {
        PopupState::Help => popups::render_help_popup(frame, area, app.ui.help_scroll_offset),
        PopupState::Message(message) => popups::render_message_popup(frame, area, message),
        PopupState::None => {
            if let Some(tooltip) = app.chart.tooltip() {
                components::render_tooltip(frame, area, tooltip);
            }
        }
    }

    if let Some(toast) = &app.ui.toast {
        components::render_toast(frame, area, toast);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastKind;
    use crate::test_utils::{AppMother, buffer_text};
    use crate::widgets::donut::{cell_center, geometry_for};
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    fn render_app(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_dashboard_renders_all_panels() {
        let app = AppMother::loaded();
        let text = render_app(&app);

        for title in ["Distribution", "Token", "Transfers (3)", "q:Quit"] {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_popup_and_toast_overlay() {
        let mut app = AppMother::loaded();
        app.ui.show_message("DAO 'nope' not found");
        app.ui.show_toast(ToastKind::Error, "boom");

        let text = render_app(&app);
        assert!(text.contains("DAO 'nope' not found"));
        assert!(text.contains("[x] boom"));
    }

    /// Hovers the first cell over a slice.
    fn hover_slice(app: &mut App) {
        let layout = calculate_dashboard_layout(app.terminal_area, app.chart.data().len());
        let area = layout.chart;
        let geometry = geometry_for(area, app.chart.options()).unwrap();
        let cell = (area.top()..area.bottom())
            .flat_map(|row| (area.left()..area.right()).map(move |column| (column, row)))
            .find(|&(column, row)| {
                app.chart
                    .slice_at(&geometry, cell_center(area, column, row))
                    .is_some()
            })
            .unwrap();
        app.chart
            .hover(&geometry, cell_center(area, cell.0, cell.1), cell);
    }

    #[test]
    fn test_tooltip_drawn_unless_popup_open() {
        let mut app = AppMother::loaded();
        app.terminal_area = Rect::new(0, 0, 120, 40);
        let plain = render_app(&app);

        hover_slice(&mut app);
        assert!(app.chart.tooltip().is_some());
        assert_ne!(render_app(&app), plain);

        app.ui.toggle_help();
        let with_tooltip = render_app(&app);
        app.chart.leave();
        assert_eq!(render_app(&app), with_tooltip);
    }
}
