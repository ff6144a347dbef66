//! Holder distribution panel: the donut chart and its legend.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chart::ChartArc;
use crate::state::{App, Focus};
use crate::theme::{self, ERROR_COLOR, MUTED_COLOR, SELECTED_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::DashboardLayout;
use crate::widgets::DonutWidget;
use crate::widgets::helpers::{format_balance, format_percent, truncate_address};

const LEGEND_ADDRESS_WIDTH: usize = 17;

/// Renders the distribution panel into the areas of `layout`.
pub fn render(app: &App, frame: &mut Frame, layout: &DashboardLayout) {
    let is_focused = app.ui.focus == Focus::Chart;
    let block = create_border_block("Distribution", is_focused);
    let inner = block.inner(layout.distribution);
    frame.render_widget(block, layout.distribution);

    if let Some(message) = status_message(app) {
        let style = if app.data.error.is_some() {
            Style::default().fg(ERROR_COLOR)
        } else {
            Style::default().fg(MUTED_COLOR)
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(style)
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let displayed = app.chart.displayed();
    let donut = DonutWidget::new(&displayed, app.chart.options())
        .selected(app.chart.selected_key());
    frame.render_widget(donut, layout.chart);

    let arcs = app.chart.settled_arcs();
    let lines = legend_lines(&arcs, app.chart.selected_key(), usize::from(layout.legend.height));
    frame.render_widget(Paragraph::new(lines), layout.legend);
}

/// Text shown instead of the chart, if the chart has nothing to draw.
fn status_message(app: &App) -> Option<String> {
    if let Some(error) = &app.data.error
        && app.chart.data().is_empty()
    {
        return Some(error.clone());
    }
    if app.chart.data().is_empty() {
        return Some(if app.data.is_loading() {
            "Loading holders...".to_string()
        } else {
            "No holders".to_string()
        });
    }
    None
}

/// Legend rows for the largest slices, at most `max_rows`.
#[must_use]
pub fn legend_lines(arcs: &[ChartArc], selected: Option<&str>, max_rows: usize) -> Vec<Line<'static>> {
    let total: f64 = arcs.iter().map(|arc| arc.value).sum();

    arcs.iter()
        .take(max_rows)
        .map(|arc| {
            let share = if total > 0.0 {
                arc.value / total * 100.0
            } else {
                0.0
            };
            let address_style = if arc.entry.is_unminted() {
                Style::default()
                    .fg(MUTED_COLOR)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let line = Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(theme::slice_color(arc.color_index)),
                ),
                Span::styled(
                    format!(
                        "{:<LEGEND_ADDRESS_WIDTH$}",
                        truncate_address(&arc.key, LEGEND_ADDRESS_WIDTH)
                    ),
                    address_style,
                ),
                Span::raw(format!(" {:>14}", format_balance(arc.entry.balance))),
                Span::styled(
                    format!(" {:>8}", format_percent(share)),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]);
            if selected == Some(arc.key.as_str()) {
                line.style(SELECTED_STYLE)
            } else {
                line
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
