//! Layout calculations for the daoscope TUI.
//!
//! Rendering and mouse handling both go through [`calculate_dashboard_layout`]
//! so a click maps to exactly the cells the chart was drawn in.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows (borders included).
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the token details panel (borders included).
pub const DETAILS_HEIGHT: u16 = 11;

/// Maximum rows given to the chart legend.
pub const LEGEND_MAX_ROWS: u16 = 6;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    /// DAO name, share link and social links.
    pub header: Rect,
    /// Bordered distribution panel.
    pub distribution: Rect,
    /// Cells the donut is drawn into.
    pub chart: Rect,
    /// Legend below the donut.
    pub legend: Rect,
    /// Token details panel.
    pub details: Rect,
    /// Transfer history panel.
    pub transfers: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the dashboard layout from the terminal area.
///
/// `legend_rows` is the number of legend entries to fit; it is capped at
/// [`LEGEND_MAX_ROWS`].
#[must_use]
pub fn calculate_dashboard_layout(area: Rect, legend_rows: usize) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DETAILS_HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    let distribution = columns[0];
    let inner = distribution.inner(Margin::new(1, 1));
    let legend_height = u16::try_from(legend_rows)
        .unwrap_or(u16::MAX)
        .min(LEGEND_MAX_ROWS);
    let chart_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(legend_height)])
        .split(inner);

    DashboardLayout {
        header: rows[0],
        distribution,
        chart: chart_split[0],
        legend: chart_split[1],
        details: right[0],
        transfers: right[1],
        footer: rows[2],
    }
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Whether the cell `(column, row)` lies inside `area`.
#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout_heights() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_dashboard_layout(area, 3);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.distribution.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(layout.details.height, DETAILS_HEIGHT);
        assert_eq!(layout.legend.height, 3);
        assert_eq!(
            layout.chart.height + layout.legend.height,
            layout.distribution.height - 2
        );
    }

    #[test]
    fn test_dashboard_layout_columns() {
        let layout = calculate_dashboard_layout(Rect::new(0, 0, 100, 50), 0);
        assert_eq!(layout.distribution.width, 60);
        assert_eq!(layout.details.width, 40);
        assert_eq!(layout.chart.x, 1);
        assert_eq!(layout.chart.width, 58);
        assert_eq!(layout.legend.height, 0);
    }

    #[test]
    fn test_legend_is_capped() {
        let layout = calculate_dashboard_layout(Rect::new(0, 0, 100, 50), 40);
        assert_eq!(layout.legend.height, LEGEND_MAX_ROWS);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(2, 2, 3, 3);
        assert!(contains(area, 2, 2));
        assert!(contains(area, 4, 4));
        assert!(!contains(area, 5, 4));
        assert!(!contains(area, 1, 3));
    }
}
