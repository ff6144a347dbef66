//! Terminal rasteriser for the donut chart.
//!
//! Each cell is sampled at its centre. Terminal cells are roughly twice as
//! tall as they are wide, so one row spans two layout units vertically and
//! the ring stays round on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::chart::{ChartOptions, ChartState, DonutGeometry, Margin, Point, SliceKind};
use crate::theme::{self, BG_COLOR, LABEL_COLOR};
use crate::widgets::helpers::truncate_address;

/// Layout units per terminal row.
pub const CELL_ASPECT: f64 = 2.0;

/// Margin around the ring inside its panel, in layout units.
pub const TERMINAL_MARGIN: f64 = 1.0;

/// Ring thickness in layout units (columns).
pub const TERMINAL_THICKNESS: f64 = 8.0;

/// Longest label drawn inside a slice.
const LABEL_MAX_LEN: usize = 11;

const FILL_SYMBOL: &str = "█";
const SELECTED_SYMBOL: &str = "▓";

// ============================================================================
// Cell Mapping
// ============================================================================

/// Chart options sized for terminal cells.
#[must_use]
pub fn terminal_chart_options(animate: bool) -> ChartOptions {
    ChartOptions {
        margin: Margin::uniform(TERMINAL_MARGIN),
        thickness: TERMINAL_THICKNESS,
        animate,
    }
}

/// Layout surface of a terminal area, in layout units.
#[must_use]
pub fn surface_size(area: Rect) -> (f64, f64) {
    (f64::from(area.width), f64::from(area.height) * CELL_ASPECT)
}

/// Ring geometry for `area`, or `None` if the area is too narrow to draw.
#[must_use]
pub fn geometry_for(area: Rect, options: &ChartOptions) -> Option<DonutGeometry> {
    let (width, height) = surface_size(area);
    DonutGeometry::compute(width, height, options)
}

/// Layout point at the centre of the cell `(column, row)`.
///
/// Coordinates are absolute terminal positions; the result is relative to
/// `area`.
#[must_use]
pub fn cell_center(area: Rect, column: u16, row: u16) -> Point {
    Point {
        x: f64::from(column.saturating_sub(area.x)) + 0.5,
        y: (f64::from(row.saturating_sub(area.y)) + 0.5) * CELL_ASPECT,
    }
}

/// Terminal cell containing a layout point, if it lies inside `area`.
#[must_use]
pub fn point_to_cell(area: Rect, point: Point) -> Option<(u16, u16)> {
    let column = point.x.floor();
    let row = (point.y / CELL_ASPECT).floor();
    if column < 0.0 || row < 0.0 || column >= f64::from(area.width) || row >= f64::from(area.height)
    {
        return None;
    }
    Some((area.x + column as u16, area.y + row as u16))
}

// ============================================================================
// DonutWidget
// ============================================================================

/// Renders a sampled [`ChartState`].
#[derive(Debug, Clone)]
pub struct DonutWidget<'a> {
    state: &'a ChartState,
    options: &'a ChartOptions,
    selected: Option<&'a str>,
}

impl<'a> DonutWidget<'a> {
    #[must_use]
    pub const fn new(state: &'a ChartState, options: &'a ChartOptions) -> Self {
        Self {
            state,
            options,
            selected: None,
        }
    }

    /// Highlight the slice with this key.
    #[must_use]
    pub const fn selected(mut self, key: Option<&'a str>) -> Self {
        self.selected = key;
        self
    }

    fn render_ring(&self, geometry: &DonutGeometry, area: Rect, buf: &mut Buffer) {
        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                let point = cell_center(area, column, row);
                let Some(angle) = geometry.locate(point.x, point.y) else {
                    continue;
                };
                let Some(slice) = self
                    .state
                    .slices()
                    .iter()
                    .find(|slice| slice.frame.contains(angle))
                else {
                    continue;
                };

                let color = theme::blend(
                    theme::slice_color(slice.arc.color_index),
                    BG_COLOR,
                    slice.frame.opacity,
                );
                let symbol = if self.selected == Some(slice.arc.key.as_str()) {
                    SELECTED_SYMBOL
                } else {
                    FILL_SYMBOL
                };
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol(symbol)
                        .set_style(Style::default().fg(color).bg(BG_COLOR));
                }
            }
        }
    }

    fn render_labels(&self, geometry: &DonutGeometry, area: Rect, buf: &mut Buffer) {
        for slice in self.state.slices() {
            if slice.kind == SliceKind::Exit
                || !slice.arc.has_label_space()
                || slice.frame.opacity < 0.5
            {
                continue;
            }
            let centroid = geometry.centroid(slice.arc.start_angle, slice.arc.end_angle);
            let Some((column, row)) = point_to_cell(area, centroid) else {
                continue;
            };

            let label = truncate_address(&slice.arc.key, LABEL_MAX_LEN);
            let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            if width > area.width {
                continue;
            }
            let start = column
                .saturating_sub(width / 2)
                .min(area.right() - width)
                .max(area.left());
            let fill = theme::blend(
                theme::slice_color(slice.arc.color_index),
                BG_COLOR,
                slice.frame.opacity,
            );
            buf.set_stringn(
                start,
                row,
                &label,
                usize::from(area.right().saturating_sub(start)),
                Style::default()
                    .fg(LABEL_COLOR)
                    .bg(fill)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

impl Widget for DonutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(geometry) = geometry_for(area, self.options) else {
            return;
        };
        self.render_ring(&geometry, area, buf);
        self.render_labels(&geometry, area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::pie_arcs;
    use crate::test_utils::HoldingMother;

    fn options() -> ChartOptions {
        ChartOptions {
            margin: Margin::uniform(0.0),
            thickness: 8.0,
            animate: false,
        }
    }

    fn render(state: &ChartState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        DonutWidget::new(state, &options()).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_narrow_area_renders_nothing() {
        let state = ChartState::settled(&pie_arcs(&HoldingMother::four()));
        let buf = render(&state, 5, 20);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_ring_has_hole_and_fill() {
        let state = ChartState::settled(&pie_arcs(&HoldingMother::entries(&[("0xA", 1.0)])));
        let buf = render(&state, 40, 20);

        // Centre of the hole stays empty.
        assert_eq!(buf[(20, 10)].symbol(), " ");
        // Right edge of the ring is filled with the first palette colour.
        let edge = &buf[(38, 10)];
        assert_eq!(edge.symbol(), FILL_SYMBOL);
        assert_eq!(edge.fg, theme::slice_color(0));
    }

    #[test]
    fn test_labels_only_for_wide_slices() {
        let data = HoldingMother::entries(&[("big", 99.0), ("tiny", 0.5)]);
        let state = ChartState::settled(&pie_arcs(&data));
        let buf = render(&state, 40, 20);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();

        assert!(text.contains("big"));
        assert!(!text.contains("tiny"));
    }

    #[test]
    fn test_labels_stay_inside_narrow_area() {
        let text = |buf: &Buffer| -> String { buf.content().iter().map(|c| c.symbol()).collect() };
        let outside_is_blank = |buf: &Buffer| {
            (0..buf.area.height).all(|y| {
                (0..5).chain(15..20).all(|x| buf[(x, y)].symbol() == " ")
            })
        };
        let area = Rect::new(5, 0, 10, 10);

        // Wider than the area: skipped.
        let data = HoldingMother::entries(&[("0x123456789", 1.0)]);
        let state = ChartState::settled(&pie_arcs(&data));
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        DonutWidget::new(&state, &options()).render(area, &mut buf);
        assert!(outside_is_blank(&buf));
        assert!(!text(&buf).contains("0x123456789"));

        // Exactly as wide: drawn from the left edge.
        let data = HoldingMother::entries(&[("0x12345678", 1.0)]);
        let state = ChartState::settled(&pie_arcs(&data));
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        DonutWidget::new(&state, &options()).render(area, &mut buf);
        assert!(outside_is_blank(&buf));
        assert!(text(&buf).contains("0x12345678"));
    }

    #[test]
    fn test_selected_slice_uses_distinct_symbol() {
        let state = ChartState::settled(&pie_arcs(&HoldingMother::entries(&[("0xA", 1.0)])));
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        DonutWidget::new(&state, &options())
            .selected(Some("0xA"))
            .render(area, &mut buf);
        assert_eq!(buf[(38, 10)].symbol(), SELECTED_SYMBOL);
    }

    #[test]
    fn test_cell_mapping_round_trip() {
        let area = Rect::new(3, 2, 40, 20);
        let point = cell_center(area, 10, 7);
        assert_eq!(point, Point { x: 7.5, y: 11.0 });
        assert_eq!(point_to_cell(area, point), Some((10, 7)));
        assert_eq!(point_to_cell(area, Point { x: -1.0, y: 0.0 }), None);
    }
}
