//! Donut chart geometry.
//!
//! Angles follow the usual pie convention: `0` is twelve o'clock and angles
//! grow clockwise up to `TAU`. Coordinates are abstract layout units with
//! `y` growing downwards; the terminal widget decides how units map to
//! cells.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::domain::HoldingEntry;

// ============================================================================
// Constants
// ============================================================================

/// Default margin on every side of the chart.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Default ring thickness, subtracted from the outer radius.
pub const DEFAULT_DONUT_THICKNESS: f64 = 50.0;

/// Below this width nothing is rendered.
pub const MIN_RENDER_WIDTH: f64 = 10.0;

/// Minimum angular span (radians) for a slice to carry a text label.
pub const LABEL_MIN_SPAN: f64 = 0.1;

/// Number of shades the slice palette cycles through.
pub const PALETTE_SIZE: usize = 4;

// ============================================================================
// Options
// ============================================================================

/// Space reserved around the drawable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

/// Rendering options for a donut chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub margin: Margin,
    /// Ring thickness; the inner hole radius is `outer - thickness`.
    pub thickness: f64,
    /// Whether enter, update and exit transitions are animated.
    pub animate: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            thickness: DEFAULT_DONUT_THICKNESS,
            animate: true,
        }
    }
}

// ============================================================================
// ChartArc
// ============================================================================

/// A point in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Angular span of one holding.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArc {
    /// Identity across re-renders.
    pub key: String,
    /// The holding this slice represents.
    pub entry: HoldingEntry,
    /// Value used for layout (non-finite balances count as zero).
    pub value: f64,
    /// Position of the entry in the caller's data.
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Index into the slice palette.
    pub color_index: usize,
}

impl ChartArc {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether the slice is wide enough for a text label.
    #[must_use]
    pub fn has_label_space(&self) -> bool {
        self.span() >= LABEL_MIN_SPAN
    }
}

/// Value of an entry for layout purposes.
#[must_use]
pub fn layout_value(entry: &HoldingEntry) -> f64 {
    if entry.balance.is_finite() {
        // Normalises -0.0 so sorting treats it like zero.
        entry.balance + 0.0
    } else {
        0.0
    }
}

/// Lays out slices proportionally to their values.
///
/// Slices are ordered by descending value, ties keeping input order, so the
/// largest holding always starts at twelve o'clock. Non-positive values keep
/// their slice (and identity) but get a zero-width span.
#[must_use]
pub fn pie_arcs(data: &[HoldingEntry]) -> Vec<ChartArc> {
    let values: Vec<f64> = data.iter().map(layout_value).collect();
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let scale = if total > 0.0 { TAU / total } else { 0.0 };

    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|a, b| values[*b].total_cmp(&values[*a]));

    let colors = color_domain(data);
    let keys = unique_keys(data);

    let mut angle = 0.0;
    order
        .into_iter()
        .map(|index| {
            let value = values[index];
            let span = if value > 0.0 { value * scale } else { 0.0 };
            let start_angle = angle;
            angle += span;
            let entry = data[index].clone();
            ChartArc {
                key: keys[index].clone(),
                color_index: colors
                    .get(entry.address.as_str())
                    .copied()
                    .unwrap_or_default(),
                entry,
                value,
                index,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Assigns palette indices from the sorted set of addresses, so the same
/// address set always yields the same colours whatever the input order.
#[must_use]
pub fn color_domain(data: &[HoldingEntry]) -> HashMap<&str, usize> {
    let mut domain: Vec<&str> = data.iter().map(|e| e.address.as_str()).collect();
    domain.sort_unstable();
    domain.dedup();
    domain
        .into_iter()
        .enumerate()
        .map(|(i, address)| (address, i % PALETTE_SIZE))
        .collect()
}

/// Slice keys are addresses; repeated addresses get a numeric suffix so
/// every slice keeps a distinct identity.
fn unique_keys(data: &[HoldingEntry]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    data.iter()
        .map(|entry| {
            let count = seen.entry(entry.address.as_str()).or_insert(0);
            *count += 1;
            if *count == 1 {
                entry.address.clone()
            } else {
                format!("{}#{}", entry.address, count)
            }
        })
        .collect()
}

/// Angle of a vector from the chart centre, in `[0, TAU)`.
#[must_use]
pub fn angle_of(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy);
    if angle < 0.0 { angle + TAU } else { angle }
}

// ============================================================================
// DonutGeometry
// ============================================================================

/// Ring position and radii for a given drawable size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl DonutGeometry {
    /// Computes the ring for a `width` x `height` surface.
    ///
    /// Returns `None` when `width` is below [`MIN_RENDER_WIDTH`]: the chart
    /// renders nothing at that size.
    #[must_use]
    pub fn compute(width: f64, height: f64, options: &ChartOptions) -> Option<Self> {
        if !(width >= MIN_RENDER_WIDTH) {
            return None;
        }
        let margin = options.margin;
        let inner_width = (width - margin.left - margin.right).max(0.0);
        let inner_height = (height - margin.top - margin.bottom).max(0.0);
        let outer_radius = inner_width.min(inner_height) / 2.0;
        let inner_radius = (outer_radius - options.thickness).max(0.0);

        Some(Self {
            width,
            height,
            center: Point {
                x: margin.left + inner_width / 2.0,
                y: margin.top + inner_height / 2.0,
            },
            outer_radius,
            inner_radius,
        })
    }

    /// Label anchor of a span: mid-angle, halfway through the ring.
    #[must_use]
    pub fn centroid(&self, start_angle: f64, end_angle: f64) -> Point {
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        let angle = (start_angle + end_angle) / 2.0;
        Point {
            x: self.center.x + radius * angle.sin(),
            y: self.center.y - radius * angle.cos(),
        }
    }

    /// Angle of the ring position under `(x, y)`, or `None` if the point is
    /// in the hole or outside the ring.
    #[must_use]
    pub fn locate(&self, x: f64, y: f64) -> Option<f64> {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        let distance = dx.hypot(dy);
        if self.outer_radius <= 0.0 || distance < self.inner_radius || distance > self.outer_radius
        {
            return None;
        }
        Some(angle_of(dx, dy))
    }
}

// ============================================================================
// Tests
// ============================================================================
