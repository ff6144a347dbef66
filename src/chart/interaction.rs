//! Stateful donut chart component: data updates, animation progress,
//! tooltip tracking and slice selection.

use std::fmt;
use std::time::Duration;

use crate::domain::HoldingEntry;

use super::layout::{ChartArc, ChartOptions, DonutGeometry, Point, pie_arcs};
use super::transition::{AnimatedSlice, ChartState, TransitionPlan, transition};

/// Length of one enter/update/exit animation.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(600);

/// Callback invoked with the entry of a clicked or activated slice.
pub type SelectCallback = Box<dyn FnMut(&HoldingEntry) + Send>;

// ============================================================================
// TooltipState
// ============================================================================

/// Hover tooltip: the entry under the pointer and where the pointer is.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub screen_x: u16,
    pub screen_y: u16,
    pub payload: HoldingEntry,
}

// ============================================================================
// DonutChart
// ============================================================================

pub struct DonutChart {
    options: ChartOptions,
    data: Vec<HoldingEntry>,
    target: ChartState,
    plan: TransitionPlan,
    progress: f64,
    duration: Duration,
    tooltip: Option<TooltipState>,
    selected: Option<String>,
    on_select: SelectCallback,
}

impl fmt::Debug for DonutChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonutChart")
            .field("options", &self.options)
            .field("data", &self.data.len())
            .field("progress", &self.progress)
            .field("tooltip", &self.tooltip)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Default for DonutChart {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl DonutChart {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            data: Vec::new(),
            target: ChartState::default(),
            plan: TransitionPlan::default(),
            progress: 1.0,
            duration: DEFAULT_TRANSITION,
            tooltip: None,
            selected: None,
            on_select: Box::new(|_| {}),
        }
    }

    /// Sets the callback run when a slice is clicked or activated.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&HoldingEntry) + Send + 'static) -> Self {
        self.on_select = Box::new(callback);
        self
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &[HoldingEntry] {
        &self.data
    }

    /// Replaces the chart data, starting a transition from what is
    /// currently displayed.
    pub fn set_data(&mut self, data: Vec<HoldingEntry>) {
        let previous = self.displayed();
        let arcs = pie_arcs(&data);
        let (target, plan) = transition(&previous, &arcs, self.options.animate);

        self.progress = if plan.is_animated() { 0.0 } else { 1.0 };
        self.target = target;
        self.plan = plan;
        self.data = data;

        if let Some(key) = &self.selected
            && self.target.find(key).is_none()
        {
            self.selected = None;
        }
        // Keep the tooltip over a surviving slice, showing its new balance.
        if let Some(mut tooltip) = self.tooltip.take()
            && let Some(entry) = self
                .data
                .iter()
                .find(|e| e.address == tooltip.payload.address)
        {
            tooltip.payload = entry.clone();
            self.tooltip = Some(tooltip);
        }
    }

    /// Advances the running animation by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.progress >= 1.0 {
            return;
        }
        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.progress = (self.progress + step).min(1.0);
    }

    /// Slices as they should be drawn right now.
    #[must_use]
    pub fn displayed(&self) -> ChartState {
        self.plan.sample(self.progress)
    }

    /// Slices at rest once the current transition completes.
    #[must_use]
    pub fn settled_arcs(&self) -> Vec<ChartArc> {
        self.target.slices().iter().map(|s| s.arc.clone()).collect()
    }

    /// The displayed slice under `point`, if any.
    #[must_use]
    pub fn slice_at(&self, geometry: &DonutGeometry, point: Point) -> Option<AnimatedSlice> {
        let angle = geometry.locate(point.x, point.y)?;
        self.displayed().slice_at_angle(angle).cloned()
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// Tracks the pointer. Shows the tooltip over a slice and hides it
    /// anywhere else.
    pub fn hover(&mut self, geometry: &DonutGeometry, point: Point, screen: (u16, u16)) {
        self.tooltip = self.slice_at(geometry, point).map(|slice| TooltipState {
            screen_x: screen.0,
            screen_y: screen.1,
            payload: slice.arc.entry,
        });
    }

    /// Pointer left the chart.
    pub fn leave(&mut self) {
        self.tooltip = None;
    }

    /// Clicks at `point`, running the select callback for the slice under
    /// it. Returns the selected entry.
    pub fn click(&mut self, geometry: &DonutGeometry, point: Point) -> Option<HoldingEntry> {
        let slice = self.slice_at(geometry, point)?;
        self.selected = Some(slice.arc.key.clone());
        (self.on_select)(&slice.arc.entry);
        Some(slice.arc.entry)
    }

    #[must_use]
    pub const fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Keys of slices that can be selected, in layout order.
    fn selectable_keys(&self) -> Vec<&str> {
        self.target
            .slices()
            .iter()
            .filter(|s| s.arc.span() > 0.0)
            .map(|s| s.arc.key.as_str())
            .collect()
    }

    fn step_selection(&mut self, forward: bool) {
        let keys = self.selectable_keys();
        if keys.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .as_deref()
            .and_then(|key| keys.iter().position(|k| *k == key));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => keys.len() - 1,
            (Some(i), true) => (i + 1) % keys.len(),
            (Some(i), false) => (i + keys.len() - 1) % keys.len(),
        };
        self.selected = Some(keys[next].to_string());
    }

    pub fn select_next(&mut self) {
        self.step_selection(true);
    }

    pub fn select_previous(&mut self) {
        self.step_selection(false);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&HoldingEntry> {
        let key = self.selected.as_deref()?;
        self.target.find(key).map(|s| &s.arc.entry)
    }

    /// Runs the select callback for the keyboard selection.
    pub fn activate(&mut self) -> Option<HoldingEntry> {
        let entry = self.selected_entry()?.clone();
        (self.on_select)(&entry);
        Some(entry)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::ChartOptions;
    use crate::test_utils::HoldingMother;
    use std::sync::{Arc, Mutex};

    fn geometry() -> DonutGeometry {
        DonutGeometry::compute(500.0, 400.0, &ChartOptions::default()).unwrap()
    }

    fn settled_chart(data: &[(&str, f64)]) -> DonutChart {
        let mut chart = DonutChart::new(ChartOptions {
            animate: false,
            ..ChartOptions::default()
        });
        chart.set_data(HoldingMother::entries(data));
        chart
    }

    fn right_of_center(g: &DonutGeometry) -> Point {
        Point {
            x: g.center.x + 150.0,
            y: g.center.y,
        }
    }

    #[test]
    fn test_hover_shows_and_leave_hides_tooltip() {
        let mut chart = settled_chart(&[("0xA", 1.0), ("0xB", 1.0)]);
        let g = geometry();

        chart.hover(&g, right_of_center(&g), (42, 7));
        let tooltip = chart.tooltip().unwrap();
        assert_eq!(tooltip.payload.address, "0xA");
        assert_eq!((tooltip.screen_x, tooltip.screen_y), (42, 7));

        chart.hover(&g, g.center, (1, 1));
        assert!(chart.tooltip().is_none());

        chart.hover(&g, right_of_center(&g), (42, 7));
        chart.leave();
        assert!(chart.tooltip().is_none());
    }

    #[test]
    fn test_slice_at_covers_ring_only() {
        let chart = settled_chart(&[("0xA", 1.0), ("0xB", 1.0)]);
        let g = geometry();
        let c = g.center;
        let at = |x: f64| chart.slice_at(&g, Point { x, y: c.y }).map(|s| s.arc.key);

        assert_eq!(at(c.x + 150.0).as_deref(), Some("0xA"));
        assert_eq!(at(c.x - 150.0).as_deref(), Some("0xB"));
        assert_eq!(at(c.x + 10.0), None);
        assert_eq!(at(c.x + 190.0), None);
    }

    #[test]
    fn test_tooltip_follows_data_updates() {
        let mut chart = settled_chart(&[("0xA", 1.0), ("0xB", 1.0)]);
        let g = geometry();
        chart.hover(&g, right_of_center(&g), (42, 7));

        chart.set_data(HoldingMother::entries(&[("0xA", 5.0), ("0xB", 1.0)]));
        let tooltip = chart.tooltip().unwrap();
        assert_eq!(tooltip.payload.balance, 5.0);
        assert_eq!((tooltip.screen_x, tooltip.screen_y), (42, 7));

        chart.set_data(HoldingMother::entries(&[("0xB", 1.0)]));
        assert!(chart.tooltip().is_none());
    }

    #[test]
    fn test_click_invokes_callback_with_entry() {
        let clicked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&clicked);
        let mut chart = settled_chart(&[("0xA", 1.0), ("0xB", 1.0)])
            .on_select(move |entry| sink.lock().unwrap().push(entry.address.clone()));
        let g = geometry();

        let entry = chart.click(&g, right_of_center(&g)).unwrap();
        assert_eq!(entry.address, "0xA");
        assert_eq!(chart.selected_key(), Some("0xA"));
        assert!(chart.click(&g, g.center).is_none());
        assert_eq!(*clicked.lock().unwrap(), ["0xA"]);
    }

    #[test]
    fn test_default_callback_is_noop() {
        let mut chart = settled_chart(&[("0xA", 1.0)]);
        let g = geometry();
        assert!(chart.click(&g, right_of_center(&g)).is_some());
    }

    #[test]
    fn test_keyboard_selection_cycles_visible_slices() {
        let mut chart = settled_chart(&[("0xA", 1.0), ("0xB", 3.0), ("0xZ", 0.0)]);

        chart.select_next();
        assert_eq!(chart.selected_key(), Some("0xB"));
        chart.select_next();
        assert_eq!(chart.selected_key(), Some("0xA"));
        chart.select_next();
        assert_eq!(chart.selected_key(), Some("0xB"));
        chart.select_previous();
        assert_eq!(chart.selected_key(), Some("0xA"));

        let activated = chart.activate().unwrap();
        assert_eq!(activated.balance, 1.0);
    }

    #[test]
    fn test_selection_dropped_when_key_disappears() {
        let mut chart = settled_chart(&[("0xA", 1.0), ("0xB", 3.0)]);
        chart.select_next();
        chart.set_data(HoldingMother::entries(&[("0xA", 1.0)]));
        assert!(chart.selected_key().is_none());
        assert!(chart.activate().is_none());
    }

    #[test]
    fn test_animation_progresses_with_ticks() {
        let mut chart = DonutChart::default().with_duration(Duration::from_millis(400));
        chart.set_data(HoldingMother::four());
        assert!(chart.progress < 1.0);

        chart.tick(Duration::from_millis(200));
        assert!(chart.progress < 1.0);
        chart.tick(Duration::from_millis(300));
        assert_eq!(chart.progress, 1.0);

        let shown = chart.displayed();
        assert_eq!(shown.slices().len(), 4);
        assert!(shown.slices().iter().all(|s| s.frame.opacity == 1.0));
    }

    #[test]
    fn test_animate_false_is_never_animating() {
        let chart = settled_chart(&[("0xA", 1.0)]);
        assert_eq!(chart.progress, 1.0);
        assert_eq!(chart.settled_arcs().len(), 1);
    }
}
