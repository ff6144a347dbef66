//! Keyed enter, update and exit transitions between chart layouts.
//!
//! A transition is planned once, when new data arrives, and then sampled at
//! increasing progress values by the component that owns it. Planning and
//! sampling are both pure.

use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use super::layout::ChartArc;

// ============================================================================
// ArcFrame
// ============================================================================

/// Animated properties of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub start_angle: f64,
    pub end_angle: f64,
    pub opacity: f64,
}

impl ArcFrame {
    /// Resting frame of a laid-out arc.
    #[must_use]
    pub fn settled(arc: &ChartArc) -> Self {
        Self {
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            opacity: 1.0,
        }
    }

    /// Invisible zero-width frame a slice grows from or shrinks into.
    ///
    /// Slices ending past half a turn collapse onto the full-circle seam,
    /// the rest onto zero, so they sweep toward the nearer end.
    #[must_use]
    pub fn collapsed_for(end_angle: f64) -> Self {
        let angle = if end_angle > PI { TAU } else { 0.0 };
        Self {
            start_angle: angle,
            end_angle: angle,
            opacity: 0.0,
        }
    }

    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            start_angle: mix(self.start_angle, to.start_angle),
            end_angle: mix(self.end_angle, to.end_angle),
            opacity: mix(self.opacity, to.opacity),
        }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether `angle` falls inside this frame.
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        self.span() > 0.0 && angle >= self.start_angle && angle < self.end_angle
    }
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ============================================================================
// Slices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKind {
    Enter,
    Update,
    Exit,
}

/// A slice as currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSlice {
    pub arc: ChartArc,
    pub frame: ArcFrame,
    pub kind: SliceKind,
}

/// Planned motion of one keyed slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceTransition {
    pub arc: ChartArc,
    pub kind: SliceKind,
    pub from: ArcFrame,
    pub to: ArcFrame,
}

// ============================================================================
// ChartState
// ============================================================================

/// The set of slices on screen at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartState {
    slices: Vec<AnimatedSlice>,
}

impl ChartState {
    /// Every arc at rest.
    #[must_use]
    pub fn settled(arcs: &[ChartArc]) -> Self {
        Self {
            slices: arcs
                .iter()
                .map(|arc| AnimatedSlice {
                    arc: arc.clone(),
                    frame: ArcFrame::settled(arc),
                    kind: SliceKind::Update,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn slices(&self) -> &[AnimatedSlice] {
        &self.slices
    }

    #[must_use]
    pub fn find(&self, key: &str) -> Option<&AnimatedSlice> {
        self.slices.iter().find(|slice| slice.arc.key == key)
    }

    /// The visible slice covering `angle`. Exiting slices are ignored.
    #[must_use]
    pub fn slice_at_angle(&self, angle: f64) -> Option<&AnimatedSlice> {
        self.slices
            .iter()
            .filter(|slice| slice.kind != SliceKind::Exit)
            .find(|slice| slice.frame.contains(angle))
    }
}

// ============================================================================
// TransitionPlan
// ============================================================================

/// Enter, update and exit motions from one state to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionPlan {
    transitions: Vec<SliceTransition>,
}

impl TransitionPlan {
    #[must_use]
    pub fn transitions(&self) -> &[SliceTransition] {
        &self.transitions
    }

    /// Whether sampling would show any motion at all.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.transitions.iter().any(|t| t.from != t.to)
    }

    /// Displayed state at `progress` in `[0, 1]`, eased.
    ///
    /// At `progress >= 1` exited slices are gone.
    #[must_use]
    pub fn sample(&self, progress: f64) -> ChartState {
        let done = progress >= 1.0;
        let t = ease_out_cubic(progress);
        ChartState {
            slices: self
                .transitions
                .iter()
                .filter(|tr| !(done && tr.kind == SliceKind::Exit))
                .map(|tr| AnimatedSlice {
                    arc: tr.arc.clone(),
                    frame: if done { tr.to } else { tr.from.lerp(&tr.to, t) },
                    kind: tr.kind,
                })
                .collect(),
        }
    }
}

/// Plans the move from the `previous` displayed state to `arcs`.
///
/// Slices are matched by key. New keys enter from their collapsed frame,
/// surviving keys move straight from wherever they are displayed now, and
/// missing keys collapse out. With `animate == false` every slice starts at
/// its final frame and removed slices are dropped immediately.
///
/// Returns the settled target state alongside the plan.
#[must_use]
pub fn transition(
    previous: &ChartState,
    arcs: &[ChartArc],
    animate: bool,
) -> (ChartState, TransitionPlan) {
    let displayed: HashMap<&str, &AnimatedSlice> = previous
        .slices
        .iter()
        .map(|slice| (slice.arc.key.as_str(), slice))
        .collect();

    let mut transitions: Vec<SliceTransition> = arcs
        .iter()
        .map(|arc| {
            let to = ArcFrame::settled(arc);
            let (kind, from) = match displayed.get(arc.key.as_str()) {
                Some(slice) => (SliceKind::Update, slice.frame),
                None => (SliceKind::Enter, ArcFrame::collapsed_for(arc.end_angle)),
            };
            SliceTransition {
                arc: arc.clone(),
                kind,
                from: if animate { from } else { to },
                to,
            }
        })
        .collect();

    if animate {
        let incoming: HashMap<&str, ()> = arcs.iter().map(|a| (a.key.as_str(), ())).collect();
        transitions.extend(
            previous
                .slices
                .iter()
                .filter(|slice| !incoming.contains_key(slice.arc.key.as_str()))
                .map(|slice| SliceTransition {
                    arc: slice.arc.clone(),
                    kind: SliceKind::Exit,
                    from: slice.frame,
                    to: ArcFrame::collapsed_for(slice.arc.end_angle),
                }),
        );
    }

    let exits = transitions
        .iter()
        .filter(|t| t.kind == SliceKind::Exit)
        .count();
    tracing::debug!(
        slices = arcs.len(),
        exits,
        animate,
        "planned chart transition"
    );

    (ChartState::settled(arcs), TransitionPlan { transitions })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::pie_arcs;
    use crate::test_utils::HoldingMother;

    fn plan(previous: &ChartState, data: &[(&str, f64)], animate: bool) -> TransitionPlan {
        let arcs = pie_arcs(&HoldingMother::entries(data));
        transition(previous, &arcs, animate).1
    }

    fn find<'a>(plan: &'a TransitionPlan, key: &str) -> &'a SliceTransition {
        plan.transitions()
            .iter()
            .find(|t| t.arc.key == key)
            .unwrap()
    }

    #[test]
    fn test_collapse_state_depends_on_end_angle() {
        assert_eq!(ArcFrame::collapsed_for(PI).end_angle, 0.0);
        assert_eq!(ArcFrame::collapsed_for(PI + 0.01).start_angle, TAU);
        assert_eq!(ArcFrame::collapsed_for(1.0).opacity, 0.0);
    }

    #[test]
    fn test_enter_from_collapsed() {
        let plan = plan(&ChartState::default(), &[("0xA", 3.0), ("0xB", 1.0)], true);

        let a = find(&plan, "0xA");
        assert_eq!(a.kind, SliceKind::Enter);
        // 0xA ends at 1.5 PI, past half a turn.
        assert_eq!(a.from, ArcFrame::collapsed_for(TAU));
        assert_eq!(a.from.start_angle, TAU);

        let first = plan.sample(0.0);
        assert!(first.slices().iter().all(|s| s.frame.opacity == 0.0));
        let last = plan.sample(1.0);
        assert_eq!(last.find("0xA").unwrap().frame, a.to);
        assert!(plan.is_animated());
    }

    #[test]
    fn test_update_keeps_identity_without_collapse() {
        let first = plan(&ChartState::default(), &[("0xA", 1.0), ("0xB", 1.0)], true).sample(1.0);
        let second = plan(&first, &[("0xA", 1.0), ("0xB", 3.0)], true);

        assert!(second
            .transitions()
            .iter()
            .all(|t| t.kind == SliceKind::Update));
        let b = find(&second, "0xB");
        assert_eq!(b.from, first.find("0xB").unwrap().frame);
        assert_eq!(b.from.opacity, 1.0);

        // Mid-way the slice is between old and new spans, never collapsed.
        let mid = second.sample(0.5).find("0xB").unwrap().frame;
        assert!(mid.opacity == 1.0 && mid.span() > 0.0);
    }

    #[test]
    fn test_exit_collapses_then_disappears() {
        let first = plan(&ChartState::default(), &[("0xA", 1.0), ("0xB", 1.0)], true).sample(1.0);
        let second = plan(&first, &[("0xA", 1.0)], true);

        let b = find(&second, "0xB");
        assert_eq!(b.kind, SliceKind::Exit);
        assert_eq!(b.to, ArcFrame::collapsed_for(TAU));
        assert!(second.sample(0.5).find("0xB").is_some());
        assert!(second.sample(1.0).find("0xB").is_none());
    }

    #[test]
    fn test_no_animation_is_instant() {
        let first = plan(&ChartState::default(), &[("0xA", 1.0), ("0xB", 1.0)], false);
        assert!(!first.is_animated());
        let shown = first.sample(0.0);
        assert_eq!(shown, first.sample(1.0));

        let second = plan(&shown, &[("0xA", 2.0)], false);
        assert_eq!(second.transitions().len(), 1);
        assert!(second.sample(0.0).find("0xB").is_none());
    }

    #[test]
    fn test_interrupted_transition_resumes_from_displayed_frame() {
        let entering = plan(&ChartState::default(), &[("0xA", 1.0)], true);
        let halfway = entering.sample(0.5);
        let next = plan(&halfway, &[("0xA", 1.0), ("0xB", 1.0)], true);

        let a = find(&next, "0xA");
        assert_eq!(a.kind, SliceKind::Update);
        assert_eq!(a.from, halfway.find("0xA").unwrap().frame);
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_slice_at_angle_skips_exits() {
        let first = plan(&ChartState::default(), &[("0xA", 1.0), ("0xB", 1.0)], true).sample(1.0);
        let second = plan(&first, &[("0xA", 1.0)], true);
        let state = second.sample(0.1);
        assert!(state.slice_at_angle(0.1).is_some());
        assert!(state
            .slice_at_angle(1.5 * PI)
            .is_none_or(|s| s.kind != SliceKind::Exit));
    }
}
