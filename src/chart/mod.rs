//! Donut chart core, independent of any terminal backend.
//!
//! - [`layout`] - Slice angles, colours and ring geometry
//! - [`transition`] - Keyed enter, update and exit animation
//! - [`interaction`] - The stateful chart component

pub mod interaction;
pub mod layout;
pub mod transition;

pub use interaction::{DonutChart, TooltipState};
pub use layout::{ChartArc, ChartOptions, DonutGeometry, Margin, Point};
pub use transition::{ChartState, SliceKind};
