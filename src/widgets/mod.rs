//! Reusable widgets for the daoscope TUI.
//!
//! # Module Structure
//!
//! - [`donut`]: Terminal rasteriser for the holdings donut chart
//! - [`helpers`]: Formatting for addresses, balances and percentages

pub mod donut;
pub mod helpers;

pub use donut::DonutWidget;
