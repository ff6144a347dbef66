//! Dashboard panels.
//!
//! - [`distribution`] - Donut chart of holders with its legend
//! - [`details`] - Token facts, wallet holding and selected slice
//! - [`transfers`] - Scrollable transfer history

pub mod details;
pub mod distribution;
pub mod transfers;
