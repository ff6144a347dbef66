//! Overlay components drawn on top of the dashboard.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages
//! - [`tooltip`] - Slice tooltip that follows the pointer

pub mod toast;
pub mod tooltip;

pub use toast::render_toast;
pub use tooltip::render_tooltip;
