//! Modal popups drawn over the dashboard.
//!
//! - [`help`] - Scrollable keybinding reference
//! - [`message`] - Message popup for lookup failures and notices

pub mod help;
pub mod message;

pub use help::render as render_help_popup;
pub use message::render as render_message_popup;
