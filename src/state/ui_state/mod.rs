//! UI state management for the daoscope TUI.
//!
//! This module manages UI presentation concerns including:
//! - Panel focus (chart or transfer list)
//! - Popup/modal state
//! - Toast notifications
//! - Transfer list scrolling
//!
//! # Design
//!
//! The UI state is separate from fetched data, focusing purely on
//! presentation layer concerns.

mod popups;

pub use popups::PopupState;

// ============================================================================
// Focus
// ============================================================================

/// Represents which UI panel currently has focus.
///
/// Focus determines which panel receives arrow keys and is visually
/// highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The distribution chart has focus.
    #[default]
    Chart,
    /// The transfer history has focus.
    Transfers,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Chart => Self::Transfers,
            Self::Transfers => Self::Chart,
        }
    }
}

// ============================================================================
// Toast
// ============================================================================

/// Severity of a toast, which decides its prefix and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Success => "[+]",
            Self::Error => "[x]",
            Self::Info => "[i]",
        }
    }
}

/// A non-blocking notification that disappears after a number of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub ticks: u8,
}

impl Toast {
    /// Message with its severity prefix.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.kind.prefix(), self.message)
    }
}

/// Ticks a toast stays visible (the event loop ticks every 50ms).
pub const TOAST_TICKS: u8 = 40;

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup state and transient overlays.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast(ToastKind::Success, "Copied share link");
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Which panel currently has focus.
    pub focus: Focus,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Toast notification (non-blocking overlay).
    pub toast: Option<Toast>,
    /// First visible row of the transfer list.
    pub transfer_scroll: usize,
    /// Scroll offset for help popup content.
    pub help_scroll_offset: u16,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    /// Cycles focus between the chart and the transfer list.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if a popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Toggles the help popup.
    pub fn toggle_help(&mut self) {
        self.popup_state = match self.popup_state {
            PopupState::Help => PopupState::None,
            _ => PopupState::Help,
        };
        self.help_scroll_offset = 0;
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_add(1);
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Shows a toast notification that auto-dismisses.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            ticks: TOAST_TICKS,
        });
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some(toast) = &mut self.toast {
            toast.ticks = toast.ticks.saturating_sub(1);
            if toast.ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Transfer List
    // ========================================================================

    /// Scrolls the transfer list up by one row.
    pub fn scroll_transfers_up(&mut self) {
        self.transfer_scroll = self.transfer_scroll.saturating_sub(1);
    }

    /// Scrolls the transfer list down, keeping at least one row visible.
    pub fn scroll_transfers_down(&mut self, total: usize) {
        if self.transfer_scroll + 1 < total {
            self.transfer_scroll += 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_behavior() {
        let mut ui = UiState::new();
        assert_eq!(ui.focus, Focus::Chart);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Transfers);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Chart);
    }

    #[test]
    fn test_toast_countdown() {
        let mut ui = UiState::new();
        ui.show_toast(ToastKind::Success, "Copied");
        assert_eq!(ui.toast.as_ref().unwrap().text(), "[+] Copied");

        for _ in 0..TOAST_TICKS - 1 {
            assert!(!ui.tick_toast());
        }
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_help_toggle_and_message() {
        let mut ui = UiState::new();
        ui.toggle_help();
        assert_eq!(ui.popup_state, PopupState::Help);
        ui.scroll_help_down();
        ui.toggle_help();
        assert!(!ui.has_active_popup());
        assert_eq!(ui.help_scroll_offset, 0);

        ui.show_message("DAO not found");
        assert!(ui.has_active_popup());
        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_transfer_scroll_bounds() {
        let mut ui = UiState::new();
        ui.scroll_transfers_up();
        assert_eq!(ui.transfer_scroll, 0);
        ui.scroll_transfers_down(2);
        ui.scroll_transfers_down(2);
        assert_eq!(ui.transfer_scroll, 1);
    }
}
