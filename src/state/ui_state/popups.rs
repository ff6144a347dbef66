//! Popup state types for the daoscope TUI.

/// Modal overlay currently shown on top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupState {
    /// No popup.
    #[default]
    None,
    /// A dismissable message.
    Message(String),
    /// Keyboard reference.
    Help,
}

impl PopupState {
    /// Returns `true` if a popup is shown.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::Help.is_active());
        assert!(PopupState::Message("hi".into()).is_active());
    }
}
