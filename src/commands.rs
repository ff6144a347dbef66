//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The app then
//! executes the command.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::SocialKind;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Dashboard with the chart focused.
    Chart,
    /// Dashboard with the transfer list focused.
    Transfers,
    /// Help popup is open.
    HelpPopup,
    /// A message popup is open.
    MessagePopup,
}

impl InputContext {
    /// Returns `true` if this context represents a popup state.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        matches!(self, Self::HelpPopup | Self::MessagePopup)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Fetch the DAO and its transfers again.
    Refresh,
    /// Persist the session wallet and display settings.
    SaveSettings,

    // === Sharing and Links ===
    /// Copy the public DAO page URL.
    CopyShareLink,
    /// Copy the token contract address.
    CopyTokenAddress,
    /// Open the Uniswap page buying this token.
    OpenBuyLink,
    /// Open the token on Etherscan.
    OpenEtherscan,
    /// Open the ENS management page of the DAO's name.
    OpenEnsManager,
    /// Open one of the DAO's social links.
    OpenSocial(SocialKind),

    // === Chart ===
    /// Select the next slice.
    SelectNextSlice,
    /// Select the previous slice.
    SelectPreviousSlice,
    /// Activate the selected slice.
    ActivateSlice,

    // === Navigation ===
    /// Cycle focus between chart and transfer list.
    CycleFocus,
    /// Scroll up in the focused panel or popup.
    ScrollUp,
    /// Scroll down in the focused panel or popup.
    ScrollDown,

    // === Popup Control ===
    /// Toggle the help popup.
    ToggleHelp,
    /// Dismiss the current popup or selection.
    Dismiss,

    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// Social link opened by the digit keys, in the order shown in the header.
#[must_use]
pub const fn social_for_digit(digit: char) -> Option<SocialKind> {
    match digit {
        '1' => Some(SocialKind::Snapshot),
        '2' => Some(SocialKind::Twitter),
        '3' => Some(SocialKind::Discord),
        '4' => Some(SocialKind::Website),
        _ => None,
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Chart | InputContext::Transfers => Self::map_dashboard_keys(key),
            InputContext::HelpPopup => Self::map_help_popup_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    /// Maps keys on the dashboard. Arrow keys mean the same in both panels;
    /// up/down only move the transfer list.
    fn map_dashboard_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('s') => AppCommand::SaveSettings,
            KeyCode::Char('c') => AppCommand::CopyShareLink,
            KeyCode::Char('a') => AppCommand::CopyTokenAddress,
            KeyCode::Char('b') => AppCommand::OpenBuyLink,
            KeyCode::Char('e') => AppCommand::OpenEtherscan,
            KeyCode::Char('n') => AppCommand::OpenEnsManager,
            KeyCode::Char(c) if social_for_digit(c).is_some() => {
                social_for_digit(c).map_or(AppCommand::Noop, AppCommand::OpenSocial)
            }
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Right => AppCommand::SelectNextSlice,
            KeyCode::Left => AppCommand::SelectPreviousSlice,
            KeyCode::Enter => AppCommand::ActivateSlice,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Up => AppCommand::ScrollUp,
            KeyCode::Down => AppCommand::ScrollDown,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_help_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => AppCommand::Dismiss,
            KeyCode::Up => AppCommand::ScrollUp,
            KeyCode::Down => AppCommand::ScrollDown,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
