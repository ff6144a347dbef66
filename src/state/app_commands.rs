//! Command execution and input handling for the daoscope application.
//!
//! This module handles keyboard and mouse input, mapping them to commands,
//! and executing those commands to update application state.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{App, Focus, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::ui::layout::{calculate_dashboard_layout, contains};
use crate::widgets::donut::{cell_center, geometry_for};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context based on application state.
    ///
    /// Popups take precedence over panel focus.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::Help => InputContext::HelpPopup,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => match self.ui.focus {
                Focus::Chart => InputContext::Chart,
                Focus::Transfers => InputContext::Transfers,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.start_fetch();
            }
            AppCommand::SaveSettings => self.save_settings(),

            // === Sharing and Links ===
            AppCommand::CopyShareLink => self.copy_share_link(),
            AppCommand::CopyTokenAddress => self.copy_token_address(),
            AppCommand::OpenBuyLink => self.open_buy_link(),
            AppCommand::OpenEtherscan => self.open_etherscan(),
            AppCommand::OpenEnsManager => self.open_ens_manager(),
            AppCommand::OpenSocial(kind) => self.open_social(kind),

            // === Chart ===
            AppCommand::SelectNextSlice => self.chart.select_next(),
            AppCommand::SelectPreviousSlice => self.chart.select_previous(),
            AppCommand::ActivateSlice => {
                // The select callback reports the entry through the channel.
                let _ = self.chart.activate();
            }

            // === Navigation ===
            AppCommand::CycleFocus => self.ui.cycle_focus(),
            AppCommand::ScrollUp => self.scroll_up(),
            AppCommand::ScrollDown => self.scroll_down(),

            // === Popup Control ===
            AppCommand::ToggleHelp => self.ui.toggle_help(),
            AppCommand::Dismiss => {
                if self.ui.has_active_popup() {
                    self.ui.dismiss_popup();
                } else {
                    self.chart.clear_selection();
                }
            }

            AppCommand::Noop => {}
        }
    }

    fn scroll_up(&mut self) {
        if matches!(self.ui.popup_state, PopupState::Help) {
            self.ui.scroll_help_up();
        } else if self.ui.focus == Focus::Transfers {
            self.ui.scroll_transfers_up();
        }
    }

    fn scroll_down(&mut self) {
        if matches!(self.ui.popup_state, PopupState::Help) {
            self.ui.scroll_help_down();
        } else if self.ui.focus == Focus::Transfers {
            self.ui.scroll_transfers_down(self.data.transfers.len());
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Routes mouse events to the chart and transfer list.
    ///
    /// The layout is recomputed from the last drawn terminal area, so hit
    /// areas match what is on screen.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        if self.get_input_context().is_popup() {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                self.ui.dismiss_popup();
            }
            return;
        }

        let layout = calculate_dashboard_layout(self.terminal_area, self.chart.data().len());
        let chart_area = layout.chart;
        let over_chart = contains(chart_area, mouse.column, mouse.row);
        let over_transfers = contains(layout.transfers, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let geometry = geometry_for(chart_area, self.chart.options());
                match geometry {
                    Some(geometry) if over_chart => {
                        let point = cell_center(chart_area, mouse.column, mouse.row);
                        self.chart
                            .hover(&geometry, point, (mouse.column, mouse.row));
                    }
                    _ => self.chart.leave(),
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if over_chart {
                    self.ui.focus = Focus::Chart;
                    if let Some(geometry) = geometry_for(chart_area, self.chart.options()) {
                        let point = cell_center(chart_area, mouse.column, mouse.row);
                        let _ = self.chart.click(&geometry, point);
                    }
                } else if over_transfers {
                    self.ui.focus = Focus::Transfers;
                }
            }
            MouseEventKind::ScrollUp if over_transfers => self.ui.scroll_transfers_up(),
            MouseEventKind::ScrollDown if over_transfers => {
                self.ui.scroll_transfers_down(self.data.transfers.len());
            }
            _ => {}
        }
    }
}
