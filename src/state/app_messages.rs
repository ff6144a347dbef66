//! Message processing for the daoscope application.
//!
//! Fetch results carry the generation they were started for; anything
//! older than the current generation is dropped so the latest request wins.

use super::{App, AppMessage, ToastKind};
use crate::domain::DaoError;
use crate::widgets::helpers::format_balance;

impl App {
    /// Drains the message channel.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        if let Some(generation) = message.generation()
            && !self.data.is_current(generation)
        {
            tracing::debug!(
                generation,
                current = self.data.generation(),
                "dropping stale fetch result"
            );
            return;
        }

        match message {
            AppMessage::DaoLoaded {
                generation,
                dao: Some(dao),
            } => {
                let token_address = dao.token_address.clone();
                tracing::info!(dao = %dao.name, token = %token_address, "DAO loaded");
                self.data.set_dao(*dao);
                self.fetch_transfers(generation, token_address);
            }
            AppMessage::DaoLoaded { dao: None, .. } => {
                let error = DaoError::not_found("DAO", self.dao_query.clone());
                tracing::warn!("{error}");
                self.ui.show_message(error.to_string());
                self.data.fail(error.to_string());
            }
            AppMessage::DaoFailed { error, .. } => {
                tracing::error!("DAO lookup failed: {error}");
                self.ui
                    .show_toast(ToastKind::Error, format!("Failed to load DAO: {error}"));
                self.data.fail(error);
            }
            AppMessage::TransfersLoaded { records, .. } => {
                tracing::info!(records = records.len(), "transfers loaded");
                match self.data.apply_transfers(records) {
                    Ok(holdings) => {
                        let entries = holdings.chart_entries();
                        self.chart.set_data(entries);
                    }
                    Err(e) => {
                        tracing::error!("could not rebuild holdings: {e}");
                        self.ui.show_toast(ToastKind::Error, e.to_string());
                        self.data.fail(e.to_string());
                    }
                }
            }
            AppMessage::TransfersFailed { error, .. } => {
                tracing::error!("transfer fetch failed: {error}");
                self.ui.show_toast(
                    ToastKind::Error,
                    format!("Failed to load transfers: {error}"),
                );
                self.data.fail(error);
            }
            AppMessage::SliceSelected(entry) => {
                tracing::info!(address = %entry.address, balance = entry.balance, "slice selected");
                self.ui.show_toast(
                    ToastKind::Info,
                    format!("{}: {}", entry.address, format_balance(entry.balance)),
                );
            }
        }
    }
}
