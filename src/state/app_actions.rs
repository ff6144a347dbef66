//! Clipboard and browser actions for the daoscope application.
//!
//! Link resolution is kept apart from the side effect so it can be checked
//! without touching the clipboard or spawning a browser.

use super::{App, AppConfig, ToastKind, platform};
use crate::domain::SocialKind;

const NO_DAO: &str = "No DAO loaded";

impl App {
    // ========================================================================
    // Link Resolution
    // ========================================================================

    /// Public page URL of the loaded DAO.
    #[must_use]
    pub(crate) fn share_link(&self) -> Option<String> {
        self.data
            .dao
            .as_ref()
            .map(|dao| dao.share_url(&self.config.share_base_url))
    }

    /// URL of one of the loaded DAO's social links.
    #[must_use]
    pub(crate) fn social_url(&self, kind: SocialKind) -> Option<String> {
        self.data
            .dao
            .as_ref()?
            .metadata
            .social_links()
            .into_iter()
            .find(|link| link.kind == kind)
            .map(|link| link.url)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// `base` with this session's wallet, endpoint and animation setting.
    #[must_use]
    pub(crate) fn settings_for(&self, mut base: AppConfig) -> AppConfig {
        base.wallet = self.session.wallet().map(str::to_string);
        base.subgraph_url.clone_from(&self.config.subgraph_url);
        base.animate = self.config.animate;
        base
    }

    pub(crate) fn save_settings(&mut self) {
        let config = self.settings_for(AppConfig::load());
        match config.save() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "saved settings");
                self.ui.show_toast(ToastKind::Success, "Settings saved");
            }
            Err(e) => {
                tracing::warn!("failed to save settings: {e}");
                self.ui
                    .show_toast(ToastKind::Error, format!("Failed to save settings: {e}"));
            }
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    pub(crate) fn copy_share_link(&mut self) {
        match self.share_link() {
            Some(url) => self.copy_to_clipboard(&url, "Share link"),
            None => self.ui.show_toast(ToastKind::Error, NO_DAO),
        }
    }

    pub(crate) fn copy_token_address(&mut self) {
        match self.data.dao.as_ref().map(|dao| dao.token_address.clone()) {
            Some(address) => self.copy_to_clipboard(&address, "Token address"),
            None => self.ui.show_toast(ToastKind::Error, NO_DAO),
        }
    }

    fn copy_to_clipboard(&mut self, text: &str, description: &str) {
        match platform::clipboard::copy_text(text) {
            Ok(()) => {
                tracing::debug!(description, "copied to clipboard");
                self.ui
                    .show_toast(ToastKind::Success, format!("{description} copied!"));
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.ui.show_toast(ToastKind::Error, e.to_string());
            }
        }
    }

    // ========================================================================
    // Browser
    // ========================================================================

    pub(crate) fn open_buy_link(&mut self) {
        let url = self.data.dao.as_ref().map(|dao| dao.buy_url());
        self.open_or_report(url, NO_DAO);
    }

    pub(crate) fn open_etherscan(&mut self) {
        let url = self.data.dao.as_ref().map(|dao| dao.etherscan_url());
        self.open_or_report(url, NO_DAO);
    }

    pub(crate) fn open_ens_manager(&mut self) {
        let Some(dao) = &self.data.dao else {
            self.ui.show_toast(ToastKind::Error, NO_DAO);
            return;
        };
        let url = dao.ens_url();
        self.open_or_report(url, "No ENS name linked");
    }

    pub(crate) fn open_social(&mut self, kind: SocialKind) {
        if self.data.dao.is_none() {
            self.ui.show_toast(ToastKind::Error, NO_DAO);
            return;
        }
        let url = self.social_url(kind);
        self.open_or_report(url, &format!("No {} link", kind.label()));
    }

    fn open_or_report(&mut self, url: Option<String>, missing: &str) {
        let Some(url) = url else {
            self.ui.show_toast(ToastKind::Info, missing);
            return;
        };
        match open::that(&url) {
            Ok(()) => {
                tracing::info!(%url, "opened in browser");
                self.ui.show_toast(ToastKind::Success, "Opened in browser");
            }
            Err(e) => {
                tracing::warn!(%url, "failed to open browser: {e}");
                self.ui
                    .show_toast(ToastKind::Error, format!("Failed to open browser: {e}"));
            }
        }
    }
}
