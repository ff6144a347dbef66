//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` / `with_config()` - Creates a new application instance
//! - `run()` - Main event loop
//! - `start_fetch()` - Generation-tagged DAO and transfer fetches

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::chart::DonutChart;
use crate::client::DaoClient;
use crate::domain::{DaoError, SessionContext};
use crate::tui::Tui;
use crate::ui;
use crate::widgets::donut::terminal_chart_options;

use super::{App, AppConfig, AppMessage, DataState, StartupOptions, UiState};

/// Interval between redraws and animation steps.
pub const TICK_RATE: Duration = Duration::from_millis(50);

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// # Errors
    /// Returns an error if the subgraph client cannot be built.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        Self::with_config(startup_options, AppConfig::load())
    }

    /// Creates a new App instance from an explicit configuration.
    ///
    /// Command-line options override the matching configuration fields.
    ///
    /// # Errors
    /// Returns an error if the subgraph client cannot be built.
    pub fn with_config(startup_options: StartupOptions, mut config: AppConfig) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        if let Some(url) = startup_options.subgraph_url {
            config.subgraph_url = url;
        }
        if startup_options.no_animate {
            config.animate = false;
        }
        let session = startup_options
            .wallet
            .or_else(|| config.wallet.clone())
            .map_or_else(SessionContext::anonymous, SessionContext::with_wallet);

        let client = DaoClient::new(&config.subgraph_url, &config.ens_subgraph_url)
            .map_err(DaoError::into_report)?;

        let select_tx = message_tx.clone();
        let chart = DonutChart::new(terminal_chart_options(config.animate)).on_select(
            move |entry| {
                let _ = select_tx.send(AppMessage::SliceSelected(entry.clone()));
            },
        );

        Ok(Self {
            data: DataState::new(),
            ui: UiState::new(),
            chart,
            config,
            session,
            dao_query: startup_options.dao.trim().to_string(),
            terminal_area: Rect::default(),
            exit: false,
            message_tx,
            message_rx,
            client,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_fetch();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| {
            self.terminal_area = frame.area();
            ui::render(self, frame);
        })?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.terminal_area = Rect::new(0, 0, width, height);
                    }
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= TICK_RATE {
                self.on_tick(elapsed);
                terminal.draw(|frame| {
                    self.terminal_area = frame.area();
                    ui::render(self, frame);
                })?;
                last_tick = Instant::now();
            }

            // Let fetch tasks run between frames.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Advances toasts and the chart transition.
    pub(crate) fn on_tick(&mut self, elapsed: Duration) {
        self.ui.tick_toast();
        self.chart.tick(elapsed);
    }

    // ========================================================================
    // Fetch Pipeline
    // ========================================================================

    /// Starts a DAO lookup for `dao_query`, superseding any fetch in flight.
    ///
    /// Names ending in `.eth` are resolved through their ENS link, anything
    /// else is looked up by DAO name.
    pub(crate) fn start_fetch(&mut self) {
        let generation = self.data.begin_fetch();
        let query = self.dao_query.clone();
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tracing::info!(
            dao = %query,
            generation,
            wallet = self.session.is_authenticated(),
            "fetching DAO"
        );

        tokio::spawn(async move {
            let result = if query.ends_with(".eth") {
                client.get_dao_for_ens(&query).await
            } else {
                client.get_dao_details(&query).await
            };
            let message = match result {
                Ok(dao) => AppMessage::DaoLoaded {
                    generation,
                    dao: dao.map(Box::new),
                },
                Err(e) => AppMessage::DaoFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Fetches the transfer history of `token_address` for `generation`.
    pub(crate) fn fetch_transfers(&self, generation: u64, token_address: String) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.get_token_transfers(&token_address).await {
                Ok(records) => AppMessage::TransfersLoaded {
                    generation,
                    records,
                },
                Err(e) => AppMessage::TransfersFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }
}
