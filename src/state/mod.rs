//! State management module for the daoscope TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`DataState`] - Fetched DAO, transfers and reconstructed holdings
//! - [`UiState`] - UI presentation concerns (focus, popups, toasts)
//! - [`DonutChart`] - Chart animation, tooltip and slice selection
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! ├──────────────┬──────────────┬────────────────────────┤
//! │  DataState   │   UiState    │      DonutChart        │
//! │  - dao       │  - focus     │  - transition plan     │
//! │  - transfers │  - popups    │  - tooltip             │
//! │  - holdings  │  - toasts    │  - selection           │
//! └──────────────┴──────────────┴────────────────────────┘
//! ```
//!
//! Background fetches report back through an unbounded channel of
//! [`AppMessage`]s, each tagged with the generation it was started for.

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::chart::DonutChart;
use crate::client::DaoClient;
use crate::domain::{DaoDetails, HoldingEntry, SessionContext, TransferRecord};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;
pub use ui_state::{Focus, PopupState, Toast, ToastKind, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent between async tasks and the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// DAO lookup finished; `None` when nothing is registered under the name.
    DaoLoaded {
        generation: u64,
        dao: Option<Box<DaoDetails>>,
    },
    /// DAO lookup failed.
    DaoFailed { generation: u64, error: String },
    /// Both transfer feeds fetched and merged.
    TransfersLoaded {
        generation: u64,
        records: Vec<TransferRecord>,
    },
    /// Transfer fetch failed.
    TransfersFailed { generation: u64, error: String },
    /// A chart slice was clicked or activated.
    SliceSelected(HoldingEntry),
}

impl AppMessage {
    /// Fetch generation the message belongs to, if it is a fetch result.
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        match self {
            Self::DaoLoaded { generation, .. }
            | Self::DaoFailed { generation, .. }
            | Self::TransfersLoaded { generation, .. }
            | Self::TransfersFailed { generation, .. } => Some(*generation),
            Self::SliceSelected(_) => None,
        }
    }
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// DAO name, or an ENS name ending in `.eth`.
    pub dao: String,
    /// Wallet address acting as the session.
    pub wallet: Option<String>,
    /// Override for the DAO factory subgraph URL.
    pub subgraph_url: Option<String>,
    /// Disable chart animation.
    pub no_animate: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Data state - DAO, transfers, holdings.
    pub data: DataState,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    /// The holdings chart.
    pub chart: DonutChart,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Effective configuration (file merged with CLI overrides).
    pub config: AppConfig,

    /// Wallet the viewer acts as, if any.
    pub session: SessionContext,

    /// Name the DAO was requested by.
    pub dao_query: String,

    /// Terminal area of the last draw, used for mouse hit-testing.
    pub terminal_area: Rect,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver only goes away
    // during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Subgraph Client
    // ========================================================================
    pub(crate) client: DaoClient,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, fetch pipeline
mod app_messages;

// Command execution, key and mouse input
mod app_commands;

// Clipboard and browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
