//! Data state management for the daoscope TUI.
//!
//! Holds the fetched DAO, its merged transfer history and the holdings
//! reconstructed from it, plus the generation counter that decides which
//! fetch results are still wanted.

use crate::domain::{BalanceReconstructor, DaoDetails, DaoError, Holdings, TransferRecord};

// ============================================================================
// Data State
// ============================================================================

/// Data state: DAO details, transfers and holdings.
#[derive(Debug, Default)]
pub struct DataState {
    /// The DAO being viewed, once loaded.
    pub dao: Option<DaoDetails>,
    /// Merged transfer history, in feed order.
    pub transfers: Vec<TransferRecord>,
    /// Holdings reconstructed from `transfers`.
    pub holdings: Option<Holdings>,
    /// A DAO lookup is in flight.
    pub loading_dao: bool,
    /// A transfer fetch is in flight.
    pub loading_transfers: bool,
    /// Last fetch or reconstruction failure, shown in place of the chart.
    pub error: Option<String>,
    /// Generation of the most recent fetch.
    generation: u64,
}

impl DataState {
    /// Creates a new `DataState` with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch generation, superseding any fetch still running.
    ///
    /// Previously loaded data stays visible until the new results arrive.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading_dao = true;
        self.loading_transfers = false;
        self.error = None;
        self.generation
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether results tagged with `generation` are still wanted.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Stores the looked-up DAO. The transfer fetch follows.
    pub fn set_dao(&mut self, dao: DaoDetails) {
        self.loading_dao = false;
        self.loading_transfers = true;
        self.dao = Some(dao);
    }

    /// Records a failed lookup or fetch.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading_dao = false;
        self.loading_transfers = false;
        self.error = Some(error.into());
    }

    /// Stores the transfer history and rebuilds holdings from it.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` if no DAO is loaded, if its supply
    /// parameters are unusable, or if a record has no destination.
    pub fn apply_transfers(&mut self, records: Vec<TransferRecord>) -> Result<&Holdings, DaoError> {
        self.loading_transfers = false;
        let supply = self
            .dao
            .as_ref()
            .ok_or_else(|| DaoError::invalid_input("no DAO loaded"))?
            .supply()?;
        let holdings = BalanceReconstructor::reconstruct(&records, &supply)?;
        self.transfers = records;
        Ok(self.holdings.insert(holdings))
    }

    /// Whether anything is loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading_dao || self.loading_transfers
    }
}

// ============================================================================
// Tests
// ============================================================================
