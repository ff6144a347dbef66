//! Domain types for the daoscope DAO viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by the client and reconstruction
//! - [`transfer`] - Transfer records and feed merging
//! - [`holdings`] - Balance reconstruction and human-scaled holdings
//! - [`dao`] - DAO details, metadata and ENS domains
//! - [`session`] - Explicit wallet session context

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dao;
pub mod error;
pub mod holdings;
pub mod session;
pub mod transfer;

// ============================================================================
// Re-exports
// ============================================================================

pub use dao::{DaoDetails, EnsDomain, SocialKind, TokenEntity};
pub use error::DaoError;
pub use holdings::{BalanceReconstructor, HoldingEntry, Holdings, format_units};
#[cfg(test)]
pub use holdings::TokenSupply;
pub use session::SessionContext;
pub use transfer::{TransferRecord, merge_transfer_feeds};
