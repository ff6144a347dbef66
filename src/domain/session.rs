//! Wallet session context.
//!
//! The wallet the user identifies with is passed explicitly to the code that
//! needs it instead of living in global state.

use serde::{Deserialize, Serialize};

/// Identity of the person using the viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    wallet: Option<String>,
}

impl SessionContext {
    /// A session with no wallet attached.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { wallet: None }
    }

    /// A session bound to `wallet`. Blank input yields an anonymous session.
    #[must_use]
    pub fn with_wallet(wallet: impl Into<String>) -> Self {
        let wallet = wallet.into();
        let wallet = wallet.trim();
        Self {
            wallet: (!wallet.is_empty()).then(|| wallet.to_string()),
        }
    }

    #[must_use]
    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.wallet.is_some()
    }

    /// Returns `true` if `address` is the session wallet. Hex addresses are
    /// compared case-insensitively.
    #[must_use]
    pub fn owns(&self, address: &str) -> bool {
        self.wallet
            .as_deref()
            .is_some_and(|wallet| wallet.eq_ignore_ascii_case(address))
    }
}
