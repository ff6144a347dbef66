//! Token transfer records and feed merging.
//!
//! The subgraph exposes two transfer feeds per token: an automated feed of
//! mint transfers emitted by the factory, and a manually curated feed that
//! also records holder-to-holder movements. Both deserialize into
//! [`TransferRecord`].

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// TransferRecord
// ============================================================================

/// A single token movement, in the token's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Unique identifier shared across both feeds.
    pub id: String,
    /// Source address. `None` marks a mint from supply.
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub from: Option<String>,
    /// Destination address. Optional on the wire so a missing destination
    /// surfaces as a reconstruction error rather than a parse failure.
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub to: Option<String>,
    /// Raw amount before decimal scaling.
    #[serde(rename = "amt", deserialize_with = "deserialize_amount")]
    pub amount: u128,
}

impl TransferRecord {
    /// Creates a mint record (no source address).
    #[must_use]
    pub fn mint(id: impl Into<String>, to: impl Into<String>, amount: u128) -> Self {
        Self {
            id: id.into(),
            from: None,
            to: Some(to.into()),
            amount,
        }
    }

    /// Creates a holder-to-holder transfer record.
    #[must_use]
    pub fn transfer(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: u128,
    ) -> Self {
        Self {
            id: id.into(),
            from: Some(from.into()),
            to: Some(to.into()),
            amount,
        }
    }

    /// Returns `true` if this record mints new supply.
    #[must_use]
    pub fn is_mint(&self) -> bool {
        self.from.is_none()
    }
}

/// Treats empty strings as absent addresses.
fn deserialize_optional_address<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Subgraphs encode `BigInt` as decimal strings; plain JSON numbers are
/// accepted as well.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(u64),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(u128::from(n)),
        RawAmount::Text(s) => s
            .trim()
            .parse::<u128>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{s}': {e}"))),
    }
}

// ============================================================================
// Feed Merging
// ============================================================================

/// Merges the automated and manual transfer feeds.
///
/// Manual entries take precedence: an automated entry is discarded when a
/// manual entry shares its `id`. The result lists the surviving automated
/// entries first, followed by every manual entry.
#[must_use]
pub fn merge_transfer_feeds(
    automated: Vec<TransferRecord>,
    manual: Vec<TransferRecord>,
) -> Vec<TransferRecord> {
    let manual_ids: HashSet<&str> = manual.iter().map(|m| m.id.as_str()).collect();
    let automated_len = automated.len();

    let mut merged: Vec<TransferRecord> = automated
        .into_iter()
        .filter(|record| !manual_ids.contains(record.id.as_str()))
        .collect();

    tracing::debug!(
        automated = automated_len,
        manual = manual.len(),
        superseded = automated_len - merged.len(),
        "merged transfer feeds"
    );

    merged.extend(manual);
    merged
}

// ============================================================================
// Tests
// ============================================================================
