//! Balance reconstruction from transfer records.
//!
//! Holder balances are not stored anywhere; they are recomputed from the
//! full merged transfer list every time that list changes. Arithmetic runs
//! on exact raw units (`i128`) and is only scaled to human-readable values
//! at the presentation boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::DaoError;
use super::transfer::TransferRecord;

// ============================================================================
// Constants
// ============================================================================

/// The factory contract mints `totalSupply * 10^18` raw units regardless of
/// the decimals the token advertises.
pub const SUPPLY_SCALE_DECIMALS: u32 = 18;

/// Label of the chart entry that carries the supply not yet minted.
pub const UNMINTED_LABEL: &str = "not yet minted";

/// Largest decimals value whose scale factor fits in `i128`.
const MAX_DECIMALS: u32 = 38;

// ============================================================================
// TokenSupply
// ============================================================================

/// Validated reconstruction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSupply {
    /// Total supply in whole tokens, as registered with the factory.
    pub total_supply: u128,
    /// Decimal places used to scale raw balances for display.
    pub decimals: u32,
}

impl TokenSupply {
    /// Creates a supply description from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` if `decimals` is too large to scale
    /// with or the raw supply overflows.
    pub fn new(total_supply: u128, decimals: u32) -> Result<Self, DaoError> {
        if decimals > MAX_DECIMALS {
            return Err(DaoError::invalid_input(format!(
                "decimals must be at most {MAX_DECIMALS}, got {decimals}"
            )));
        }
        let supply = Self {
            total_supply,
            decimals,
        };
        supply.raw_total()?;
        Ok(supply)
    }

    /// Parses the string fields returned by the subgraph.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` when either field is missing or
    /// non-numeric.
    pub fn parse(total_supply: Option<&str>, decimals: Option<&str>) -> Result<Self, DaoError> {
        let total_supply = total_supply
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DaoError::invalid_input("totalSupply is missing"))?;
        let decimals = decimals
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DaoError::invalid_input("decimals is missing"))?;

        let total_supply = total_supply.parse::<u128>().map_err(|_| {
            DaoError::invalid_input(format!("totalSupply '{total_supply}' is not numeric"))
        })?;
        let decimals = decimals
            .parse::<u32>()
            .map_err(|_| DaoError::invalid_input(format!("decimals '{decimals}' is not numeric")))?;

        Self::new(total_supply, decimals)
    }

    /// Supply in raw units before any minting.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` if the value does not fit in `i128`.
    pub fn raw_total(&self) -> Result<i128, DaoError> {
        10u128
            .checked_pow(SUPPLY_SCALE_DECIMALS)
            .and_then(|scale| self.total_supply.checked_mul(scale))
            .and_then(|raw| i128::try_from(raw).ok())
            .ok_or_else(|| {
                DaoError::invalid_input(format!(
                    "totalSupply {} overflows the raw supply range",
                    self.total_supply
                ))
            })
    }
}

// ============================================================================
// HoldingEntry
// ============================================================================

/// A presentation-ready balance: one chart slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingEntry {
    /// Holder address or [`UNMINTED_LABEL`].
    pub address: String,
    /// Human-scaled balance. Missing values deserialize as zero.
    #[serde(default)]
    pub balance: f64,
}

impl HoldingEntry {
    #[must_use]
    pub fn new(address: impl Into<String>, balance: f64) -> Self {
        Self {
            address: address.into(),
            balance,
        }
    }

    /// Returns `true` for the sentinel entry carrying un-minted supply.
    #[must_use]
    pub fn is_unminted(&self) -> bool {
        self.address == UNMINTED_LABEL
    }
}

// ============================================================================
// Holdings
// ============================================================================

/// Result of a reconstruction pass.
///
/// Negative balances are kept as-is: they indicate inconsistent source data
/// and it is up to the caller to decide how to present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holdings {
    balances: BTreeMap<String, i128>,
    remaining: i128,
    supply: TokenSupply,
}

impl Holdings {
    /// Raw balance per address.
    #[allow(dead_code)]
    #[must_use]
    pub fn raw_balances(&self) -> &BTreeMap<String, i128> {
        &self.balances
    }

    /// Raw supply not yet minted.
    #[must_use]
    pub const fn raw_remaining(&self) -> i128 {
        self.remaining
    }

    #[must_use]
    pub const fn supply(&self) -> TokenSupply {
        self.supply
    }

    /// Human-scaled supply not yet minted.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        scale_units(self.remaining, self.supply.decimals)
    }

    /// Human-scaled balance of an exact address key.
    #[allow(dead_code)]
    #[must_use]
    pub fn balance_of(&self, address: &str) -> Option<f64> {
        self.balances
            .get(address)
            .map(|raw| scale_units(*raw, self.supply.decimals))
    }

    /// Raw balance of an address, matching hex addresses case-insensitively.
    #[must_use]
    pub fn find_raw_balance(&self, address: &str) -> Option<i128> {
        self.balances.get(address).copied().or_else(|| {
            self.balances
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(address))
                .map(|(_, raw)| *raw)
        })
    }

    /// Percentage of total supply held by `address`.
    #[must_use]
    pub fn share_of(&self, address: &str) -> Option<f64> {
        if self.supply.total_supply == 0 {
            return None;
        }
        let balance = scale_units(self.find_raw_balance(address)?, self.supply.decimals);
        Some(balance / self.supply.total_supply as f64 * 100.0)
    }

    /// Number of addresses currently holding a positive balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|raw| **raw > 0).count()
    }

    /// Exact decimal rendering of a raw amount in this token's scale.
    #[must_use]
    pub fn format_raw(&self, raw: i128) -> String {
        format_units(raw, self.supply.decimals)
    }

    /// Holder entries in address order.
    #[must_use]
    pub fn entries(&self) -> Vec<HoldingEntry> {
        self.balances
            .iter()
            .map(|(address, raw)| HoldingEntry::new(address, scale_units(*raw, self.supply.decimals)))
            .collect()
    }

    /// Holder entries followed by the un-minted supply entry.
    #[must_use]
    pub fn chart_entries(&self) -> Vec<HoldingEntry> {
        let mut entries = self.entries();
        entries.push(HoldingEntry::new(UNMINTED_LABEL, self.remaining()));
        entries
    }
}

// ============================================================================
// BalanceReconstructor
// ============================================================================

/// Folds transfer records into per-address balances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceReconstructor;

impl BalanceReconstructor {
    /// Reconstructs balances and remaining supply.
    ///
    /// Each record credits `to`; a record with a source debits `from`,
    /// otherwise it counts as minted. Credits, debits and the minted total
    /// are summed separately as unsigned values and netted once at the end,
    /// so the result (and whether it overflows) does not depend on record
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` when a record has no destination, a
    /// sum overflows `u128`, or a net balance leaves the `i128` range. No
    /// partial result is returned.
    pub fn reconstruct(
        records: &[TransferRecord],
        supply: &TokenSupply,
    ) -> Result<Holdings, DaoError> {
        let raw_total = supply.raw_total()?;
        let mut flows: BTreeMap<String, Flow> = BTreeMap::new();
        let mut minted: u128 = 0;

        for record in records {
            let to = record.to.as_deref().ok_or_else(|| {
                DaoError::invalid_input(format!("transfer '{}' has no destination", record.id))
            })?;
            let overflow =
                || DaoError::invalid_input(format!("transfer '{}' overflows a balance", record.id));

            let entry = flows.entry(to.to_string()).or_default();
            entry.credits = entry.credits.checked_add(record.amount).ok_or_else(overflow)?;

            match record.from.as_deref() {
                Some(from) => {
                    let entry = flows.entry(from.to_string()).or_default();
                    entry.debits = entry.debits.checked_add(record.amount).ok_or_else(overflow)?;
                }
                None => {
                    minted = minted.checked_add(record.amount).ok_or_else(|| {
                        DaoError::invalid_input(format!(
                            "transfer '{}' overflows the minted total",
                            record.id
                        ))
                    })?;
                }
            }
        }

        let mut balances = BTreeMap::new();
        for (address, flow) in flows {
            let net = net_amount(flow.credits, flow.debits).ok_or_else(|| {
                DaoError::invalid_input(format!("balance of {address} leaves the i128 range"))
            })?;
            balances.insert(address, net);
        }
        let remaining = u128::try_from(raw_total)
            .ok()
            .and_then(|total| net_amount(total, minted))
            .ok_or_else(|| DaoError::invalid_input("remaining supply leaves the i128 range"))?;

        let negative = balances.values().filter(|raw| **raw < 0).count();
        if negative > 0 {
            tracing::warn!(negative, "reconstruction produced negative balances");
        }
        tracing::debug!(
            records = records.len(),
            holders = balances.len(),
            "reconstructed balances"
        );

        Ok(Holdings {
            balances,
            remaining,
            supply: *supply,
        })
    }
}

/// Unsigned inflow and outflow of one address.
#[derive(Debug, Clone, Copy, Default)]
struct Flow {
    credits: u128,
    debits: u128,
}

/// `plus - minus` as a signed amount, if it fits.
fn net_amount(plus: u128, minus: u128) -> Option<i128> {
    if plus >= minus {
        i128::try_from(plus - minus).ok()
    } else {
        // Reaches i128::MIN exactly when the difference is 2^127.
        i128::try_from(minus - plus - 1).ok().map(|d| -d - 1)
    }
}

// ============================================================================
// Unit Scaling
// ============================================================================

/// Scales a raw amount down by `10^decimals`.
#[must_use]
pub fn scale_units(raw: i128, decimals: u32) -> f64 {
    let Some(scale) = 10i128.checked_pow(decimals) else {
        return 0.0;
    };
    // Whole part first so integral results stay exact.
    let whole = raw / scale;
    let fraction = raw % scale;
    whole as f64 + fraction as f64 / scale as f64
}

/// Formats a raw amount as an exact decimal string, trimming trailing zeros.
#[must_use]
pub fn format_units(raw: i128, decimals: u32) -> String {
    let sign = if raw < 0 { "-" } else { "" };
    let magnitude = raw.unsigned_abs();
    let Some(scale) = 10u128.checked_pow(decimals) else {
        return format!("{sign}0");
    };

    let whole = magnitude / scale;
    let fraction = magnitude % scale;
    if fraction == 0 {
        return format!("{sign}{whole}");
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{sign}{whole}.{}", fraction.trim_end_matches('0'))
}

// ============================================================================
// Tests
// ============================================================================
