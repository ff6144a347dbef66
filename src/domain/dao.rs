//! DAO token details and metadata.
//!
//! A DAO is a token contract created through the factory and linked to an
//! ENS name. Its social links are stored on-chain as a JSON string, which is
//! parsed into [`DaoMetadata`] once, when the details are fetched.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::DaoError;
use super::holdings::TokenSupply;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the Uniswap swap page.
const UNISWAP_SWAP_URL: &str = "https://app.uniswap.org/#/swap";

/// Base URL for Etherscan token pages.
const ETHERSCAN_TOKEN_URL: &str = "https://etherscan.io/token";

/// Base URL for ENS name management.
const ENS_APP_URL: &str = "https://app.ens.domains/name";

// ============================================================================
// DaoMetadata
// ============================================================================

/// Social links attached to a DAO at creation time.
///
/// Every field is optional; empty strings are normalised to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoMetadata {
    #[serde(rename = "logoURL", default, deserialize_with = "non_empty")]
    pub logo_url: Option<String>,
    #[serde(rename = "twitterURL", default, deserialize_with = "non_empty")]
    pub twitter_url: Option<String>,
    #[serde(rename = "websiteURL", default, deserialize_with = "non_empty")]
    pub website_url: Option<String>,
    #[serde(rename = "discordURL", default, deserialize_with = "non_empty")]
    pub discord_url: Option<String>,
    #[serde(rename = "snapshotURL", default, deserialize_with = "non_empty")]
    pub snapshot_url: Option<String>,
}

impl DaoMetadata {
    /// Parses the metadata JSON string stored with the token.
    ///
    /// An empty string yields the default (no links).
    ///
    /// # Errors
    ///
    /// Returns `DaoError::Parse` if the string is not a JSON object of the
    /// expected shape.
    pub fn parse(raw: &str) -> Result<Self, DaoError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| DaoError::parse(format!("invalid DAO metadata: {e}")))
    }

    /// Social links in display order.
    #[must_use]
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            (SocialKind::Snapshot, &self.snapshot_url),
            (SocialKind::Twitter, &self.twitter_url),
            (SocialKind::Discord, &self.discord_url),
            (SocialKind::Website, &self.website_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_ref().map(|url| SocialLink {
                kind,
                url: url.clone(),
            })
        })
        .collect()
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// ============================================================================
// SocialLink
// ============================================================================

/// Kind of social link, used for labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Snapshot,
    Twitter,
    Discord,
    Website,
}

impl SocialKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Snapshot => "Snapshot",
            Self::Twitter => "Twitter",
            Self::Discord => "Discord",
            Self::Website => "Website",
        }
    }
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

// ============================================================================
// DaoDetails
// ============================================================================

/// Raw token entity as stored by the factory subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenEntity {
    pub id: String,
    #[serde(rename = "tokenaddress")]
    pub token_address: String,
    #[serde(default)]
    pub creator: Option<String>,
    pub name: String,
    #[serde(rename = "ensName", default)]
    pub ens_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "totalSupply", default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
}

/// A DAO token with its parsed metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoDetails {
    pub id: String,
    pub token_address: String,
    pub creator: Option<String>,
    pub name: String,
    pub ens_name: Option<String>,
    pub symbol: String,
    /// Total supply as registered, kept textual until reconstruction.
    pub total_supply: Option<String>,
    pub decimals: Option<String>,
    pub metadata: DaoMetadata,
}

impl DaoDetails {
    /// Builds details from a subgraph entity, parsing the metadata string.
    ///
    /// Malformed metadata does not reject the DAO; it is logged and replaced
    /// by empty metadata.
    #[must_use]
    pub fn from_entity(entity: TokenEntity) -> Self {
        let metadata = match entity.metadata.as_deref().map(DaoMetadata::parse) {
            Some(Ok(metadata)) => metadata,
            Some(Err(e)) => {
                tracing::warn!(dao = %entity.name, "ignoring metadata: {e}");
                DaoMetadata::default()
            }
            None => DaoMetadata::default(),
        };

        Self {
            id: entity.id,
            token_address: entity.token_address,
            creator: entity.creator,
            name: entity.name,
            ens_name: entity.ens_name,
            symbol: entity.symbol.unwrap_or_default(),
            total_supply: entity.total_supply,
            decimals: entity.decimals,
            metadata,
        }
    }

    /// Validated supply parameters for balance reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::InvalidInput` if total supply or decimals are
    /// missing or non-numeric.
    pub fn supply(&self) -> Result<TokenSupply, DaoError> {
        TokenSupply::parse(self.total_supply.as_deref(), self.decimals.as_deref())
    }

    /// Public page URL for sharing this DAO.
    #[must_use]
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.name)
    }

    /// Uniswap link that buys this token.
    #[must_use]
    pub fn buy_url(&self) -> String {
        format!(
            "{UNISWAP_SWAP_URL}?exactField=output&outputCurrency={}",
            self.token_address
        )
    }

    /// Etherscan page for the token contract.
    #[must_use]
    pub fn etherscan_url(&self) -> String {
        format!("{ETHERSCAN_TOKEN_URL}/{}", self.token_address)
    }

    /// ENS management page for the linked name, if any.
    #[must_use]
    pub fn ens_url(&self) -> Option<String> {
        self.ens_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{ENS_APP_URL}/{name}/details"))
    }
}

// ============================================================================
// EnsDomain
// ============================================================================

/// An ENS domain owned by a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnsDomain {
    pub id: String,
    pub name: String,
    #[serde(rename = "labelName", default)]
    pub label_name: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
