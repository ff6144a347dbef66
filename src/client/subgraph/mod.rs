//! GraphQL client for the DAO factory and ENS subgraphs.
//!
//! This module provides the unified `DaoClient` for querying:
//! - The DAO factory subgraph - token entities and both transfer feeds
//! - The ENS subgraph - domains owned by a wallet
//!
//! # Example
//!
//! ```ignore
//! use crate::client::DaoClient;
//!
//! let client = DaoClient::new(DEFAULT_SUBGRAPH_URL, DEFAULT_ENS_SUBGRAPH_URL)?;
//! let dao = client.get_dao_details("rungta").await?;
//! ```

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;

use crate::domain::DaoError;

mod dao;
mod ens;
mod transfers;

#[cfg(test)]
pub(crate) use dao::parse_token_entities;
#[cfg(test)]
pub(crate) use ens::parse_ens_domains;
#[cfg(test)]
pub(crate) use transfers::parse_transfer_feeds;


// ============================================================================
// Constants
// ============================================================================

/// Default DAO factory subgraph.
pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/anoushk1234/insta-dao";

/// Default ENS subgraph.
pub const DEFAULT_ENS_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/ensdomains/ens";

// ============================================================================
// GraphQL Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Unwraps a GraphQL response body into its typed `data` payload.
///
/// # Errors
///
/// Returns `DaoError::GraphQl` when the body carries errors, and
/// `DaoError::Parse` when `data` is absent or has an unexpected shape.
pub(crate) fn parse_graphql_data<T: DeserializeOwned>(body: Value) -> Result<T, DaoError> {
    let response: GraphQlResponse<T> = serde_json::from_value(body)
        .map_err(|e| DaoError::parse(format!("unexpected GraphQL response: {e}")))?;

    if !response.errors.is_empty() {
        let message = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(DaoError::graphql(message));
    }

    response
        .data
        .ok_or_else(|| DaoError::parse("GraphQL response has no data"))
}

// ============================================================================
// DaoClient
// ============================================================================

#[derive(Debug, Clone)]
pub struct DaoClient {
    /// The DAO factory subgraph URL.
    pub(crate) subgraph_url: String,
    /// The ENS subgraph URL.
    pub(crate) ens_subgraph_url: String,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl DaoClient {
    /// Creates a new client for the given subgraph endpoints.
    ///
    /// # Errors
    ///
    /// Returns `DaoError::ClientInit` if the HTTP client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn new(
        subgraph_url: impl Into<String>,
        ens_subgraph_url: impl Into<String>,
    ) -> Result<Self, DaoError> {
        let client = Self::build_http_client()?;

        Ok(Self {
            subgraph_url: subgraph_url.into(),
            ens_subgraph_url: ens_subgraph_url.into(),
            client,
        })
    }

    /// Build the HTTP client with connection pooling.
    fn build_http_client() -> Result<Client, DaoError> {
        Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DaoError::client_init(e.to_string()))
    }

    #[must_use]
    pub fn subgraph_url(&self) -> &str {
        &self.subgraph_url
    }

    /// POSTs a GraphQL operation and decodes its `data` payload.
    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        url: &str,
        operation_name: &str,
        query: &str,
        variables: Value,
    ) -> Result<T, DaoError> {
        let payload = json!({
            "operationName": operation_name,
            "query": query,
            "variables": variables,
        });

        tracing::debug!(operation = operation_name, url, "posting GraphQL query");

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| tracing::warn!(operation = operation_name, "HTTP error: {e}"))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| DaoError::parse(format!("{operation_name}: invalid JSON body: {e}")))?;

        parse_graphql_data(body)
            .inspect_err(|e| tracing::warn!(operation = operation_name, "query failed: {e}"))
    }
}
