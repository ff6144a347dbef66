//! Transfer feed methods for DaoClient.

use serde::Deserialize;
use serde_json::{Value, json};

use super::{DaoClient, parse_graphql_data};
use crate::domain::{DaoError, TransferRecord, merge_transfer_feeds};

const TRANSFERS_QUERY: &str = r"query getTokenTransferDetails($token: String!) {
  tokenTransferEntities(where: {tokenaddress: $token}) { id count tokenaddress to amt }
  manualTransferEntities(where: {tokenaddress: $token}) { id count from to tokenaddress amt }
}";

#[derive(Debug, Deserialize)]
struct TransferFeedsData {
    #[serde(rename = "tokenTransferEntities", default)]
    automated: Vec<TransferRecord>,
    #[serde(rename = "manualTransferEntities", default)]
    manual: Vec<TransferRecord>,
}

/// Decodes both transfer feeds and merges them, manual entries winning.
pub(crate) fn parse_transfer_feeds(body: Value) -> Result<Vec<TransferRecord>, DaoError> {
    let data: TransferFeedsData = parse_graphql_data(body)?;
    Ok(merge_transfer_feeds(data.automated, data.manual))
}

impl DaoClient {
    /// Fetch the merged transfer history of a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record cannot be decoded.
    pub async fn get_token_transfers(
        &self,
        token_address: &str,
    ) -> Result<Vec<TransferRecord>, DaoError> {
        let body: Value = self
            .post_query(
                &self.subgraph_url,
                "getTokenTransferDetails",
                TRANSFERS_QUERY,
                json!({ "token": token_address }),
            )
            .await?;
        let records = parse_transfer_feeds(body)?;
        tracing::info!(token = token_address, records = records.len(), "fetched transfers");
        Ok(records)
    }
}
