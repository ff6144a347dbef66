//! ENS subgraph methods for DaoClient.

use serde::Deserialize;
use serde_json::{Value, json};

use super::{DaoClient, parse_graphql_data};
use crate::domain::{DaoError, EnsDomain};

const ENS_QUERY: &str =
    "query fetchEns($owner: String!) { domains(where: {owner: $owner}) { name labelName id } }";

#[derive(Debug, Deserialize)]
struct DomainsData {
    #[serde(default)]
    domains: Vec<EnsDomain>,
}

/// Extracts owned domains from a `fetchEns` response body.
pub(crate) fn parse_ens_domains(body: Value) -> Result<Vec<EnsDomain>, DaoError> {
    let data: DomainsData = parse_graphql_data(body)?;
    Ok(data.domains)
}

impl DaoClient {
    /// Fetch the ENS domains owned by a wallet.
    ///
    /// The ENS subgraph stores owners as lower-case hex ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn get_ens_domains(&self, owner: &str) -> Result<Vec<EnsDomain>, DaoError> {
        if owner.trim().is_empty() {
            return Err(DaoError::invalid_input("owner address is empty"));
        }
        let body: Value = self
            .post_query(
                &self.ens_subgraph_url,
                "fetchEns",
                ENS_QUERY,
                json!({ "owner": owner.trim().to_lowercase() }),
            )
            .await?;
        parse_ens_domains(body)
    }
}
