//! DAO lookup methods for DaoClient.

use serde::Deserialize;
use serde_json::{Value, json};

use super::{DaoClient, parse_graphql_data};
use crate::domain::{DaoDetails, DaoError, TokenEntity};

const TOKEN_FIELDS: &str = "id count tokenaddress creator name ensName metadata symbol totalSupply decimals";

#[derive(Debug, Deserialize)]
struct TokenEntitiesData {
    #[serde(rename = "tokenEntities", default)]
    token_entities: Vec<TokenEntity>,
}

/// Extracts the token entities from a `getDAO` response body.
pub(crate) fn parse_token_entities(body: Value) -> Result<Vec<TokenEntity>, DaoError> {
    let data: TokenEntitiesData = parse_graphql_data(body)?;
    Ok(data.token_entities)
}

impl DaoClient {
    /// Fetch a DAO by its registered name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn get_dao_details(&self, name: &str) -> Result<Option<DaoDetails>, DaoError> {
        let query = format!(
            "query getDAO($name: String!) {{ tokenEntities(where: {{name: $name}}) {{ {TOKEN_FIELDS} }} }}"
        );
        self.fetch_first_dao(&query, json!({ "name": name })).await
    }

    /// Fetch the DAO linked to an ENS name, if one was created.
    ///
    /// ENS names are matched lower-cased, as the factory stores them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn get_dao_for_ens(&self, ens_name: &str) -> Result<Option<DaoDetails>, DaoError> {
        let query = format!(
            "query getDAO($ensName: String!) {{ tokenEntities(where: {{ensName: $ensName}}) {{ {TOKEN_FIELDS} }} }}"
        );
        self.fetch_first_dao(&query, json!({ "ensName": ens_name.to_lowercase() }))
            .await
    }

    async fn fetch_first_dao(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<Option<DaoDetails>, DaoError> {
        let body: Value = self
            .post_query(&self.subgraph_url, "getDAO", query, variables)
            .await?;
        let entities = parse_token_entities(body)?;
        if entities.len() > 1 {
            tracing::debug!(matches = entities.len(), "several DAOs matched, using the first");
        }
        Ok(entities.into_iter().next().map(DaoDetails::from_entity))
    }
}
