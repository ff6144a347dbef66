//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::buffer::Buffer;
use serde_json::{Value, json};

use crate::domain::{DaoDetails, HoldingEntry, TokenEntity, TransferRecord};
use crate::state::{App, AppConfig, AppMessage, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct DaoMother;

impl DaoMother {
    pub const TOKEN_ADDRESS: &'static str = "0x6cfa18a6e2a4dc5e6d00e9037ab545ea60c12ff8";

    #[must_use]
    pub fn entity(name: &str) -> TokenEntity {
        TokenEntity {
            id: format!("{name}-id"),
            token_address: Self::TOKEN_ADDRESS.to_string(),
            creator: Some("0xcreator".to_string()),
            name: name.to_string(),
            ens_name: Some(format!("{name}.eth")),
            metadata: Some(
                r#"{"logoURL":"","twitterURL":"https://twitter.com/dao","websiteURL":"https://dao.xyz","discordURL":"","snapshotURL":""}"#
                    .to_string(),
            ),
            symbol: Some("DAO".to_string()),
            total_supply: Some("1000000".to_string()),
            decimals: Some("18".to_string()),
        }
    }

    #[must_use]
    pub fn details(name: &str) -> DaoDetails {
        DaoDetails::from_entity(Self::entity(name))
    }

    /// A DAO whose raw units equal display units, for readable tests.
    #[must_use]
    pub fn unscaled(name: &str, total_supply: u128) -> DaoDetails {
        let mut entity = Self::entity(name);
        entity.total_supply = Some(total_supply.to_string());
        entity.decimals = Some("0".to_string());
        DaoDetails::from_entity(entity)
    }
}

pub struct TransferMother;

impl TransferMother {
    /// Two mints and one holder-to-holder transfer, in raw units.
    #[must_use]
    pub fn small_history() -> Vec<TransferRecord> {
        vec![
            TransferRecord::mint("m1", "0xA", 100),
            TransferRecord::mint("m2", "0xB", 50),
            TransferRecord::transfer("t1", "0xA", "0xC", 40),
        ]
    }
}

pub struct HoldingMother;

impl HoldingMother {
    #[must_use]
    pub fn entries(values: &[(&str, f64)]) -> Vec<HoldingEntry> {
        values
            .iter()
            .map(|(address, balance)| HoldingEntry::new(*address, *balance))
            .collect()
    }

    /// Four holders with distinct balances.
    #[must_use]
    pub fn four() -> Vec<HoldingEntry> {
        Self::entries(&[("0xA", 10.0), ("0xB", 40.0), ("0xC", 30.0), ("0xD", 20.0)])
    }
}

pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn token_entities() -> Value {
        json!({
            "data": {
                "tokenEntities": [{
                    "id": "0x1",
                    "count": "3",
                    "tokenaddress": DaoMother::TOKEN_ADDRESS,
                    "creator": "0xcreator",
                    "name": "rungta",
                    "ensName": "rungta.eth",
                    "metadata": "{\"twitterURL\":\"https://twitter.com/rungta\"}",
                    "symbol": "RUN",
                    "totalSupply": "1000000",
                    "decimals": "18"
                }]
            }
        })
    }

    #[must_use]
    pub fn transfer_feeds() -> Value {
        json!({
            "data": {
                "tokenTransferEntities": [
                    { "id": "a", "count": "1", "tokenaddress": "0xt", "to": "0xA", "amt": "100" },
                    { "id": "b", "count": "2", "tokenaddress": "0xt", "to": "0xB", "amt": "50" }
                ],
                "manualTransferEntities": [
                    { "id": "b", "count": "2", "from": "0xA", "to": "0xB", "tokenaddress": "0xt", "amt": "25" }
                ]
            }
        })
    }

    #[must_use]
    pub fn ens_domains() -> Value {
        json!({
            "data": {
                "domains": [
                    { "name": "rungta.eth", "labelName": "rungta", "id": "0xd1" },
                    { "name": "sub.rungta.eth", "labelName": null, "id": "0xd2" }
                ]
            }
        })
    }

    #[must_use]
    pub fn graphql_errors() -> Value {
        json!({
            "errors": [
                { "message": "indexing_error" },
                { "message": "store error" }
            ]
        })
    }
}

pub struct AppMother;

impl AppMother {
    /// An app pointed at an unreachable endpoint, with animation off.
    #[must_use]
    pub fn app() -> App {
        let config = AppConfig {
            subgraph_url: "http://127.0.0.1:9/subgraph".to_string(),
            ens_subgraph_url: "http://127.0.0.1:9/ens".to_string(),
            animate: false,
            ..AppConfig::default()
        };
        let options = StartupOptions {
            dao: "rungta".to_string(),
            ..StartupOptions::default()
        };
        App::with_config(options, config).expect("test app should build")
    }

    /// An app with a loaded DAO and holdings rebuilt from
    /// [`TransferMother::small_history`].
    #[must_use]
    pub fn loaded() -> App {
        let mut app = Self::app();
        let generation = app.data.begin_fetch();
        app.data.set_dao(DaoMother::unscaled("rungta", 200));
        app.handle_message(AppMessage::TransfersLoaded {
            generation,
            records: TransferMother::small_history(),
        });
        app
    }
}

/// Buffer contents as text, one line per row.
#[must_use]
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
