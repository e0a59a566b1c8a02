use crate::errors::{TagsError, TagsResult};
use crate::subgraph::types::{GraphQlResponse, Pair};
use crate::subgraph::PairSource;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const GATEWAY_BASE_URL: &str = "https://gateway.thegraph.com/api";

/// SushiSwap exchange subgraph on Arbitrum One.
const SUBGRAPH_ID: &str = "8nFDCAhdnJQEhQF3ZRnfWkJ6FkRsfAiiVabVn4eGoAZH";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed page size of the pairs query. Page-size equality against this limit
/// is the pagination continuation signal, so it must match the `first`
/// argument baked into the query below.
pub const PAGE_SIZE: usize = 1000;

const PAIRS_QUERY: &str = r#"query Pairs($lastTimestamp: Int) {
  pairs(
    first: 1000,
    orderBy: createdAtTimestamp,
    orderDirection: asc,
    where: { createdAtTimestamp_gt: $lastTimestamp }
  ) {
    id
    createdAtTimestamp
    token0 { id name symbol }
    token1 { id name symbol }
  }
}"#;

/// One-page GraphQL client for the pairs query.
///
/// Plain component owned by the caller; no global state. No retry is
/// performed here, the pagination driver decides what a failure means.
pub struct SubgraphClient {
    client: Client,
    url: String,
}

impl SubgraphClient {
    /// Create a client against the hosted gateway, with the API key embedded
    /// as a path segment.
    pub fn new(api_key: &str) -> TagsResult<Self> {
        let url = format!(
            "{}/{}/subgraphs/id/{}",
            GATEWAY_BASE_URL, api_key, SUBGRAPH_ID
        );
        Self::with_url(url)
    }

    /// Create a client against a custom endpoint (useful for testing).
    pub fn with_url(url: String) -> TagsResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("pairtags/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TagsError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }

    /// Fetch one page of pairs created strictly after `last_timestamp`,
    /// ordered ascending by creation timestamp (0 to 1000 entries).
    pub async fn fetch_pairs_after(&self, last_timestamp: u64) -> TagsResult<Vec<Pair>> {
        let body = json!({
            "query": PAIRS_QUERY,
            "variables": { "lastTimestamp": last_timestamp },
        });

        debug!(
            "[SUBGRAPH] Fetching pairs page: lastTimestamp={}",
            last_timestamp
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("[SUBGRAPH] Gateway error {}: {}", status, text);
            return Err(TagsError::Transport(format!(
                "Subgraph request failed with status {}: {}",
                status, text
            )));
        }

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| TagsError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        parse_envelope(envelope)
    }
}

#[async_trait]
impl PairSource for SubgraphClient {
    async fn fetch_pairs_after(&self, last_timestamp: u64) -> TagsResult<Vec<Pair>> {
        SubgraphClient::fetch_pairs_after(self, last_timestamp).await
    }
}

/// Resolve the GraphQL envelope into a page of pairs.
///
/// Every upstream-reported error message is logged before the aggregate
/// failure is returned, so the operator keeps the detail a single error
/// message would lose.
fn parse_envelope(envelope: GraphQlResponse) -> TagsResult<Vec<Pair>> {
    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            for err in &errors {
                error!("[SUBGRAPH] Query error: {}", err.message);
            }
            return Err(TagsError::UpstreamQuery(errors[0].message.clone()));
        }
    }

    match envelope.data {
        Some(data) => Ok(data.pairs),
        None => Err(TagsError::MalformedResponse(
            "Response is missing the data.pairs payload".to_string(),
        )),
    }
}
