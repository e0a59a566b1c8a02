use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// Token record as returned by the exchange subgraph.
///
/// `symbol` is whatever the contract reports; older ERC-20s return a raw
/// bytes32 value that surfaces here as a 64-hex-character string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// Liquidity pair record. Identity is `id`; pages are ordered by
/// `created_at_timestamp` ascending, which the subgraph serializes as a
/// stringified integer.
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub created_at_timestamp: u64,
    pub token0: Token,
    pub token1: Token,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PairsData {
    pub pairs: Vec<Pair>,
}

/// Top-level GraphQL envelope. Exactly one of `data`/`errors` is expected;
/// anything else is treated as a malformed response by the client.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<PairsData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}
