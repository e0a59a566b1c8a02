//! Paginated retrieval of SushiSwap liquidity pairs on Arbitrum One and
//! their conversion into labeled-contract tags for downstream registries.
//!
//! The pipeline walks the exchange subgraph with a creation-timestamp
//! cursor, screens token metadata for markup contamination, decodes bytes32
//! symbols for display, and emits one deduplicated [`Tag`] per pair.

pub mod errors;
pub mod subgraph;
pub mod tags;

pub use errors::{TagsError, TagsResult};
pub use tags::mapper::Tag;
pub use tags::retriever::retrieve_tags;
