pub mod client;
pub mod types;

pub use client::{SubgraphClient, PAGE_SIZE};
pub use types::{Pair, Token};

use crate::errors::TagsResult;
use async_trait::async_trait;

/// Source of pair pages. The pagination driver is written against this seam
/// so it can be exercised with a stub source in tests.
#[async_trait]
pub trait PairSource {
    /// Fetch one page of pairs created strictly after `last_timestamp`.
    async fn fetch_pairs_after(&self, last_timestamp: u64) -> TagsResult<Vec<Pair>>;
}
