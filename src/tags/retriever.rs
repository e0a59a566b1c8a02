use crate::errors::{TagsError, TagsResult};
use crate::subgraph::{PairSource, SubgraphClient, PAGE_SIZE};
use crate::tags::mapper::{to_tag, Tag};
use crate::tags::validator::is_clean_pair;
use log::{debug, info};
use std::collections::HashSet;

/// The single chain this integration supports (Arbitrum One).
pub const SUPPORTED_CHAIN_ID: &str = "42161";

/// Retrieve the complete deduplicated tag collection for a chain.
///
/// Sole public entry point. Preconditions are enforced before any network
/// call; any fetch failure aborts the run with no partial result.
pub async fn retrieve_tags(chain_id: &str, api_key: &str) -> TagsResult<Vec<Tag>> {
    if chain_id != SUPPORTED_CHAIN_ID {
        return Err(TagsError::UnsupportedChain(chain_id.to_string()));
    }
    if api_key.trim().is_empty() {
        return Err(TagsError::MissingCredential);
    }

    let source = SubgraphClient::new(api_key)?;
    collect_tags(&source, chain_id).await
}

/// Walk the pair source to exhaustion and accumulate tags.
///
/// The cursor is a creation-timestamp watermark: it advances to the last
/// record of each full page and never decreases. A short or empty page is
/// the sole termination signal. Pairs sharing a boundary timestamp can be
/// returned twice across pages, which the seen-set absorbs.
///
/// Known limitation: a run of more than `PAGE_SIZE` pairs sharing one
/// timestamp would stall the watermark. The upstream query cannot express a
/// tie-break, so this is accepted rather than defended against.
pub async fn collect_tags<S>(source: &S, chain_id: &str) -> TagsResult<Vec<Tag>>
where
    S: PairSource + Sync,
{
    let mut cursor: u64 = 0;
    let mut has_more = true;
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Tag> = Vec::new();
    let mut page_count: u32 = 0;

    while has_more {
        let page = source.fetch_pairs_after(cursor).await?;
        page_count += 1;
        debug!(
            "[TAGS] Page {}: {} pairs (cursor={})",
            page_count,
            page.len(),
            cursor
        );

        for pair in &page {
            if !is_clean_pair(pair) {
                continue;
            }
            let tag = to_tag(pair, chain_id);
            if seen.insert(tag.contract_address.clone()) {
                out.push(tag);
            }
        }

        has_more = page.len() == PAGE_SIZE;
        if has_more {
            if let Some(last) = page.last() {
                cursor = last.created_at_timestamp;
            }
        }
    }

    info!(
        "[TAGS] Retrieved {} tags across {} pages",
        out.len(),
        page_count
    );
    Ok(out)
}
