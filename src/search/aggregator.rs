//! The pagination aggregator
//!
//! Page 0 is fetched sequentially to learn `total_results`; the remaining
//! pages are issued concurrently and joined all-or-nothing. Assembly is a
//! pure function over pages gathered in index order, so output order never
//! depends on fan-out completion order.

use super::query::{SearchFilters, SearchOptions};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{SearchPage, VideoRecord};
use futures::future::try_join_all;
use tracing::debug;

/// Fixed page size of the `/videos/search` endpoint
pub const RESULTS_PER_PAGE: u64 = 50;

/// The search endpoint path
const SEARCH_ENDPOINT: &str = "/videos/search";

/// Search videos matching `filters`, resolving pagination automatically.
///
/// Returns `min(options.count, total_results)` records ordered by ascending
/// page index then within-page order. Fails without a network call when the
/// filter set is empty or the requested count is zero; any page failure
/// fails the whole call with no partial results.
pub async fn search<T>(
    transport: &T,
    filters: &SearchFilters,
    options: &SearchOptions,
) -> Result<Vec<VideoRecord>>
where
    T: Transport + ?Sized,
{
    if filters.is_empty() {
        return Err(Error::usage("video search was not provided any parameters"));
    }
    if options.count == 0 {
        return Err(Error::usage("requested result count must be positive"));
    }

    let base = base_params(filters, options);

    // total_results is unknown until page 0 answers, so this fetch gates
    // everything else.
    let first = fetch_page(transport, &base, 0).await?;
    let target = u64::from(options.count).min(first.total_results);

    if target <= RESULTS_PER_PAGE {
        let mut items = first.items;
        items.truncate(usize::try_from(target).unwrap_or(usize::MAX));
        return Ok(items);
    }

    let pages = pages_needed(target);
    debug!("search fan-out: {} extra pages toward target {target}", pages - 1);

    // Concurrent tail fetch. try_join_all resolves with the first error and
    // drops the sibling futures, aborting their in-flight requests.
    let tail = try_join_all((1..pages).map(|page| fetch_page(transport, &base, page))).await?;

    Ok(assemble(first, tail, target))
}

/// Fetch one page of results
async fn fetch_page<T>(transport: &T, base: &[(String, String)], page: u64) -> Result<SearchPage>
where
    T: Transport + ?Sized,
{
    let mut params = base.to_vec();
    params.push(("page".to_string(), page.to_string()));

    let content = transport.get(SEARCH_ENDPOINT, &params).await?;
    serde_json::from_value(content).map_err(|e| Error::decode(SEARCH_ENDPOINT, e.to_string()))
}

/// Query parameters shared by every page of one search
fn base_params(filters: &SearchFilters, options: &SearchOptions) -> Vec<(String, String)> {
    let mut params = vec![
        ("limit".to_string(), RESULTS_PER_PAGE.to_string()),
        ("sort".to_string(), options.sort.as_str().to_string()),
        ("sortdir".to_string(), options.sort_direction.as_str().to_string()),
    ];
    params.extend(filters.to_params());
    params
}

/// Total pages needed to cover `target` results, page 0 included
pub(super) fn pages_needed(target: u64) -> u64 {
    target.div_ceil(RESULTS_PER_PAGE)
}

/// Concatenate pages in ascending index order and truncate to `target`.
///
/// `tail` must already be sorted by page index; `try_join_all` preserves
/// input order, so the caller gets this for free.
pub(super) fn assemble(first: SearchPage, tail: Vec<SearchPage>, target: u64) -> Vec<VideoRecord> {
    let mut items = first.items;
    for page in tail {
        items.extend(page.items);
    }
    items.truncate(usize::try_from(target).unwrap_or(usize::MAX));
    items
}
