//! Collection loop - drives the page fetcher until the declared total is reached
//!
//! The loop:
//! - Fetches pages strictly one after another, pausing between requests
//! - Fixes the expected total from the first page
//! - Normalizes and appends every entry
//! - Stops once the declared total has been seen, or at a hard page ceiling
//!   derived from that total
//! - Aborts the whole run on the first failed page

use crate::collector::fetcher::PageFetcher;
use crate::collector::normalize::normalize;
use crate::collector::types::{CollectionOutcome, PagedResultSet};
use crate::config::CollectorConfig;
use crate::CollectionFailure;

/// Largest number of pages the loop will request for a declared total
///
/// One page beyond `ceil(total / per_page)` tolerates a total that grows
/// slightly while the run is in progress.
pub fn max_pages(total_results: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total_results.div_ceil(per_page) + 1;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Collects every species count page for `place_id`
///
/// # Arguments
///
/// * `fetcher` - Source of pages
/// * `place_id` - Region identifier
/// * `config` - Page size and pacing
///
/// # Returns
///
/// * `Ok(CollectionOutcome::Complete)` - All pages gathered
/// * `Ok(CollectionOutcome::NoData)` - The service reported zero results
/// * `Err(CollectionFailure)` - A page failed; nothing collected so far is kept
pub async fn collect_all<F>(
    fetcher: &F,
    place_id: u64,
    config: &CollectorConfig,
) -> Result<CollectionOutcome, CollectionFailure>
where
    F: PageFetcher + ?Sized,
{
    let per_page = config.effective_per_page();
    let delay = config.request_delay();

    let mut records = Vec::new();
    let mut total: Option<u64> = None;
    let mut seen: u64 = 0;
    let mut page: u32 = 1;

    let declared = loop {
        let body = fetcher
            .fetch_page(place_id, page)
            .await
            .map_err(|cause| CollectionFailure { page, cause })?;

        let declared = *total.get_or_insert(body.total_results);
        if declared == 0 {
            tracing::info!("Place {} has no wild species observations", place_id);
            return Ok(CollectionOutcome::NoData);
        }
        if body.total_results != declared {
            tracing::warn!(
                "Total changed during collection: {} -> {} (keeping {})",
                declared,
                body.total_results,
                declared
            );
        }

        let entries = body.results.len();
        seen += entries as u64;
        let before = records.len();
        records.extend(body.results.iter().filter_map(normalize));
        let dropped = entries - (records.len() - before);
        if dropped > 0 {
            tracing::debug!("Dropped {} unnamed or uncounted entries on page {}", dropped, page);
        }

        tracing::info!(
            "Fetched page {}: {} species ({}/{})",
            page,
            entries,
            seen.min(declared),
            declared
        );

        if seen >= declared {
            break declared;
        }
        if entries == 0 {
            tracing::warn!(
                "Page {} was empty before reaching the declared total ({}/{})",
                page,
                seen,
                declared
            );
            break declared;
        }
        let ceiling = max_pages(declared, per_page);
        if page >= ceiling {
            tracing::warn!(
                "Stopping at page ceiling {} with {}/{} results",
                ceiling,
                seen,
                declared
            );
            break declared;
        }

        page += 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    };

    Ok(CollectionOutcome::Complete(PagedResultSet {
        records,
        total_results: declared,
        pages_fetched: page,
    }))
}
