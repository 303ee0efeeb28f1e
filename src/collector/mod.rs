//! Collector module for gathering species counts from the remote API
//!
//! This module contains the collection logic, including:
//! - HTTP page fetching against the species counts endpoint
//! - The paced, total-aware pagination loop
//! - Normalization of raw entries into species records

mod coordinator;
mod fetcher;
mod normalize;
mod types;

pub use coordinator::{collect_all, max_pages};
pub use fetcher::{
    build_http_client, species_counts_url, HttpPageFetcher, PageFetcher, SPECIES_COUNTS_PATH,
};
pub use normalize::normalize;
pub use types::{CollectionOutcome, PagedResultSet, RawEntry, RawPage, RawTaxon, SpeciesRecord};
