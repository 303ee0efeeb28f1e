//! Wire types for the species counts endpoint and the canonical records
//! built from them

use serde::{Deserialize, Serialize};

/// One page of the `observations/species_counts` response
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    /// Number of distinct taxa the service reports for the whole query
    pub total_results: u64,

    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub per_page: Option<u32>,

    #[serde(default)]
    pub results: Vec<RawEntry>,
}

/// A single taxon entry with its observation count
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub count: Option<u64>,

    #[serde(default)]
    pub taxon: Option<RawTaxon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTaxon {
    /// Scientific name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub preferred_common_name: Option<String>,
}

/// One observed taxon within the queried region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Common name if present, else the scientific name
    #[serde(rename = "Species")]
    pub display_name: String,

    #[serde(rename = "Scientific_Name")]
    pub scientific_name: Option<String>,

    #[serde(rename = "Observation_Count")]
    pub observation_count: u64,
}

/// Records accumulated across all pages of one collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagedResultSet {
    pub records: Vec<SpeciesRecord>,

    /// Total declared by the first page
    pub total_results: u64,

    pub pages_fetched: u32,
}

impl PagedResultSet {
    /// True when every declared result was retained
    pub fn is_complete(&self) -> bool {
        self.records.len() as u64 == self.total_results
    }

    pub fn into_records(self) -> Vec<SpeciesRecord> {
        self.records
    }
}

/// Result of a successful collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// The service reported results and all pages were gathered
    Complete(PagedResultSet),
    /// The service reported zero results for the region
    NoData,
}
