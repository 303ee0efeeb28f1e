//! Mapping of raw API entries to canonical species records

use crate::collector::types::{RawEntry, SpeciesRecord};

/// Converts a raw entry into a [`SpeciesRecord`]
///
/// The display name is the preferred common name, falling back to the
/// scientific name when the common name is missing or blank. Entries with
/// neither name, or without a count, yield `None`.
pub fn normalize(entry: &RawEntry) -> Option<SpeciesRecord> {
    let observation_count = entry.count?;
    let taxon = entry.taxon.as_ref()?;

    let scientific_name = non_blank(taxon.name.as_deref());
    let display_name = non_blank(taxon.preferred_common_name.as_deref())
        .or_else(|| scientific_name.clone())?;

    Some(SpeciesRecord {
        display_name,
        scientific_name,
        observation_count,
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
