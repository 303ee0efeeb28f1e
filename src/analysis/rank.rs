//! Rarity ranking of species records

use crate::collector::SpeciesRecord;

/// Orders records by observation count, rarest first
///
/// The sort is stable: records with equal counts keep their arrival order.
pub fn rank(mut records: Vec<SpeciesRecord>) -> Vec<SpeciesRecord> {
    records.sort_by_key(|record| record.observation_count);
    records
}

/// Returns the `n` rarest records (fewer when the set is smaller)
pub fn top_n(records: &[SpeciesRecord], n: usize) -> Vec<SpeciesRecord> {
    let mut ranked = rank(records.to_vec());
    ranked.truncate(n);
    ranked
}
