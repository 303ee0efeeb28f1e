//! Summary statistics over a collected species set

use crate::collector::SpeciesRecord;

/// Aggregate figures printed at the end of a run
#[derive(Debug, Clone, PartialEq)]
pub struct RaritySummary {
    /// Number of distinct species retained
    pub species: usize,

    /// Sum of all observation counts
    pub total_observations: u64,

    /// Species seen exactly once
    pub singletons: usize,

    pub median_count: f64,

    /// Species with the highest count (first in arrival order on ties)
    pub most_observed: Option<SpeciesRecord>,
}

impl RaritySummary {
    /// Computes the summary for `records`
    pub fn from_records(records: &[SpeciesRecord]) -> Self {
        let mut counts: Vec<u64> = records.iter().map(|r| r.observation_count).collect();
        counts.sort_unstable();

        let median_count = match counts.len() {
            0 => 0.0,
            n if n % 2 == 1 => counts[n / 2] as f64,
            n => (counts[n / 2 - 1] + counts[n / 2]) as f64 / 2.0,
        };

        let most_observed = records
            .iter()
            .fold(None::<&SpeciesRecord>, |best, record| match best {
                Some(b) if b.observation_count >= record.observation_count => Some(b),
                _ => Some(record),
            })
            .cloned();

        Self {
            species: records.len(),
            total_observations: counts.iter().sum(),
            singletons: counts.iter().filter(|&&c| c == 1).count(),
            median_count,
            most_observed,
        }
    }

    /// Share of species observed exactly once, as a percentage
    pub fn singleton_rate(&self) -> f64 {
        if self.species == 0 {
            return 0.0;
        }
        (self.singletons as f64 / self.species as f64) * 100.0
    }
}
