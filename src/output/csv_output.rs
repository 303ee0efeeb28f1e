//! CSV export of the ranked species table

use crate::collector::SpeciesRecord;
use crate::output::traits::RecordSink;
use crate::OutputResult;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Column headers, in order
pub const CSV_HEADERS: [&str; 3] = ["Species", "Scientific_Name", "Observation_Count"];

/// File name of the species table for a region
pub fn csv_file_name(place_id: u64) -> String {
    format!("species_counts_place_{}.csv", place_id)
}

/// Writes one row per species into `{directory}/species_counts_place_{id}.csv`
#[derive(Debug, Clone)]
pub struct CsvRecordSink {
    directory: PathBuf,
}

impl CsvRecordSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, place_id: u64) -> PathBuf {
        self.directory.join(csv_file_name(place_id))
    }
}

#[derive(Debug, Deserialize)]
struct CountColumn {
    #[serde(rename = "Observation_Count")]
    observation_count: u64,
}

impl RecordSink for CsvRecordSink {
    fn persist(&self, place_id: u64, records: &[SpeciesRecord]) -> OutputResult<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.path_for(place_id);

        // Headers are written explicitly so an empty table still carries them
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(CSV_HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
        Ok(path)
    }

    fn read_counts(&self, path: &Path) -> OutputResult<Vec<u64>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut counts = Vec::new();
        for row in reader.deserialize::<CountColumn>() {
            counts.push(row?.observation_count);
        }
        Ok(counts)
    }
}
