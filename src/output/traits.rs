//! Report sink traits
//!
//! The pipeline persists the ranked table through a [`RecordSink`] and draws
//! the distribution through a [`HistogramRenderer`], so both can be swapped
//! in tests.

use crate::analysis::Histogram;
use crate::collector::SpeciesRecord;
use crate::OutputResult;
use std::path::{Path, PathBuf};

/// Destination for the ranked species table
pub trait RecordSink {
    /// Writes the ranked records for `place_id` and returns where they went
    fn persist(&self, place_id: u64, records: &[SpeciesRecord]) -> OutputResult<PathBuf>;

    /// Reads the observation counts back from a persisted table
    fn read_counts(&self, path: &Path) -> OutputResult<Vec<u64>>;
}

/// Labels and placement for one histogram image
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub place_id: u64,
    pub caption: String,
}

impl RenderContext {
    pub fn for_place(place_id: u64) -> Self {
        Self {
            place_id,
            caption: format!(
                "Distribution of species observation counts (place {})",
                place_id
            ),
        }
    }
}

/// Draws a histogram image
pub trait HistogramRenderer {
    /// Renders `histogram` and returns the image path
    fn render(&self, histogram: &Histogram, context: &RenderContext) -> OutputResult<PathBuf>;
}
