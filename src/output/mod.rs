//! Output module for persisting and presenting a rarity report
//!
//! This module handles:
//! - Exporting the ranked species table as CSV
//! - Rendering the log-binned count histogram
//! - Printing the run summary to the console

mod csv_output;
mod histogram;
pub mod stats;
mod traits;

pub use csv_output::{csv_file_name, CsvRecordSink, CSV_HEADERS};
pub use histogram::{histogram_file_name, SvgHistogramRenderer};
pub use stats::{format_rarest_table, print_report};
pub use traits::{HistogramRenderer, RecordSink, RenderContext};
