//! Species-Rarity: a wild species rarity report for one region
//!
//! This crate collects every wild (non-captive) species count for a region
//! from a paginated species-observation API, ranks species by rarity, exports
//! the ranking as CSV, and renders the count distribution as a log-binned
//! histogram.

pub mod analysis;
pub mod collector;
pub mod config;
pub mod output;
pub mod pipeline;

use thiserror::Error;

/// Failure of a single page request against the remote service
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Malformed response body from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Collection aborted on a page fetch; accumulated records are discarded
#[derive(Debug, Error)]
#[error("Collection failed on page {page}: {cause}")]
pub struct CollectionFailure {
    pub page: u32,
    #[source]
    pub cause: TransportError,
}

/// Bin edge computation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BinningError {
    #[error("Cannot compute bins for an empty count list")]
    EmptyInput,

    #[error("At least 2 bin points are required, got {0}")]
    TooFewBins(usize),
}

/// Errors raised by the report sinks (CSV export, histogram rendering)
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render histogram: {0}")]
    Render(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Main error type for a report run, tagged by the stage that failed
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Collection(#[from] CollectionFailure),

    #[error("Failed to persist species table: {0}")]
    Persistence(#[source] OutputError),

    #[error("Failed to read back species table: {0}")]
    PlottingInput(#[source] OutputError),

    #[error("Failed to compute histogram bins: {0}")]
    Binning(#[from] BinningError),

    #[error("Failed to render histogram: {0}")]
    Rendering(#[source] OutputError),
}

impl PipelineError {
    /// Name of the pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Config(_) => "configuration",
            PipelineError::Client(_) | PipelineError::Collection(_) => "collection",
            PipelineError::Persistence(_) => "persistence",
            PipelineError::PlottingInput(_)
            | PipelineError::Binning(_)
            | PipelineError::Rendering(_) => "plotting",
        }
    }
}

/// Result type alias for report runs
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use analysis::{compute_log_bins, rank, top_n, BinEdges};
pub use collector::{collect_all, normalize, CollectionOutcome, PagedResultSet, SpeciesRecord};
pub use config::Config;
pub use pipeline::{run_pipeline, RunReport};
