use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound the species-observation API accepts for `per_page`
pub const MAX_PER_PAGE: u32 = 500;

/// Default API root for species counts
pub const DEFAULT_BASE_URL: &str = "https://api.inaturalist.org/v1";

/// Number of log-spaced bin points used when none is configured
pub const DEFAULT_BIN_COUNT: usize = 15;

/// Size of the rarest-species view when none is configured
pub const DEFAULT_TOP_N: usize = 10;

/// Main configuration structure for Species-Rarity
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: CollectorConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Remote API and pacing configuration consumed by the collection loop
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// API root, e.g. `https://api.inaturalist.org/v1`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Page size requested from the service (clamped to 500)
    #[serde(rename = "per-page")]
    pub per_page: u32,

    /// Pause between consecutive page requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Transport-level timeout for a single request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl CollectorConfig {
    /// Page size actually sent to the service
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: MAX_PER_PAGE,
            request_delay_ms: 1000,
            timeout_secs: 30,
            user_agent: format!(
                "{}/{} (+https://www.inaturalist.org/pages/api+reference)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// Ranking and binning configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of log-uniform points generated before truncation
    #[serde(rename = "bin-count")]
    pub bin_count: usize,

    /// How many of the rarest species to report
    #[serde(rename = "top-n")]
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the CSV table and histogram image
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}
