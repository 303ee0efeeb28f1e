//! Configuration module for Species-Rarity
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and interpreting the region identifier given on the
//! command line.
//!
//! # Example
//!
//! ```no_run
//! use species_rarity::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("rarity.toml")).unwrap();
//! println!("Page size: {}", config.api.per_page);
//! ```

mod parser;
mod place;
mod types;
mod validation;

// Re-export types
pub use types::{
    AnalysisConfig, CollectorConfig, Config, OutputConfig, DEFAULT_BASE_URL, DEFAULT_BIN_COUNT,
    DEFAULT_TOP_N, MAX_PER_PAGE,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use place::{parse_place_id, PlaceSelection, DEFAULT_PLACE_ID};
pub use validation::validate;
