//! Analysis of a collected species set
//!
//! This module handles:
//! - Ranking species by rarity
//! - Building log-scale histogram bins over observation counts
//! - Computing run summary figures

mod bins;
mod rank;
pub mod summary;

pub use bins::{compute_log_bins, decade_ticks, partition, BinEdges, Histogram};
pub use rank::{rank, top_n};
pub use summary::RaritySummary;
