//! Integration tests for the species rarity report
//!
//! These tests use wiremock to stand in for the species counts API and run
//! the collection loop and the full pipeline end-to-end.

mod collection_tests;
mod pipeline_tests;
