//! Report pipeline - collection, ranking, export and plotting for one region
//!
//! Stages run in order and the first failure stops the run:
//! 1. Collect every page of species counts (all or nothing)
//! 2. Rank the records, rarest first
//! 3. Persist the ranked table
//! 4. Read the counts back from the persisted table, bin and render them
//!
//! A region without observations ends the run early without writing files.

use crate::analysis::{rank, top_n, Histogram, RaritySummary};
use crate::collector::{
    collect_all, CollectionOutcome, HttpPageFetcher, PageFetcher, SpeciesRecord,
};
use crate::config::Config;
use crate::output::{
    CsvRecordSink, HistogramRenderer, RecordSink, RenderContext, SvgHistogramRenderer,
};
use crate::PipelineError;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// How a run ended
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The region has no wild species observations; nothing was written
    NoData,
    /// Files were written for the region
    Completed {
        summary: RaritySummary,
        rarest: Vec<SpeciesRecord>,
        csv_path: PathBuf,
        histogram_path: PathBuf,
        declared_total: u64,
    },
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub place_id: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self.outcome, RunOutcome::NoData)
    }

    /// Wall-clock duration of the run, once finished
    pub fn duration_seconds(&self) -> Option<u64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds().max(0) as u64)
    }
}

/// Runs the report for `place_id` against the configured remote API,
/// writing into the configured output directory
pub async fn run_for_place(config: &Config, place_id: u64) -> Result<RunReport, PipelineError> {
    let fetcher = HttpPageFetcher::new(&config.api).map_err(PipelineError::Client)?;
    tracing::debug!("Using endpoint {}", fetcher.endpoint());
    let sink = CsvRecordSink::new(&config.output.directory);
    let renderer = SvgHistogramRenderer::new(&config.output.directory);

    run_pipeline(config, place_id, &fetcher, &sink, &renderer).await
}

/// Runs the full pipeline with the given collaborators
///
/// # Arguments
///
/// * `config` - Pacing, ranking and binning settings
/// * `place_id` - Region identifier
/// * `fetcher` - Source of species count pages
/// * `sink` - Destination of the ranked table
/// * `renderer` - Histogram renderer
///
/// # Returns
///
/// * `Ok(RunReport)` - The run completed, or found no data
/// * `Err(PipelineError)` - A stage failed; see [`PipelineError::stage`]
pub async fn run_pipeline<F, S, R>(
    config: &Config,
    place_id: u64,
    fetcher: &F,
    sink: &S,
    renderer: &R,
) -> Result<RunReport, PipelineError>
where
    F: PageFetcher + ?Sized,
    S: RecordSink + ?Sized,
    R: HistogramRenderer + ?Sized,
{
    let started_at = Utc::now();
    tracing::info!("Collecting species counts for place {}", place_id);

    let set = match collect_all(fetcher, place_id, &config.api).await? {
        CollectionOutcome::NoData => {
            return Ok(finish(place_id, started_at, RunOutcome::NoData));
        }
        CollectionOutcome::Complete(set) => set,
    };

    if !set.is_complete() {
        tracing::warn!(
            "Retained {} of {} declared species",
            set.records.len(),
            set.total_results
        );
    }
    if set.records.is_empty() {
        tracing::warn!("No usable species records for place {}", place_id);
        return Ok(finish(place_id, started_at, RunOutcome::NoData));
    }

    let declared_total = set.total_results;
    let ranked = rank(set.into_records());
    let rarest = top_n(&ranked, config.analysis.top_n);
    let summary = RaritySummary::from_records(&ranked);

    let csv_path = sink
        .persist(place_id, &ranked)
        .map_err(PipelineError::Persistence)?;
    tracing::info!("Saved {} species to {}", ranked.len(), csv_path.display());

    let counts = sink
        .read_counts(&csv_path)
        .map_err(PipelineError::PlottingInput)?;
    let histogram = Histogram::from_counts(&counts, config.analysis.bin_count)?;
    tracing::debug!("Bin edges: {:?}", histogram.edges.as_slice());

    let histogram_path = renderer
        .render(&histogram, &RenderContext::for_place(place_id))
        .map_err(PipelineError::Rendering)?;
    tracing::info!("Saved histogram to {}", histogram_path.display());

    Ok(finish(
        place_id,
        started_at,
        RunOutcome::Completed {
            summary,
            rarest,
            csv_path,
            histogram_path,
            declared_total,
        },
    ))
}

fn finish(place_id: u64, started_at: DateTime<Utc>, outcome: RunOutcome) -> RunReport {
    RunReport {
        place_id,
        started_at,
        finished_at: Some(Utc::now()),
        outcome,
    }
}
