//! Console report for a finished run
//!
//! This module formats the rarest-species table and the run summary that
//! are printed once the pipeline completes.

use crate::analysis::RaritySummary;
use crate::collector::SpeciesRecord;
use crate::pipeline::{RunOutcome, RunReport};

/// Formats the rarest species as an aligned table
///
/// # Arguments
///
/// * `rarest` - Records in rarity order
///
/// # Returns
///
/// One line per species, numbered from 1
pub fn format_rarest_table(rarest: &[SpeciesRecord]) -> String {
    let width = rarest
        .iter()
        .map(|r| r.display_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, record) in rarest.iter().enumerate() {
        let scientific = record
            .scientific_name
            .as_deref()
            .filter(|s| *s != record.display_name)
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:>2}. {:<width$}  {:>6}{}\n",
            i + 1,
            record.display_name,
            record.observation_count,
            scientific,
            width = width
        ));
    }
    out
}

/// Prints the run summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The finished run
pub fn print_report(report: &RunReport) {
    println!("=== Species Rarity Report: place {} ===\n", report.place_id);

    match &report.outcome {
        RunOutcome::NoData => {
            println!("No wild species observations found for this place.");
            println!("No CSV or histogram was produced.");
        }
        RunOutcome::Completed {
            summary,
            rarest,
            csv_path,
            histogram_path,
            declared_total,
        } => {
            print_summary(summary, *declared_total);

            println!("Top {} rarest species:", rarest.len());
            print!("{}", format_rarest_table(rarest));
            println!();

            println!("Species table: {}", csv_path.display());
            println!("Histogram:     {}", histogram_path.display());
        }
    }

    if let Some(seconds) = report.duration_seconds() {
        println!("\nFinished in {} seconds", seconds);
    }
}

fn print_summary(summary: &RaritySummary, declared_total: u64) {
    println!("Overview:");
    println!(
        "  Species retained: {} (service reported {})",
        summary.species, declared_total
    );
    println!("  Total observations: {}", summary.total_observations);
    println!(
        "  Singletons: {} ({:.1}%)",
        summary.singletons,
        summary.singleton_rate()
    );
    println!("  Median observations per species: {:.1}", summary.median_count);
    if let Some(top) = &summary.most_observed {
        println!(
            "  Most observed: {} ({} observations)",
            top.display_name, top.observation_count
        );
    }
    println!();
}
