//! Species-Rarity main entry point
//!
//! This is the command-line interface for the species rarity report.

use anyhow::Context;
use clap::Parser;
use species_rarity::config::{load_config_or_default, parse_place_id, Config, PlaceSelection};
use species_rarity::output::print_report;
use species_rarity::pipeline::run_for_place;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Species-Rarity: rank the wild species of a region by rarity
///
/// Collects every wild species observation count for a region, exports the
/// ranking as CSV and draws the count distribution as a log-binned histogram.
#[derive(Parser, Debug)]
#[command(name = "species-rarity")]
#[command(version)]
#[command(about = "Rank the wild species of a region by rarity", long_about = None)]
struct Cli {
    /// Region identifier (place_id); prompted for when omitted
    #[arg(value_name = "PLACE_ID")]
    place_id: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the CSV table and histogram image
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Number of log-spaced histogram bin points
    #[arg(long)]
    bins: Option<usize>,

    /// Number of rarest species to list
    #[arg(long)]
    top: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let raw_place = match &cli.place_id {
        Some(value) => value.clone(),
        None => prompt_place_id().context("Failed to read place ID from stdin")?,
    };
    let selection = parse_place_id(&raw_place);
    if let PlaceSelection::Fallback { input, place_id } = &selection {
        tracing::warn!(
            "'{}' is not a valid place ID, using default place {}",
            input,
            place_id
        );
    }
    let place_id = selection.place_id();

    match run_for_place(&config, place_id).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{} stage failed: {}", e.stage(), e);
            Err(anyhow::Error::new(e).context("Species rarity report aborted"))
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("species_rarity=info,warn"),
            1 => EnvFilter::new("species_rarity=debug,info"),
            2 => EnvFilter::new("species_rarity=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(bins) = cli.bins {
        config.analysis.bin_count = bins;
    }
    if let Some(top) = cli.top {
        config.analysis.top_n = top;
    }

    species_rarity::config::validate(&config).context("Invalid command-line options")?;

    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }
    Ok(config)
}

/// Asks for a place ID on stdin
fn prompt_place_id() -> std::io::Result<String> {
    print!("Enter place ID: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
