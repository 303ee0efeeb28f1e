//! Histogram rendering
//!
//! Bars are drawn at the log-scale bin edges on a logarithmic count axis.
//! Only powers of ten inside the observed range are labelled.

use crate::analysis::Histogram;
use crate::output::traits::{HistogramRenderer, RenderContext};
use crate::{OutputError, OutputResult};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Image size in pixels
const IMAGE_SIZE: (u32, u32) = (1000, 600);

/// File name of the histogram image for a region
pub fn histogram_file_name(place_id: u64) -> String {
    format!("species_histogram_place_{}.svg", place_id)
}

/// Renders histograms as SVG into `{directory}/species_histogram_place_{id}.svg`
#[derive(Debug, Clone)]
pub struct SvgHistogramRenderer {
    directory: PathBuf,
}

impl SvgHistogramRenderer {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, place_id: u64) -> PathBuf {
        self.directory.join(histogram_file_name(place_id))
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> OutputError {
    OutputError::Render(err.to_string())
}

impl HistogramRenderer for SvgHistogramRenderer {
    fn render(&self, histogram: &Histogram, context: &RenderContext) -> OutputResult<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.path_for(context.place_id);

        draw_histogram(histogram, &context.caption, &path)?;

        tracing::debug!(
            "Rendered {} bins to {}",
            histogram.edges.bin_count(),
            path.display()
        );
        Ok(path)
    }
}

/// Draws `histogram` into an SVG file at `path`
fn draw_histogram(histogram: &Histogram, caption: &str, path: &Path) -> OutputResult<()> {
    let ticks: Vec<f64> = histogram.ticks().into_iter().map(|t| t as f64).collect();
    let x_range = (histogram.edges.first()..histogram.edges.last())
        .log_scale()
        .with_key_points(ticks);
    let y_max = (histogram.peak() as f64 * 1.1).max(1.0);

    let root = SVGBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0f64..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Observation count (log scale)")
        .y_desc("Number of species")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(render_error)?;

    let bars = histogram.edges.intervals().zip(histogram.counts.iter());
    chart
        .draw_series(bars.map(|((lo, hi), &count)| {
            Rectangle::new([(lo, 0.0), (hi, count as f64)], BLUE.mix(0.6).filled())
        }))
        .map_err(render_error)?;

    let outlines = histogram.edges.intervals().zip(histogram.counts.iter());
    chart
        .draw_series(outlines.map(|((lo, hi), &count)| {
            Rectangle::new([(lo, 0.0), (hi, count as f64)], BLACK.stroke_width(1))
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
