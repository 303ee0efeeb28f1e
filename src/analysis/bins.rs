//! Logarithmic bin edges for the observation count distribution
//!
//! Edges are generated log-uniformly between the smallest positive count and
//! the largest count, truncated to integers and deduplicated. The resulting
//! intervals are `[edge[i], edge[i + 1])`, except the last which is closed.

use crate::BinningError;

/// Strictly increasing, positive, integral bin edges
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges(Vec<f64>);

impl BinEdges {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of intervals described by the edges
    pub fn bin_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> f64 {
        self.0.first().copied().unwrap_or(1.0)
    }

    pub fn last(&self) -> f64 {
        self.0.last().copied().unwrap_or(1.0)
    }

    /// Iterates over `(lower, upper)` pairs
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Computes log-scale bin edges for `counts`
///
/// # Arguments
///
/// * `counts` - Observation counts (zero allowed)
/// * `bin_count` - Number of log-uniform points generated before truncation
///
/// # Returns
///
/// * `Ok(BinEdges)` - At least two strictly increasing edges
/// * `Err(BinningError)` - Empty input or fewer than two points requested
pub fn compute_log_bins(counts: &[u64], bin_count: usize) -> Result<BinEdges, BinningError> {
    if bin_count < 2 {
        return Err(BinningError::TooFewBins(bin_count));
    }

    let min_c = counts.iter().copied().min().ok_or(BinningError::EmptyInput)?;
    let max_c = counts.iter().copied().max().ok_or(BinningError::EmptyInput)?;

    // log10(0) is undefined; the floor only shifts the first edge
    let floor = min_c.max(1);
    let hi = max_c.max(floor);

    let lo_log = (floor as f64).log10();
    let hi_log = (hi as f64).log10();
    let step = (hi_log - lo_log) / (bin_count - 1) as f64;

    let mut edges: Vec<f64> = (0..bin_count)
        .map(|i| match i {
            0 => floor as f64,
            i if i == bin_count - 1 => hi as f64,
            i => truncate(10f64.powf(lo_log + step * i as f64)),
        })
        .collect();
    edges.dedup();

    if edges.len() < 2 {
        edges = vec![hi as f64, (hi + 1) as f64];
    }

    Ok(BinEdges(edges))
}

/// Truncates toward zero, snapping values that sit within rounding error
/// of an integer
fn truncate(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        value.trunc()
    }
}

/// Counts how many values fall in each bin
///
/// Values below the first edge (zero counts) are placed in the first bin and
/// values above the last edge in the last bin.
pub fn partition(counts: &[u64], edges: &BinEdges) -> Vec<u64> {
    let edges = edges.as_slice();
    let bins = edges.len().saturating_sub(1);
    let mut totals = vec![0u64; bins];
    if bins == 0 {
        return totals;
    }

    let interior = &edges[1..bins];
    for &count in counts {
        let value = count as f64;
        let index = interior.partition_point(|&edge| edge <= value);
        totals[index] += 1;
    }
    totals
}

/// Powers of ten inside `[min_c, max_c]`, used as axis labels
pub fn decade_ticks(min_c: u64, max_c: u64) -> Vec<u64> {
    let mut ticks = Vec::new();
    let mut power: u64 = 1;
    loop {
        if power > max_c {
            break;
        }
        if power >= min_c {
            ticks.push(power);
        }
        match power.checked_mul(10) {
            Some(next) => power = next,
            None => break,
        }
    }
    ticks
}

/// Bin edges together with the number of records in each bin
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: BinEdges,
    pub counts: Vec<u64>,
    pub min_count: u64,
    pub max_count: u64,
}

impl Histogram {
    /// Bins `counts` with [`compute_log_bins`]
    pub fn from_counts(counts: &[u64], bin_count: usize) -> Result<Self, BinningError> {
        let edges = compute_log_bins(counts, bin_count)?;
        let totals = partition(counts, &edges);
        Ok(Self {
            min_count: counts.iter().copied().min().unwrap_or(0),
            max_count: counts.iter().copied().max().unwrap_or(0),
            edges,
            counts: totals,
        })
    }

    /// Decade tick positions for this histogram's count range
    pub fn ticks(&self) -> Vec<u64> {
        decade_ticks(self.min_count, self.max_count)
    }

    /// Tallest bar
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
