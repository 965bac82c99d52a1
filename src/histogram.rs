//! Empirical distribution estimation from sampled data

use crate::arrival::ClosedForm;
use crate::error::{SimError, SimResult};

/// Histogram-derived estimate of a distribution.
///
/// The three arrays are aligned: entry `i` describes the bin whose
/// representative value is `bin_centers[i]`. `density` integrates to ~1 over
/// the observed range, so it is directly comparable to a model PDF evaluated
/// at the same centers.
#[derive(Debug, Clone)]
pub struct EmpiricalDistribution {
    /// Midpoint of each bin
    pub bin_centers: Vec<f64>,
    /// Normalized density estimate per bin: `count / (n * bin_width)`
    pub density: Vec<f64>,
    /// Running sum of per-bin probability mass; non-decreasing, ends at 1.0
    pub cumulative: Vec<f64>,
}

impl EmpiricalDistribution {
    /// Estimate the distribution of `samples` over `bins` equal-width bins
    /// spanning `[0, max(samples)]`.
    ///
    /// Samples are non-negative inter-arrival times, so the lower edge is
    /// pinned at zero. A sample equal to the maximum lands in the last bin.
    pub fn from_samples(samples: &[f64], bins: usize) -> SimResult<Self> {
        if samples.is_empty() {
            return Err(SimError::EmptySample);
        }
        if bins == 0 {
            return Err(SimError::InvalidBinCount { bins });
        }

        let max = samples.iter().copied().fold(f64::MIN, f64::max);
        if !max.is_finite() || max <= 0.0 {
            return Err(SimError::DegenerateSamples { max });
        }

        let n = samples.len() as f64;
        let width = max / bins as f64;

        let mut counts = vec![0usize; bins];
        for &sample in samples {
            let idx = ((sample / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let bin_centers: Vec<f64> = (0..bins).map(|i| (i as f64 + 0.5) * width).collect();
        let density: Vec<f64> = counts.iter().map(|&c| c as f64 / (n * width)).collect();

        let mut cumulative = Vec::with_capacity(bins);
        let mut running = 0.0;
        for &c in &counts {
            running += c as f64 / n;
            cumulative.push(running);
        }

        Ok(Self {
            bin_centers,
            density,
            cumulative,
        })
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bin_centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bin_centers.is_empty()
    }

    /// Width of each bin (centers are equally spaced)
    pub fn bin_width(&self) -> f64 {
        // First center sits at width/2
        self.bin_centers.first().map_or(0.0, |&c| c * 2.0)
    }
}

/// Evaluate a model's PDF at the bin centers for overlay comparison.
///
/// The first center's value is substituted with 0: a density with its mode at
/// zero can diverge near the lower boundary, so by convention the first bin
/// is excluded from comparison.
pub fn pdf_overlay<M: ClosedForm>(model: &M, bin_centers: &[f64]) -> Vec<f64> {
    overlay(bin_centers, |x| model.pdf(x))
}

/// Evaluate a model's CDF at the bin centers for overlay comparison.
///
/// Follows the same first-center-substitution convention as [`pdf_overlay`].
pub fn cdf_overlay<M: ClosedForm>(model: &M, bin_centers: &[f64]) -> Vec<f64> {
    overlay(bin_centers, |x| model.cdf(x))
}

fn overlay(bin_centers: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    bin_centers
        .iter()
        .enumerate()
        .map(|(i, &x)| if i == 0 { 0.0 } else { f(x) })
        .collect()
}
