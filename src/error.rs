use thiserror::Error;

/// An error from model construction, distribution estimation or chart
/// generation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimError {
    /// The arrival rate was not a positive finite number.
    ///
    /// Rejected at construction so that the mean `1/rate` is well-defined for
    /// every later draw and closed-form evaluation.
    #[error("arrival rate must be a positive finite number, got {rate}")]
    NonPositiveRate { rate: f64 },

    /// The estimator was given no samples, so binning is undefined.
    #[error("cannot estimate a distribution from an empty sample set")]
    EmptySample,

    /// The estimator was given a zero bin count.
    #[error("bin count must be at least 1, got {bins}")]
    InvalidBinCount { bins: usize },

    /// The sample maximum is zero or non-finite, so the binning range
    /// `[0, max]` has no width.
    #[error("sample maximum {max} does not span a usable binning range")]
    DegenerateSamples { max: f64 },

    /// Chart generation failed (filesystem or gnuplot).
    #[error("chart generation failed: {0}")]
    Chart(#[from] std::io::Error),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
