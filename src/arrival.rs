//! Arrival process models (exponential, etc.)

use rand::SeedableRng;
use rand_distr::{Distribution, Exp};

use crate::error::{SimError, SimResult};
use crate::histogram::EmpiricalDistribution;

/// A stochastic inter-arrival time generator.
///
/// Each call to [`next_inter_arrival`](ArrivalProcess::next_inter_arrival)
/// draws one sample, independent of all prior draws. Implementations own
/// their RNG, so two instances constructed with the same seed produce
/// identical draw sequences.
pub trait ArrivalProcess {
    /// Sample the next inter-arrival time, in seconds.
    fn next_inter_arrival(&mut self) -> f64;

    /// Draw `count` independent samples.
    fn sample_batch(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_inter_arrival()).collect()
    }

    /// Draw `count` samples and estimate their empirical distribution over
    /// `bins` equal-width bins.
    ///
    /// No side effects beyond advancing the model's RNG.
    fn run_validation_batch(
        &mut self,
        count: usize,
        bins: usize,
    ) -> SimResult<(Vec<f64>, EmpiricalDistribution)> {
        let samples = self.sample_batch(count);
        tracing::debug!(count, bins, "drew validation batch");
        let empirical = EmpiricalDistribution::from_samples(&samples, bins)?;
        Ok((samples, empirical))
    }
}

/// Closed-form density and cumulative functions for a model.
///
/// Implemented only by models whose distribution has a known closed form.
/// Overlay comparison (see [`crate::histogram::pdf_overlay`]) requires this
/// bound, so "does this model carry a PDF?" is answered by the type system
/// rather than a runtime capability flag.
pub trait ClosedForm {
    /// Probability density at `x >= 0`. Behaviour for `x < 0` is unspecified;
    /// callers must guard.
    fn pdf(&self, x: f64) -> f64;

    /// Probability that a draw is `<= x`.
    fn cdf(&self, x: f64) -> f64;
}

/// Exponential inter-arrival model.
///
/// Inter-arrival times are exponentially distributed with mean `1/rate`,
/// which makes the resulting arrival stream a Poisson process.
pub struct ExponentialArrivals {
    /// Mean arrival rate (arrivals per second)
    rate: f64,
    /// Exponential distribution for inter-arrival times
    exp_dist: Exp<f64>,
    /// RNG for reproducibility
    rng: rand::rngs::StdRng,
}

impl ExponentialArrivals {
    /// Create a new exponential arrival model.
    ///
    /// # Arguments
    /// * `rate` - Mean arrival rate in arrivals per second; must be finite and
    ///   strictly positive
    /// * `seed` - Optional seed for reproducibility
    ///
    /// Fails with [`SimError::NonPositiveRate`] for a non-positive or
    /// non-finite rate. Validated here rather than at draw time to fail fast.
    pub fn new(rate: f64, seed: Option<u64>) -> SimResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SimError::NonPositiveRate { rate });
        }
        let exp_dist = Exp::new(rate).map_err(|_| SimError::NonPositiveRate { rate })?;
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_os_rng(),
        };

        Ok(Self {
            rate,
            exp_dist,
            rng,
        })
    }

    /// Get the mean arrival rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mean inter-arrival time (`1/rate`)
    pub fn mean_inter_arrival(&self) -> f64 {
        1.0 / self.rate
    }
}

impl ArrivalProcess for ExponentialArrivals {
    fn next_inter_arrival(&mut self) -> f64 {
        self.exp_dist.sample(&mut self.rng)
    }
}

impl ClosedForm for ExponentialArrivals {
    fn pdf(&self, x: f64) -> f64 {
        self.rate * (-self.rate * x).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        1.0 - (-self.rate * x).exp()
    }
}
