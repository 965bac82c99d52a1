//! Synthetic inter-arrival time generation, validated against closed-form
//! distributions.
//!
//! A concrete [`ArrivalProcess`] draws independent inter-arrival samples. The
//! [`EmpiricalDistribution`] estimator turns a batch of samples into a
//! normalized histogram and cumulative curve, which can then be compared
//! against the model's own [`ClosedForm`] PDF/CDF evaluated at the same bin
//! centers.

pub mod arrival;
pub mod error;
pub mod histogram;
pub mod report;
pub mod visualise;

pub use arrival::{ArrivalProcess, ClosedForm, ExponentialArrivals};
pub use error::{SimError, SimResult};
pub use histogram::{cdf_overlay, pdf_overlay, EmpiricalDistribution};
