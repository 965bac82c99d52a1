//! Reporting of validation batch summary statistics

use crate::histogram::EmpiricalDistribution;

/// Print summary statistics for a validation batch to stdout
pub fn print_summary(rate: f64, samples: &[f64], empirical: &EmpiricalDistribution) {
    let count = samples.len();
    let total: f64 = samples.iter().sum();

    println!("\n=== Validation Batch ===");
    println!("Configured rate:          {:.6} arrivals/sec", rate);
    println!("Samples drawn:            {}", count);

    if count > 0 && total > 0.0 {
        println!("Simulated mean inter-arrival: {:.6}s", total / count as f64);
        println!("Simulated arrival rate:   {:.6} arrivals/sec", count as f64 / total);
    }

    println!("Histogram bins:           {}", empirical.len());
    if let Some(last) = empirical.cumulative.last() {
        println!("Cumulative mass captured: {:.6}", last);
    }
}
