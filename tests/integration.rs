use arrival_sim::{
    cdf_overlay, pdf_overlay, ArrivalProcess, ClosedForm, EmpiricalDistribution,
    ExponentialArrivals, SimError,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::LazyLock;

static TEST_SEED: LazyLock<u64> = LazyLock::new(|| {
    let seed = StdRng::from_os_rng().next_u64();
    println!("Using test seed: {}", seed);
    seed
});

#[test]
fn test_rate_5_validation_batch() {
    let seed = *TEST_SEED;
    let mut model = ExponentialArrivals::new(5.0, Some(seed)).unwrap();

    let (samples, empirical) = model.run_validation_batch(10_000, 100).unwrap();
    assert_eq!(samples.len(), 10_000);
    assert_eq!(empirical.len(), 100);

    // Sample mean converges to 1/rate = 0.2 at 10k samples
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!(
        (mean - 0.2).abs() < 0.01,
        "Mean {:.4} not within 0.01 of expected 0.2",
        mean
    );

    // cdf(1/rate) = 1 - e^-1 ~ 0.632
    let expected = 1.0 - (-1.0f64).exp();
    assert!(
        (model.cdf(0.2) - expected).abs() < 1e-12,
        "cdf(0.2) = {:.6}, expected {:.6}",
        model.cdf(0.2),
        expected
    );

    // Estimator invariants
    assert!(empirical.density.iter().all(|&d| d >= 0.0));
    assert!(
        empirical.cumulative.windows(2).all(|w| w[1] >= w[0]),
        "Cumulative estimate should be non-decreasing"
    );
    let last = *empirical.cumulative.last().unwrap();
    assert!(
        (last - 1.0).abs() < 1e-9,
        "Cumulative estimate should end at 1.0, got {}",
        last
    );
}

#[test]
fn test_empirical_cumulative_tracks_model_cdf() {
    let seed = *TEST_SEED;
    let mut model = ExponentialArrivals::new(5.0, Some(seed)).unwrap();

    let (_, empirical) = model.run_validation_batch(10_000, 100).unwrap();
    let half_width = empirical.bin_width() / 2.0;

    // The cumulative estimate at bin i approximates the CDF at the bin's
    // upper edge. With 10k samples the empirical CDF deviates by well under
    // 0.05 everywhere.
    for (i, (&center, &cumulative)) in empirical
        .bin_centers
        .iter()
        .zip(&empirical.cumulative)
        .enumerate()
    {
        let upper_edge = center + half_width;
        let deviation = (cumulative - model.cdf(upper_edge)).abs();
        assert!(
            deviation < 0.05,
            "Bin {}: cumulative {:.4} deviates {:.4} from model CDF at {:.4}",
            i,
            cumulative,
            deviation,
            upper_edge
        );
    }
}

#[test]
fn test_overlays_align_with_estimate() {
    let seed = *TEST_SEED;
    let mut model = ExponentialArrivals::new(5.0, Some(seed)).unwrap();

    let (_, empirical) = model.run_validation_batch(10_000, 100).unwrap();

    let pdf = pdf_overlay(&model, &empirical.bin_centers);
    let cdf = cdf_overlay(&model, &empirical.bin_centers);

    assert_eq!(pdf.len(), empirical.len());
    assert_eq!(cdf.len(), empirical.len());

    // First centers are substituted with 0 by convention
    assert_eq!(pdf[0], 0.0);
    assert_eq!(cdf[0], 0.0);

    // Remaining entries are the model evaluated at the centers
    assert!((pdf[1] - model.pdf(empirical.bin_centers[1])).abs() < 1e-12);
    assert!((cdf[1] - model.cdf(empirical.bin_centers[1])).abs() < 1e-12);
}

#[test]
fn test_estimator_rejects_invalid_inputs() {
    assert!(matches!(
        EmpiricalDistribution::from_samples(&[], 10),
        Err(SimError::EmptySample)
    ));
    assert!(matches!(
        EmpiricalDistribution::from_samples(&[1.0, 2.0], 0),
        Err(SimError::InvalidBinCount { bins: 0 })
    ));
}

#[test]
fn test_model_rejects_invalid_rate() {
    assert!(matches!(
        ExponentialArrivals::new(-1.0, None),
        Err(SimError::NonPositiveRate { .. })
    ));
    assert!(matches!(
        ExponentialArrivals::new(0.0, None),
        Err(SimError::NonPositiveRate { .. })
    ));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut model1 = ExponentialArrivals::new(8.0, Some(42)).unwrap();
    let mut model2 = ExponentialArrivals::new(8.0, Some(42)).unwrap();

    let (samples1, est1) = model1.run_validation_batch(1_000, 20).unwrap();
    let (samples2, est2) = model2.run_validation_batch(1_000, 20).unwrap();

    assert_eq!(samples1, samples2, "Same seed should produce same batch");
    assert_eq!(est1.bin_centers, est2.bin_centers);
    assert_eq!(est1.density, est2.density);
    assert_eq!(est1.cumulative, est2.cumulative);
}
