//! Exponential arrival model demo: draw a validation batch, print summary
//! statistics and render the empirical-vs-model comparison charts.

use arrival_sim::visualise::Visualiser;
use arrival_sim::{cdf_overlay, pdf_overlay, ArrivalProcess, ExponentialArrivals, SimResult};

fn main() -> SimResult<()> {
    tracing_subscriber::fmt().init();

    let mut model = ExponentialArrivals::new(5.0, None)?;
    let (samples, empirical) = model.run_validation_batch(10_000, 100)?;

    arrival_sim::report::print_summary(model.rate(), &samples, &empirical);

    let pdf = pdf_overlay(&model, &empirical.bin_centers);
    let cdf = cdf_overlay(&model, &empirical.bin_centers);

    Visualiser::new(&empirical, "output", "templates")
        .with_pdf_overlay(&pdf)
        .with_cdf_overlay(&cdf)
        .generate_all()?;

    Ok(())
}
