//! Visualisation of empirical vs model distributions using gnuplot

use crate::error::{SimError, SimResult};
use crate::histogram::EmpiricalDistribution;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Visualiser for generating comparison charts from an estimated distribution
pub struct Visualiser<'a> {
    empirical: &'a EmpiricalDistribution,
    pdf_overlay: Option<&'a [f64]>,
    cdf_overlay: Option<&'a [f64]>,
    output_dir: PathBuf,
    templates_dir: PathBuf,
}

impl<'a> Visualiser<'a> {
    /// Create a new visualiser
    ///
    /// # Arguments
    /// * `empirical` - Estimated distribution to chart
    /// * `output_dir` - Directory where charts will be written
    /// * `templates_dir` - Directory containing gnuplot template files
    pub fn new(
        empirical: &'a EmpiricalDistribution,
        output_dir: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            empirical,
            pdf_overlay: None,
            cdf_overlay: None,
            output_dir: output_dir.into(),
            templates_dir: templates_dir.into(),
        }
    }

    /// Overlay a model PDF (evaluated at the bin centers) on the density chart
    pub fn with_pdf_overlay(mut self, overlay: &'a [f64]) -> Self {
        self.pdf_overlay = Some(overlay);
        self
    }

    /// Overlay a model CDF (evaluated at the bin centers) on the cumulative chart
    pub fn with_cdf_overlay(mut self, overlay: &'a [f64]) -> Self {
        self.cdf_overlay = Some(overlay);
        self
    }

    /// Generate the density comparison chart
    pub fn density_chart(&self) -> SimResult<()> {
        let output_path = self.output_dir.join("density_comparison.png");
        let template_path = self.templates_dir.join("density_comparison.gnuplot");

        generate_comparison_chart(
            &self.empirical.bin_centers,
            &self.empirical.density,
            self.pdf_overlay,
            "Model PDF",
            &output_path,
            &template_path,
        )
    }

    /// Generate the cumulative comparison chart
    pub fn cumulative_chart(&self) -> SimResult<()> {
        let output_path = self.output_dir.join("cumulative_comparison.png");
        let template_path = self.templates_dir.join("cumulative_comparison.gnuplot");

        generate_comparison_chart(
            &self.empirical.bin_centers,
            &self.empirical.cumulative,
            self.cdf_overlay,
            "Model CDF",
            &output_path,
            &template_path,
        )
    }

    /// Generate all comparison charts
    pub fn generate_all(&self) -> SimResult<()> {
        self.density_chart()?;
        self.cumulative_chart()?;
        Ok(())
    }
}

/// Generate a single empirical-vs-model chart using gnuplot
fn generate_comparison_chart(
    centers: &[f64],
    empirical: &[f64],
    model: Option<&[f64]>,
    model_label: &str,
    output_path: &Path,
    template_path: &Path,
) -> SimResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Create data file
    let data_path = output_path.with_extension("dat");
    let mut data_file = std::fs::File::create(&data_path)?;
    match model {
        Some(model) => {
            writeln!(data_file, "# bin_center empirical model")?;
            for ((x, e), m) in centers.iter().zip(empirical).zip(model) {
                writeln!(data_file, "{} {} {}", x, e, m)?;
            }
        }
        None => {
            writeln!(data_file, "# bin_center empirical")?;
            for (x, e) in centers.iter().zip(empirical) {
                writeln!(data_file, "{} {}", x, e)?;
            }
        }
    }

    // Only plot the model column when an overlay was supplied
    let model_plot = match model {
        Some(_) => format!(
            ", \"{}\" using 1:3 with lines dashtype 2 title \"{}\"",
            data_path.display(),
            model_label
        ),
        None => String::new(),
    };

    // Read template and substitute placeholders
    let template = std::fs::read_to_string(template_path)?;
    let script_content = template
        .replace("{{OUTPUT_PATH}}", &output_path.display().to_string())
        .replace("{{DATA_PATH}}", &data_path.display().to_string())
        .replace("{{MODEL_PLOT}}", &model_plot);

    // Write gnuplot script to a unique temp file
    let mut temp_script = NamedTempFile::new()?;
    temp_script.write_all(script_content.as_bytes())?;
    temp_script.flush()?;

    // Run gnuplot (temp file will be automatically deleted when dropped)
    let output = Command::new("gnuplot").arg(temp_script.path()).output()?;

    if !output.status.success() {
        return Err(SimError::Chart(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "gnuplot failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ),
        )));
    }

    println!("Generated chart: {}", output_path.display());

    Ok(())
}
