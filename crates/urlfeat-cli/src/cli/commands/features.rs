//! `urlfeat features` – build the feature matrix from a processed table.

use anyhow::{Context, Result};
use std::path::Path;
use urlfeat_core::config::UrlfeatConfig;
use urlfeat_core::dataset::Dataset;
use urlfeat_core::pipeline;

use super::report;
use super::resolve_output;

pub fn run_features(cfg: &UrlfeatConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let output = resolve_output(
        output,
        cfg.output.as_ref().and_then(|o| o.features_path.as_ref()),
        "features",
    )?;
    let table = Dataset::read_csv(input)?;
    let matrix = pipeline::build_features(&table, cfg)
        .with_context(|| format!("build features from {}", input.display()))?;
    report::print_matrix(&matrix);
    matrix.write_csv(&output)?;
    println!("Saved {} rows to {}", matrix.shape().0, output.display());
    Ok(())
}
