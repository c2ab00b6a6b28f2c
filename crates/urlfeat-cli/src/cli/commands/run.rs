//! `urlfeat run` – clean and extract in one process.

use anyhow::{Context, Result};
use std::path::Path;
use urlfeat_core::config::UrlfeatConfig;
use urlfeat_core::dataset::Dataset;
use urlfeat_core::pipeline;

use super::clean::print_clean_output;
use super::report;
use super::resolve_output;

pub fn run_pipeline(
    cfg: &UrlfeatConfig,
    input: &Path,
    cleaned_output: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let output = resolve_output(
        output,
        cfg.output.as_ref().and_then(|o| o.features_path.as_ref()),
        "features",
    )?;
    let raw = Dataset::read_csv(input)?;
    let out = pipeline::run_pipeline(&raw, cfg)
        .with_context(|| format!("pipeline over {}", input.display()))?;

    print_clean_output(&out.cleaned);
    if let Some(path) = cleaned_output {
        out.cleaned.table.write_csv(path)?;
        println!("Saved cleaned table to {}", path.display());
    }

    report::print_matrix(&out.matrix);
    out.matrix.write_csv(&output)?;
    println!("Saved {} rows to {}", out.matrix.shape().0, output.display());
    Ok(())
}
