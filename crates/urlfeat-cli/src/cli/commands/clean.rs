//! `urlfeat clean` – normalize, binarize and tokenize a raw table.

use anyhow::{Context, Result};
use std::path::Path;
use urlfeat_core::config::UrlfeatConfig;
use urlfeat_core::dataset::Dataset;
use urlfeat_core::pipeline::{self, CleanOutput};

use super::report;
use super::resolve_output;

pub(super) fn print_clean_output(out: &CleanOutput) {
    report::print_cleaning(&out.cleaning);
    if let Some(labels) = &out.labels {
        report::print_labels(labels);
    }
    if let Some(tokens) = &out.tokens {
        report::print_tokens(tokens);
    }
}

pub fn run_clean(cfg: &UrlfeatConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let output = resolve_output(
        output,
        cfg.output.as_ref().and_then(|o| o.cleaned_path.as_ref()),
        "cleaned",
    )?;
    let raw = Dataset::read_csv(input)?;
    let out = pipeline::clean_dataset(&raw, cfg)
        .with_context(|| format!("clean {}", input.display()))?;
    print_clean_output(&out);
    out.table.write_csv(&output)?;
    println!("Saved {} rows to {}", out.table.len(), output.display());
    Ok(())
}
