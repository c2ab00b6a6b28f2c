//! CLI command handlers, one file per command.

mod clean;
mod features;
mod inspect;
mod report;
mod run;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use clean::run_clean;
pub use features::run_features;
pub use inspect::run_inspect;
pub use run::run_pipeline;

/// Picks the explicit `--output` path, else the configured default.
fn resolve_output(explicit: Option<&Path>, configured: Option<&PathBuf>, what: &str) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| configured.cloned())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no {} output path: pass --output or set it in the [output] config section",
                what
            )
        })
}
